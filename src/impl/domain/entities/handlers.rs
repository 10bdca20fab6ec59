use super::routes::Route;

// UI capabilities injected by the host shell.
// ---

pub trait NavigationHandler {
    fn on_navigate(&self, route: Route);
}

pub trait ReceiptPreviewHandler {
    /// Receives the receipt reference of the clicked record.
    fn on_preview(&self, receipt_url: &str);
}
