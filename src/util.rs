use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::bill_store_datasource::BillStoreDatasource,
        repositories::bills_repository_impl::BillsRepositoryImpl,
    },
    domain::usecases::fetch_bills_usecase::{FetchBillsUsecase as _, FetchBillsUsecaseImpl},
    entities::{BillsViewModel, DisplayBill, NavigationHandler, ReceiptPreviewHandler, Route},
    presentation::bills_page_printer::BillsPagePrinter,
};

pub type Markup = String;

/// Bills page facade. All outside capabilities are injected explicitly: the
/// store datasource, the navigation handler, and the receipt preview handler.
pub struct BillsPage<S, N, V>
where
    S: BillStoreDatasource,
    N: NavigationHandler,
    V: ReceiptPreviewHandler,
{
    fetch_bills_usecase: FetchBillsUsecaseImpl<BillsRepositoryImpl<S>>,
    printer: BillsPagePrinter,
    navigation: N,
    preview: V,
}

impl<S, N, V> BillsPage<S, N, V>
where
    S: BillStoreDatasource,
    N: NavigationHandler,
    V: ReceiptPreviewHandler,
{
    pub fn new(store: S, navigation: N, preview: V) -> Self {
        Self {
            fetch_bills_usecase: FetchBillsUsecaseImpl::new(store),
            printer: BillsPagePrinter::new(),
            navigation,
            preview,
        }
    }

    /// Fetch the current employee's bills, shaped for display. On store
    /// failure the error propagates unchanged; the caller's recovery path is
    /// to re-render with the message in [`BillsViewModel::error`].
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, ServerError> {
        self.fetch_bills_usecase.fetch_bills().await
    }

    /// Render exactly one of the three page states.
    pub fn render(&self, view_model: &BillsViewModel) -> Markup {
        self.printer.print_page(view_model)
    }

    /// Click pass-through for a row's eye affordance: hands the record's
    /// receipt reference to the preview handler.
    pub fn handle_click_icon_eye(&self, receipt_url: &str) {
        self.preview.on_preview(receipt_url);
    }

    /// Click pass-through for the new-bill button.
    pub fn handle_click_new_bill(&self) {
        self.navigation.on_navigate(Route::NewBill);
    }
}
