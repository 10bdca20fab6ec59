/// One employee expense submission, as stored. Created by the store;
/// read-only from this crate's perspective.
#[derive(Debug, Clone)]
pub struct Bill {
    pub id: String,
    pub email: String,
    /// Stored date string. Expected ISO (YYYY-MM-DD), but kept verbatim when
    /// it is not: malformed dates are preserved, never discarded.
    pub date: String,
    pub amount: Option<f64>,
    pub expense_type: String,
    /// Raw status value (`pending`, `accepted`, `refused`).
    pub status: String,
    pub receipt_url: Option<String>,
    pub commentary: Option<String>,
}
