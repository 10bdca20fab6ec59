/// A [`Bill`](super::bill::Bill) shaped for display: date and status replaced
/// by their presentation strings (or the raw stored value when formatting
/// failed). Derived and ephemeral, recomputed on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBill {
    pub id: String,
    pub email: String,
    /// Zero-padded `YYYY-MM-DD` display form, so that lexicographic order
    /// coincides with chronological order. Raw stored value if unparseable.
    pub date: String,
    pub amount: Option<f64>,
    pub expense_type: String,
    /// Localized status label. Raw stored value if unknown.
    pub status: String,
    pub receipt_url: Option<String>,
    pub commentary: Option<String>,
}
