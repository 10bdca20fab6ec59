use fractic_server_error::ServerError;

use crate::{entities::Bill, errors::InvalidBillDocument};

/// Raw store document. Fields live under `data`, mirroring the store's
/// `{ id, data() }` snapshot shape.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct BillDocumentModel {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) data: BillFieldsModel,
}

/// Wire fields of one bill. Everything is optional on the wire: a document
/// missing fields is still a bill, rendered with blanks downstream.
#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) struct BillFieldsModel {
    pub(crate) email: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) amount: Option<f64>,
    #[serde(rename = "type")]
    pub(crate) expense_type: Option<String>,
    pub(crate) status: Option<String>,
    #[serde(rename = "fileUrl")]
    pub(crate) file_url: Option<String>,
    pub(crate) commentary: Option<String>,
}

impl BillDocumentModel {
    pub(crate) fn from_value(value: serde_json::Value) -> Result<Self, ServerError> {
        let id = value
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("(unknown)")
            .to_string();
        serde_json::from_value(value).map_err(|e| InvalidBillDocument::with_debug(&id, &e))
    }
}

impl From<BillDocumentModel> for Bill {
    fn from(model: BillDocumentModel) -> Self {
        Bill {
            id: model.id,
            email: model.data.email.unwrap_or_default(),
            date: model.data.date.unwrap_or_default(),
            amount: model.data.amount,
            expense_type: model.data.expense_type.unwrap_or_default(),
            status: model.data.status.unwrap_or_default(),
            receipt_url: model.data.file_url,
            commentary: model.data.commentary,
        }
    }
}
