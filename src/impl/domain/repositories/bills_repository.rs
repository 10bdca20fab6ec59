use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::Bill;

#[async_trait]
pub trait BillsRepository: Send + Sync {
    /// Current employee's bills, in store order. A store failure propagates
    /// unchanged; no retry is attempted.
    async fn list(&self) -> Result<Vec<Bill>, ServerError>;
}
