use async_trait::async_trait;
use fractic_server_error::ServerError;

/// External store boundary: the remote bills collection, one JSON document
/// per bill (`{ "id": …, "data": { …raw fields } }`).
///
/// Transport is out of scope for this crate; applications implement this
/// trait over whatever client they use, tests implement it with canned
/// responses. Each call is an independent read with no shared state, no
/// cancellation, and no timeout of its own.
#[async_trait]
pub trait BillStoreDatasource: Send + Sync {
    async fn list(&self) -> Result<Vec<serde_json::Value>, ServerError>;
}
