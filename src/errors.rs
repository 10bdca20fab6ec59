use fractic_server_error::{define_client_error, define_internal_error};

// Store boundary.
define_client_error!(
    InvalidBillDocument,
    "Invalid bill document from store (id: {id}).",
    { id: &str }
);
define_internal_error!(
    StoreRequestFailed,
    "Store request failed: {message}.",
    { message: &str }
);

// Display formatting.
define_client_error!(InvalidBillDate, "Invalid bill date: {date}.", { date: &str });
define_client_error!(UnknownBillStatus, "Unknown bill status: {status}.", { status: &str });
