use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::{InvalidBillDate, UnknownBillStatus};

/// Reformat a stored date into its zero-padded `YYYY-MM-DD` display form.
/// The fixed width keeps lexicographic order aligned with chronological
/// order, which the presenter's sort relies on.
pub(crate) fn format_date(raw: &str) -> Result<String, ServerError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| InvalidBillDate::with_debug(raw, &e))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Localized status label for the stored status value.
pub(crate) fn format_status(raw: &str) -> Result<String, ServerError> {
    match raw {
        "pending" => Ok("En attente".to_string()),
        "accepted" => Ok("Accepté".to_string()),
        "refused" => Ok("Refusé".to_string()),
        other => Err(UnknownBillStatus::new(other)),
    }
}

/// Reduce a per-field formatting result to "value or raw fallback". A single
/// malformed field never aborts the fetch; the failure is logged and the
/// stored value is kept verbatim.
pub(crate) fn formatted_or_raw(
    formatted: Result<String, ServerError>,
    raw: &str,
    field: &str,
    bill_id: &str,
) -> String {
    match formatted {
        Ok(value) => value,
        Err(e) => {
            log::warn!("keeping raw {} for bill '{}': {}", field, bill_id, e);
            raw.to_string()
        }
    }
}
