use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Format a cash amount with currency symbol, correct number of decimal
/// places, and proper thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency. Could be generalized in the
/// future.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = currency.exponent().unwrap_or(0) as usize;
    if decimal_places == 0 {
        let amount_rounded = (amount.round() as i64).to_formatted_string(&Locale::en);
        return format!("{} {}", amount_rounded, currency.symbol());
    }
    let amount_integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
    let amount_fractional_part = format!("{:.decimal_places$}", amount.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}.{:0decimal_places$} {}",
        amount_integer_part,
        amount_fractional_part,
        currency.symbol(),
    )
}

/// Minimal HTML escaping for text nodes and double-quoted attributes.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
