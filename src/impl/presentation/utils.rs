use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format an amount with thousands separators and the currency's number of
/// decimal places, followed by the currency code (ex. "-1,234.50 USD").
///
/// Always uses en locale ('.' as decimal mark) regardless of currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10f64.powi(decimal_places as i32);
    let minor_units = (amount.abs() * scale).round() as u64;
    let sign = if amount < 0.0 && minor_units > 0 { "-" } else { "" };
    let scale = scale as u64;
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{} {}", sign, integer_part, currency.code())
    } else {
        format!(
            "{}{}.{:0decimal_places$} {}",
            sign,
            integer_part,
            minor_units % scale,
            currency.code(),
        )
    }
}

/// Plain number for machine-readable output (ex. "1234.50").
pub(crate) fn format_plain(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    format!("{:.decimal_places$}", amount)
}
