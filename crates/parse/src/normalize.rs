use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use slip_core::Currency;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("no numeric value in price field: {0:?}")]
    Malformed(String),
}

/// Look for a currency marker in the raw substring. Codes are matched
/// case-insensitively because item lines arrive lower-cased; symbols
/// survive lower-casing untouched. No marker means USD.
pub fn detect_currency(raw: &str) -> Currency {
    let lower = raw.to_lowercase();
    if raw.contains('$') || lower.contains("usd") {
        Currency::Usd
    } else if raw.contains('€') || lower.contains("eur") {
        Currency::Eur
    } else if raw.contains('£') || lower.contains("gbp") {
        Currency::Gbp
    } else {
        Currency::Usd
    }
}

/// Turn a raw price substring into an amount and a currency code.
///
/// Every character that is not a digit or decimal point is stripped
/// before parsing; whatever remains must read as a decimal number or
/// the price is rejected. Rejection drops the single line item, never
/// the whole receipt.
pub fn normalize_price(raw: &str) -> Result<(Decimal, Currency), PriceError> {
    let currency = detect_currency(raw);
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let amount =
        Decimal::from_str(&digits).map_err(|_| PriceError::Malformed(raw.to_string()))?;
    Ok((amount, currency))
}
