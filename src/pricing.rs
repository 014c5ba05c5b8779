//! Parsing and formatting for currency-tagged price strings.
//!
//! Catalog prices are stored as a fixed non-numeric prefix followed by a
//! base-10 decimal numeral (e.g. `R59.99`). Malformed prices fail loudly so
//! a bad catalog entry can never corrupt a running total.

use crate::errors::MenuError;

/// Currency prefix used by the builtin catalog.
pub const DEFAULT_PREFIX: &str = "R";

/// Parses a currency-tagged price using the default prefix.
pub fn parse_price(text: &str) -> Result<f64, MenuError> {
    parse_price_with_prefix(text, DEFAULT_PREFIX)
}

/// Parses a currency-tagged price string into its numeric amount.
///
/// The remainder after the prefix must be digits with at most one decimal
/// point: no sign, no thousands separators, no exponent.
pub fn parse_price_with_prefix(text: &str, prefix: &str) -> Result<f64, MenuError> {
    let invalid = |reason: &str| MenuError::InvalidPrice {
        text: text.to_string(),
        reason: reason.to_string(),
    };

    let body = text
        .strip_prefix(prefix)
        .ok_or_else(|| invalid(&format!("missing `{prefix}` prefix")))?;
    if body.is_empty() {
        return Err(invalid("no amount after prefix"));
    }
    let mut seen_point = false;
    for ch in body.chars() {
        match ch {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            '.' => return Err(invalid("more than one decimal point")),
            _ => return Err(invalid("amount is not a decimal numeral")),
        }
    }
    let amount: f64 = body
        .parse()
        .map_err(|_| invalid("amount is not a decimal numeral"))?;
    if !amount.is_finite() {
        return Err(invalid("amount is not finite"));
    }
    Ok(amount)
}

/// Formats an amount back into display form with the default prefix.
pub fn format_price(amount: f64) -> String {
    format_price_with_prefix(amount, DEFAULT_PREFIX)
}

/// Formats an amount with two decimals behind the given prefix.
pub fn format_price_with_prefix(amount: f64, prefix: &str) -> String {
    format!("{prefix}{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_prices() {
        assert_eq!(parse_price("R59.99").unwrap(), 59.99);
        assert_eq!(parse_price("R0").unwrap(), 0.0);
        assert_eq!(parse_price("R25").unwrap(), 25.0);
    }

    #[test]
    fn rejects_malformed_prices() {
        assert!(parse_price("R--").is_err());
        assert!(parse_price("59.99").is_err());
        assert!(parse_price("R").is_err());
        assert!(parse_price("R1.2.3").is_err());
        assert!(parse_price("R1e3").is_err());
        assert!(parse_price("R-5").is_err());
    }

    #[test]
    fn formatting_round_trips_through_parse() {
        let rendered = format_price(44.99);
        assert_eq!(rendered, "R44.99");
        assert_eq!(parse_price(&rendered).unwrap(), 44.99);
    }

    #[test]
    fn honors_custom_prefix() {
        assert_eq!(parse_price_with_prefix("$10.50", "$").unwrap(), 10.50);
        assert_eq!(format_price_with_prefix(10.5, "$"), "$10.50");
    }
}
