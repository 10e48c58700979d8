//! # Strict Numeric Parsing
//!
//! Converts raw command-line tokens into `f64` values. Unlike a permissive
//! conversion that stops at the first non-digit, the whole token (apart from
//! surrounding whitespace) must be a number: `"12abc"` is rejected rather
//! than read as `12`.

use crate::errors::{TradesError, TradesResult};

/// Parse `token` as a floating-point number.
///
/// `field` names the argument in the error message. Accepts an optional
/// sign, decimal and scientific notation, and leading/trailing whitespace.
///
/// Fails with [`TradesError::Parse`] when the token is empty, malformed,
/// has trailing garbage, or is out of the normal range: overflow to
/// infinity, a non-zero literal that underflows to zero or to a subnormal
/// value, `inf`, `nan`.
///
/// ```rust
/// use trades_core::parse::parse_number;
///
/// assert_eq!(parse_number(" 12.5 ", "diameter").unwrap(), 12.5);
/// assert!(parse_number("12abc", "diameter").is_err());
/// ```
pub fn parse_number(token: &str, field: &str) -> TradesResult<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(TradesError::parse(field, token));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| TradesError::parse(field, token))?;

    let exact_zero = value == 0.0 && !has_nonzero_mantissa(trimmed);
    if !(value.is_normal() || exact_zero) {
        return Err(TradesError::parse(field, token));
    }

    Ok(value)
}

/// Parse `token` as a non-negative whole number (e.g. a count of shoes).
///
/// Same whitespace rules as [`parse_number`]; signs, decimals and exponents
/// are rejected.
pub fn parse_count(token: &str, field: &str) -> TradesResult<u32> {
    let trimmed = token.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TradesError::parse(field, token));
    }
    trimmed.parse().map_err(|_| TradesError::parse(field, token))
}

/// Parse a list of tokens against their field names, failing on the first bad token.
pub fn parse_fields<const N: usize, S: AsRef<str>>(tokens: &[S], fields: [&str; N]) -> TradesResult<[f64; N]> {
    let mut values = [0.0; N];
    for (slot, (token, field)) in values.iter_mut().zip(tokens.iter().zip(fields)) {
        *slot = parse_number(token.as_ref(), field)?;
    }
    Ok(values)
}

fn has_nonzero_mantissa(literal: &str) -> bool {
    literal
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}
