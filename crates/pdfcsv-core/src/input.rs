//! Validation of the numeric user inputs.
//!
//! Both the command-line flags and the interactive prompts end up here so
//! that a bad value is rejected the same way regardless of where it came from.
//! Any integer is accepted, however large; only non-integer text is invalid.

use crate::error::PdfcsvError;
use crate::model::PageNumber;
use std::num::IntErrorKind;

/// Parse the header-count threshold. Surrounding whitespace is ignored.
///
/// Integers beyond `i64` saturate; no table row is ever that wide, so such
/// a count never triggers the column trim.
pub fn parse_header_count(raw: &str) -> Result<i64, PdfcsvError> {
    match parse_int(raw)? {
        PageNumber::Number(n) => Ok(n),
        PageNumber::Oversized(digits) if digits.starts_with('-') => Ok(i64::MIN),
        PageNumber::Oversized(_) => Ok(i64::MAX),
    }
}

/// Parse a comma-separated page list such as `"3, 1,2"`.
///
/// Order and duplicates are kept as given. Any token that is not an
/// integer (including an empty one, as in `"1,,2"`) rejects the whole list.
pub fn parse_page_list(raw: &str) -> Result<Vec<PageNumber>, PdfcsvError> {
    raw.split(',').map(parse_int).collect()
}

fn parse_int(token: &str) -> Result<PageNumber, PdfcsvError> {
    let token = token.trim();
    match token.parse::<i64>() {
        Ok(n) => Ok(PageNumber::Number(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(PageNumber::Oversized(canonical_digits(token)))
        }
        Err(_) => Err(PdfcsvError::InvalidInput),
    }
}

/// Decimal text without a `+` sign or leading zeros, e.g. `+007` -> `7`.
fn canonical_digits(token: &str) -> String {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let digits = digits.trim_start_matches('0');
    if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}
