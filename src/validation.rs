//! Sanitizing of raw query parameters.
//!
//! All validators are total: malformed input degrades to a safe default and
//! never produces an error for the caller.

use std::num::IntErrorKind;

use crate::domain::types::{AddressType, TokenStatus};
use crate::errors::ParseError;
use crate::formatting::Numeric;

pub const MAX_SEARCH_LENGTH: usize = 200;
pub const MIN_PAGE_SIZE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 100;
/// Page size used when the requested one cannot be parsed.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Integer conversion with truncation of floating values. Out-of-range
/// integers saturate at the `i64` bounds.
fn parse_integer(value: &Numeric) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidNumber(value.to_string());
    match value {
        Numeric::Int(n) => Ok((*n).clamp(i64::MIN as i128, i64::MAX as i128) as i64),
        Numeric::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
        Numeric::Float(_) => Err(invalid()),
        Numeric::Text(text) => match text.trim().parse::<i64>() {
            Ok(n) => Ok(n),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(invalid()),
            },
        },
    }
}

/// Normalizes an address type filter. Unknown values mean "no filter" (`""`).
pub fn validate_address_type(address_type: &str) -> String {
    address_type
        .parse::<AddressType>()
        .map(|kind| kind.to_string())
        .unwrap_or_default()
}

/// Normalizes a token status filter. Unknown values mean "no filter" (`""`).
pub fn validate_token_status(status: &str) -> String {
    status
        .parse::<TokenStatus>()
        .map(|status| status.to_string())
        .unwrap_or_default()
}

/// Page number, at least 1.
pub fn validate_page(page: impl Into<Numeric>) -> i64 {
    match parse_integer(&page.into()) {
        Ok(page) => page.max(1),
        Err(err) => {
            log::warn!("Invalid page number, using 1: {err}");
            1
        }
    }
}

/// Trims the search term and caps it at [`MAX_SEARCH_LENGTH`] characters.
pub fn validate_search_term(search: &str) -> String {
    let cleaned = search.trim();
    if cleaned.chars().count() > MAX_SEARCH_LENGTH {
        log::info!("Search term truncated to {MAX_SEARCH_LENGTH} characters");
        return cleaned.chars().take(MAX_SEARCH_LENGTH).collect();
    }
    cleaned.to_string()
}

/// Page size clamped into `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
pub fn validate_page_size(per_page: impl Into<Numeric>) -> i64 {
    match parse_integer(&per_page.into()) {
        Ok(size) => size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        Err(err) => {
            log::warn!("Invalid page size, using {DEFAULT_PAGE_SIZE}: {err}");
            DEFAULT_PAGE_SIZE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_type_is_trimmed_and_lowercased() {
        assert_eq!(validate_address_type("WALLET "), "wallet");
        assert_eq!(validate_address_type("  Contract"), "contract");
        assert_eq!(validate_address_type("unknown"), "unknown");
    }

    #[test]
    fn unknown_address_type_means_no_filter() {
        assert_eq!(validate_address_type("bogus"), "");
        assert_eq!(validate_address_type(""), "");
        assert_eq!(validate_address_type("   "), "");
    }

    #[test]
    fn token_status_accepts_known_values_only() {
        assert_eq!(validate_token_status(" Detected"), "detected");
        assert_eq!(validate_token_status("FAILED"), "failed");
        assert_eq!(validate_token_status("pending"), "");
    }

    #[test]
    fn page_is_at_least_one() {
        assert_eq!(validate_page(5), 5);
        assert_eq!(validate_page(0), 1);
        assert_eq!(validate_page(-7), 1);
        assert_eq!(validate_page("12"), 12);
        assert_eq!(validate_page(3.9), 3);
    }

    #[test]
    fn unparseable_page_defaults_to_one() {
        assert_eq!(validate_page("abc"), 1);
        assert_eq!(validate_page("2.5"), 1);
        assert_eq!(validate_page(""), 1);
        assert_eq!(validate_page(f64::NAN), 1);
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(validate_page_size(9999), 100);
        assert_eq!(validate_page_size(-1), 1);
        assert_eq!(validate_page_size(0), 1);
        assert_eq!(validate_page_size("50"), 50);
    }

    #[test]
    fn oversized_integers_saturate_instead_of_defaulting() {
        assert_eq!(validate_page_size("99999999999999999999"), MAX_PAGE_SIZE);
        assert_eq!(validate_page_size("-99999999999999999999"), MIN_PAGE_SIZE);
        assert_eq!(validate_page("99999999999999999999"), i64::MAX);
        assert_eq!(validate_page("-99999999999999999999"), 1);
        assert_eq!(validate_page(u64::MAX), i64::MAX);
    }

    #[test]
    fn unparseable_page_size_uses_default() {
        assert_eq!(validate_page_size("abc"), 20);
        assert_eq!(validate_page_size(""), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn search_term_is_trimmed_and_truncated() {
        assert_eq!(validate_search_term("  0xabc  "), "0xabc");

        let long = "a".repeat(MAX_SEARCH_LENGTH + 50);
        let validated = validate_search_term(&long);
        assert_eq!(validated.chars().count(), MAX_SEARCH_LENGTH);

        let multibyte = "é".repeat(MAX_SEARCH_LENGTH + 1);
        assert_eq!(
            validate_search_term(&multibyte).chars().count(),
            MAX_SEARCH_LENGTH
        );
    }

    #[test]
    fn validators_are_idempotent() {
        for raw in ["-3", "0", "17", "abc", "99999"] {
            let page = validate_page(raw);
            assert_eq!(validate_page(page), page);

            let size = validate_page_size(raw);
            assert_eq!(validate_page_size(size), size);
        }

        let search = validate_search_term(&format!("  {}  ", "x".repeat(300)));
        assert_eq!(validate_search_term(&search), search);

        let kind = validate_address_type(" Wallet ");
        assert_eq!(validate_address_type(&kind), kind);
    }
}
