//! Parse failures recovered locally by the fail-soft helpers.
//!
//! None of these errors reach callers of the public formatting or validation
//! functions: they are logged and replaced with a documented default.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Malformed input encountered while formatting or validating a value.
pub enum ParseError {
    #[error("cannot format number '{0}'")]
    InvalidNumber(String),

    #[error("cannot format supply '{0}'")]
    InvalidSupply(String),

    #[error("cannot format size '{0}'")]
    InvalidSize(String),

    #[error("invalid query string: {0}")]
    InvalidQuery(String),
}
