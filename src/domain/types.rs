//! Enumerated filter values accepted by the dashboard listings.
//!
//! Parsing is strict (`FromStr` rejects anything outside the set); the lenient,
//! empty-means-no-filter behaviour lives in [`crate::validation`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when a filter value falls outside its enumerated set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("unknown address type: {0}")]
    UnknownAddressType(String),

    #[error("unknown token status: {0}")]
    UnknownTokenStatus(String),
}

/// Classification of an address seen on chain.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Wallet,
    Contract,
    Unknown,
}

impl AddressType {
    pub const ALL: [AddressType; 3] = [
        AddressType::Wallet,
        AddressType::Contract,
        AddressType::Unknown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AddressType::Wallet => "wallet",
            AddressType::Contract => "contract",
            AddressType::Unknown => "unknown",
        }
    }
}

impl Display for AddressType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = TypeConstraintError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == cleaned)
            .ok_or(TypeConstraintError::UnknownAddressType(cleaned))
    }
}

/// Outcome of ERC-20 detection for a contract.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Detected,
    Failed,
}

impl TokenStatus {
    pub const ALL: [TokenStatus; 2] = [TokenStatus::Detected, TokenStatus::Failed];

    pub const fn as_str(self) -> &'static str {
        match self {
            TokenStatus::Detected => "detected",
            TokenStatus::Failed => "failed",
        }
    }
}

impl Display for TokenStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == cleaned)
            .ok_or(TypeConstraintError::UnknownTokenStatus(cleaned))
    }
}
