use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TokenStatus;

/// ERC-20 contract row as listed on the tokens page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub address: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<i32>,
    /// Raw on-chain supply, kept as text since it routinely exceeds `u64`.
    pub total_supply: Option<String>,
    pub creator: Option<String>,
    pub status: TokenStatus,
    pub discovered_at: Option<NaiveDateTime>,
}

impl Token {
    #[must_use]
    pub fn new(address: impl Into<String>, status: TokenStatus) -> Self {
        Self {
            address: address.into(),
            name: None,
            symbol: None,
            decimals: None,
            total_supply: None,
            creator: None,
            status,
            discovered_at: None,
        }
    }
}
