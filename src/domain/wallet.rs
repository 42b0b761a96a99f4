use serde::{Deserialize, Serialize};

use crate::domain::types::AddressType;

/// Address row as listed on the wallets page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub address: String,
    pub address_type: AddressType,
    pub last_activity_block: Option<i64>,
    pub last_activity_timestamp: Option<i64>,
}
