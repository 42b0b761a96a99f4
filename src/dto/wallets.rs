//! Context for the wallets listing page.

use serde::Serialize;

use crate::domain::wallet::Wallet;
use crate::dto::ViewContext;
use crate::pagination::{PaginationContext, build_context};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WalletsContext<W = Wallet> {
    pub wallets: Vec<W>,
    pub total_wallets: i64,
    /// Search term echoed back to the search box.
    pub search: String,
    /// Active address type filter, empty for none.
    pub current_type: String,
    #[serde(flatten)]
    pub pagination: PaginationContext,
}

impl<W: Serialize> ViewContext for WalletsContext<W> {}

/// Builds the wallets page context. The caller's rows are copied, never modified.
pub fn build_wallets_context<W: Clone>(
    wallets: &[W],
    total_wallets: i64,
    page: i64,
    per_page: i64,
    search: &str,
    address_type: &str,
) -> WalletsContext<W> {
    WalletsContext {
        wallets: wallets.to_vec(),
        total_wallets,
        search: search.to_string(),
        current_type: address_type.to_string(),
        pagination: build_context(page, total_wallets, per_page),
    }
}
