//! Context for the tokens listing page.

use serde::Serialize;

use crate::domain::token::Token;
use crate::dto::ViewContext;
use crate::formatting::format_supply;
use crate::pagination::{PaginationContext, build_context};

/// Row carrying a raw token supply to be rendered on the tokens page.
pub trait SupplyRow {
    /// Raw supply in base units.
    fn total_supply(&self) -> &str;
    fn decimals(&self) -> i32;
}

impl SupplyRow for Token {
    fn total_supply(&self) -> &str {
        self.total_supply.as_deref().unwrap_or("0")
    }

    fn decimals(&self) -> i32 {
        self.decimals.unwrap_or(0)
    }
}

/// A token row extended with its human-readable supply.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormattedToken<T = Token> {
    #[serde(flatten)]
    pub token: T,
    pub total_supply_formatted: String,
}

impl<T: SupplyRow + Clone> From<&T> for FormattedToken<T> {
    fn from(token: &T) -> Self {
        Self {
            total_supply_formatted: format_supply(token.total_supply(), token.decimals()),
            token: token.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TokensContext<T = Token> {
    pub tokens: Vec<FormattedToken<T>>,
    pub total_tokens: i64,
    pub search: String,
    /// Active status filter, empty for none.
    pub current_status: String,
    #[serde(flatten)]
    pub pagination: PaginationContext,
}

impl<T: Serialize> ViewContext for TokensContext<T> {}

/// Builds the tokens page context. The caller's rows are copied, never modified.
pub fn build_tokens_context<T>(
    tokens: &[T],
    total_tokens: i64,
    page: i64,
    per_page: i64,
    search: &str,
    status: &str,
) -> TokensContext<T>
where
    T: SupplyRow + Clone,
{
    TokensContext {
        tokens: tokens.iter().map(FormattedToken::from).collect(),
        total_tokens,
        search: search.to_string(),
        current_status: status.to_string(),
        pagination: build_context(page, total_tokens, per_page),
    }
}
