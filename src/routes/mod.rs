//! Actix-web glue: query extraction for listing pages and response shaping.

use actix_web::HttpRequest;
use serde::Deserialize;

use crate::errors::ParseError;
use crate::pagination::{DEFAULT_PAGE, PaginationParams};
use crate::validation::{
    DEFAULT_PAGE_SIZE, validate_address_type, validate_page, validate_page_size,
    validate_search_term, validate_token_status,
};

pub mod responses;

pub use responses::{ErrorPage, api_json, error_response, render_error_panel, render_page};

/// Raw listing parameters. Everything is read as text and validated afterwards
/// so a malformed value never rejects the whole query. Repeated keys are
/// collected and the first occurrence wins.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListingQueryParams {
    page: Vec<String>,
    search: Vec<String>,
    #[serde(rename = "type")]
    address_type: Vec<String>,
    status: Vec<String>,
    per_page: Vec<String>,
}

fn first(values: &[String]) -> &str {
    values.first().map(String::as_str).unwrap_or_default()
}

fn parse_listing_query(query: &str) -> Result<ListingQueryParams, ParseError> {
    serde_html_form::from_str(query).map_err(|err| ParseError::InvalidQuery(err.to_string()))
}

/// Validated filters of a listing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterParams {
    /// Address type filter, empty for none.
    pub address_type: String,
    /// Token status filter, empty for none.
    pub status: String,
    pub per_page: i64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            address_type: String::new(),
            status: String::new(),
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Reads `page` and `search` from a raw query string.
///
/// A non-numeric page counts as page 1; an unreadable query string yields the defaults.
pub fn pagination_params_from_query(query: &str) -> PaginationParams {
    let params = match parse_listing_query(query) {
        Ok(params) => params,
        Err(err) => {
            log::warn!("Failed to extract pagination parameters: {err}");
            return PaginationParams::default();
        }
    };

    let page = params
        .page
        .first()
        .map(validate_page)
        .unwrap_or(DEFAULT_PAGE);
    let search = validate_search_term(first(&params.search));

    PaginationParams { page, search }
}

/// Reads `type`, `status` and `per_page` from a raw query string.
pub fn filter_params_from_query(query: &str) -> FilterParams {
    let params = match parse_listing_query(query) {
        Ok(params) => params,
        Err(err) => {
            log::warn!("Failed to extract filter parameters: {err}");
            return FilterParams::default();
        }
    };

    FilterParams {
        address_type: validate_address_type(first(&params.address_type)),
        status: validate_token_status(first(&params.status)),
        per_page: params
            .per_page
            .first()
            .map(validate_page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE),
    }
}

pub fn extract_pagination_params(req: &HttpRequest) -> PaginationParams {
    pagination_params_from_query(req.query_string())
}

pub fn extract_filter_params(req: &HttpRequest) -> FilterParams {
    filter_params_from_query(req.query_string())
}
