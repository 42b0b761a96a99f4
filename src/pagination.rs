use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
/// Pages shown on each side of the current one.
pub const DEFAULT_WINDOW: i64 = 2;

/// Page and search term requested by the user, both already validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: i64,
    pub search: String,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            search: String::new(),
        }
    }
}

/// Pagination metadata merged into the listing templates.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationContext {
    pub page: i64,
    pub total_pages: i64,
    pub page_numbers: Vec<i64>,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: i64,
    pub next_page: i64,
}

impl PaginationContext {
    /// Context for an empty listing.
    fn empty() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            page_numbers: vec![1],
            has_prev: false,
            has_next: false,
            prev_page: 1,
            next_page: 1,
        }
    }
}

/// Contiguous run of page numbers within `window` of `current_page`.
///
/// Returns `[1]` when there are no pages at all.
pub fn build_page_numbers(current_page: i64, total_pages: i64, window: i64) -> Vec<i64> {
    if total_pages <= 0 {
        return vec![1];
    }

    let start_page = current_page.saturating_sub(window).max(1);
    let end_page = current_page.saturating_add(window).min(total_pages);

    (start_page..=end_page).collect()
}

/// Builds the pagination context for `total_items` split in pages of `per_page`.
///
/// Out-of-range pages are clamped into `[1, total_pages]`.
pub fn build_context(page: i64, total_items: i64, per_page: i64) -> PaginationContext {
    if total_items <= 0 || per_page <= 0 {
        return PaginationContext::empty();
    }

    let total_pages = total_items / per_page + i64::from(total_items % per_page != 0);
    let page = page.clamp(1, total_pages);

    PaginationContext {
        page,
        total_pages,
        page_numbers: build_page_numbers(page, total_pages, DEFAULT_WINDOW),
        has_prev: page > 1,
        has_next: page < total_pages,
        prev_page: (page - 1).max(1),
        next_page: (page + 1).min(total_pages),
    }
}
