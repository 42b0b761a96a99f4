//! Query-string fragments for pagination and filter links.
//!
//! Values are inserted verbatim; escaping is left to the template layer so
//! existing link formats stay unchanged.

use serde_json::Value;

/// Query string carrying the current search and filter, e.g. `?search=0xab&type=wallet`.
///
/// The filter is emitted as `status` on the tokens page and `type` elsewhere.
/// Returns an empty string when neither parameter is set.
pub fn build_pagination_url(
    search_term: Option<&str>,
    filter_param: Option<&str>,
    is_tokens: bool,
) -> String {
    let mut params = Vec::new();

    if let Some(search) = search_term.map(str::trim).filter(|s| !s.is_empty()) {
        params.push(format!("search={search}"));
    }

    if let Some(filter) = filter_param.map(str::trim).filter(|s| !s.is_empty()) {
        let name = if is_tokens { "status" } else { "type" };
        params.push(format!("{name}={filter}"));
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Appends every set filter to `base_path`, keeping the given order.
///
/// Empty strings, zero, `false` and `null` count as unset. `base_path` is
/// returned unchanged when nothing is set.
pub fn build_filter_url(base_path: &str, filters: &[(&str, Value)]) -> String {
    let params = filters
        .iter()
        .filter(|(_, value)| is_truthy(value))
        .map(|(name, value)| format!("{name}={}", query_value(value)))
        .collect::<Vec<_>>();

    if params.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pagination_url_with_search_and_type() {
        assert_eq!(
            build_pagination_url(Some(" 0xabc "), Some("wallet"), false),
            "?search=0xabc&type=wallet"
        );
    }

    #[test]
    fn pagination_url_uses_status_for_tokens() {
        assert_eq!(
            build_pagination_url(None, Some(" detected "), true),
            "?status=detected"
        );
    }

    #[test]
    fn pagination_url_skips_blank_values() {
        assert_eq!(build_pagination_url(Some("   "), Some(""), true), "");
        assert_eq!(build_pagination_url(None, None, false), "");
        assert_eq!(build_pagination_url(Some("usdc"), Some("  "), false), "?search=usdc");
    }

    #[test]
    fn pagination_url_does_not_escape_values() {
        assert_eq!(
            build_pagination_url(Some("a b&c"), None, false),
            "?search=a b&c"
        );
    }

    #[test]
    fn filter_url_keeps_order_of_set_filters() {
        let filters = [
            ("status", json!("failed")),
            ("search", json!("")),
            ("page", json!(2)),
            ("verified", json!(false)),
            ("creator", Value::Null),
            ("type", json!("contract")),
        ];
        assert_eq!(
            build_filter_url("/tokens", &filters),
            "/tokens?status=failed&page=2&type=contract"
        );
    }

    #[test]
    fn filter_url_without_set_filters_is_base_path() {
        assert_eq!(build_filter_url("/wallets", &[]), "/wallets");
        assert_eq!(
            build_filter_url("/wallets", &[("page", json!(0)), ("type", json!(""))]),
            "/wallets"
        );
    }
}
