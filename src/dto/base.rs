//! Context shared by every dashboard page.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dto::ViewContext;
use crate::models::config::StyleConfig;

/// Aggregated counters keyed by address type or token status.
pub type Stats = Map<String, Value>;

/// Statistics shown in the page header.
///
/// The formatting helpers (`format_number`, `format_supply`, `format_address`,
/// `calculate_percentage`) are exposed to templates through
/// `templates::register_helpers` (server feature) rather than carried in the context.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct BaseContext {
    pub type_stats: Stats,
    pub token_stats: Stats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleConfig>,
}

impl BaseContext {
    /// Echoes the presentational constants to the templates.
    #[must_use]
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = Some(style);
        self
    }
}

impl ViewContext for BaseContext {}

/// Missing statistics render as empty maps.
pub fn build_base_context(type_stats: Option<Stats>, token_stats: Option<Stats>) -> BaseContext {
    BaseContext {
        type_stats: type_stats.unwrap_or_default(),
        token_stats: token_stats.unwrap_or_default(),
        style: None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stats(value: Value) -> Stats {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn base_context_keeps_given_stats() {
        let context = build_base_context(
            Some(stats(json!({"wallet": 10, "contract": 4}))),
            Some(stats(json!({"detected": 3}))),
        );

        assert_eq!(context.type_stats["wallet"], json!(10));
        assert_eq!(context.token_stats["detected"], json!(3));
        assert!(context.style.is_none());
    }

    #[test]
    fn missing_stats_become_empty_maps() {
        let context = build_base_context(None, None);

        assert_eq!(
            serde_json::to_value(&context).unwrap(),
            json!({"type_stats": {}, "token_stats": {}})
        );
    }

    #[test]
    fn style_is_serialized_when_set() {
        let context = build_base_context(None, None).with_style(StyleConfig::default());
        let value = serde_json::to_value(&context).unwrap();

        assert_eq!(value["style"]["container_max_width"], json!("1400px"));
        assert_eq!(value["style"]["pagination_window"], json!(2));
    }

    #[cfg(feature = "server")]
    #[test]
    fn to_context_exposes_top_level_keys() {
        let context = build_base_context(Some(stats(json!({"wallet": 10}))), None)
            .to_context()
            .unwrap();

        assert_eq!(context.get("type_stats"), Some(&json!({"wallet": 10})));
        assert_eq!(context.get("token_stats"), Some(&json!({})));
        assert!(context.get("style").is_none());
    }
}
