//! Presentational configuration loaded from external sources.

use serde::{Deserialize, Serialize};

use crate::pagination::DEFAULT_WINDOW;
use crate::validation::MAX_PAGE_SIZE;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
    pub secondary: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#58a6ff".to_string(),
            success: "#3fb950".to_string(),
            warning: "#d29922".to_string(),
            danger: "#f85149".to_string(),
            info: "#a5a5f5".to_string(),
            secondary: "#8b949e".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Transitions {
    pub fast: String,
    pub normal: String,
    pub slow: String,
}

impl Default for Transitions {
    fn default() -> Self {
        Self {
            fast: "0.15s".to_string(),
            normal: "0.2s".to_string(),
            slow: "0.3s".to_string(),
        }
    }
}

/// Layout constants echoed to the templates. None of them affect pagination
/// or validation behaviour.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub container_max_width: String,
    pub mobile_breakpoint: String,
    pub pagination_window: i64,
    pub max_items_per_page: i64,
    pub colors: Palette,
    pub transitions: Transitions,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            container_max_width: "1400px".to_string(),
            mobile_breakpoint: "768px".to_string(),
            pagination_window: DEFAULT_WINDOW,
            max_items_per_page: MAX_PAGE_SIZE,
            colors: Palette::default(),
            transitions: Transitions::default(),
        }
    }
}

#[cfg(feature = "server")]
impl StyleConfig {
    /// Layers an optional YAML file over the defaults. A missing file yields the defaults.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()).required(false))
            .build()?
            .try_deserialize()
    }
}
