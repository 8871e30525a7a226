use serde::{Deserialize, Serialize};

use crate::todos::VisibilityFilter;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Filter the store starts with (default: SHOW_ALL).
    #[serde(default)]
    pub visibility_filter: VisibilityFilter,
    /// First id handed out to new todos (default: 0).
    #[serde(default)]
    pub first_id: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Header title (default: "Todos").
    #[serde(default = "default_title")]
    pub title: String,
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_title() -> String {
    "Todos".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            visibility_filter: VisibilityFilter::ShowAll,
            first_id: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
