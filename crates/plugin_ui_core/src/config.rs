//! Menu configuration
//!
//! Settings a host can keep next to its menu definition, e.g. in a
//! `[settings]` table of a TOML menu document:
//!
//! ```toml
//! [settings]
//! searchable = true
//! search_placeholder = "Find a page…"
//! indent_step = 16.0
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default search field placeholder
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search menu…";

/// Layout menu settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MenuConfig {
    /// Show the search field and allow filtering
    #[serde(default = "default_searchable")]
    pub searchable: bool,
    /// Search field placeholder
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
    /// Left padding of root rows, in pixels
    #[serde(default = "default_indent_base")]
    pub indent_base: f32,
    /// Extra left padding per nesting level, in pixels
    #[serde(default = "default_indent_step")]
    pub indent_step: f32,
}

fn default_searchable() -> bool {
    true
}

fn default_search_placeholder() -> String {
    DEFAULT_SEARCH_PLACEHOLDER.to_string()
}

fn default_indent_base() -> f32 {
    12.0
}

fn default_indent_step() -> f32 {
    12.0
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            searchable: default_searchable(),
            search_placeholder: default_search_placeholder(),
            indent_base: default_indent_base(),
            indent_step: default_indent_step(),
        }
    }
}

impl MenuConfig {
    /// Parse settings from a TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Left padding of a row at `depth`
    pub fn indent_for(&self, depth: usize) -> f32 {
        self.indent_base + depth as f32 * self.indent_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert!(config.searchable);
        assert_eq!(config.search_placeholder, "Search menu…");
        assert_eq!(config.indent_for(0), 12.0);
        assert_eq!(config.indent_for(2), 36.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MenuConfig::from_toml("searchable = false\nindent_step = 16.0\n").unwrap();
        assert!(!config.searchable);
        assert_eq!(config.search_placeholder, DEFAULT_SEARCH_PLACEHOLDER);
        assert_eq!(config.indent_for(1), 28.0);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(MenuConfig::from_toml("searchable = \"yes\"").is_err());
    }
}
