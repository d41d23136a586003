//! Application configuration.
//!
//! Loaded from a single `config.toml`. Every option has a stock default, so
//! config files are sparse — override just the values you want:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! prefs_dir = ".paper-insight"   # Preference store directory
//!
//! [site]
//! title = "Paper Insight"
//! language = "ja"
//!
//! [catalog]
//! path = "data/articles.json"    # Catalog document location
//!
//! [search]
//! debounce_ms = 300              # Quiet period before a query applies
//!
//! [cards]
//! max_tags = 3                   # Tags shown per article card
//!
//! [related]
//! limit = 3                      # Related articles on a detail page
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the preference key files.
    pub prefs_dir: String,
    pub site: SiteConfig,
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
    pub cards: CardsConfig,
    pub related: RelatedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prefs_dir: ".paper-insight".to_string(),
            site: SiteConfig::default(),
            catalog: CatalogConfig::default(),
            search: SearchConfig::default(),
            cards: CardsConfig::default(),
            related: RelatedConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title and header branding.
    pub title: String,
    /// `lang` attribute of generated documents.
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path of the catalog JSON document.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Quiet period of no further input before a search query applies.
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardsConfig {
    /// Upper bound on tags shown per card.
    pub max_tags: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelatedConfig {
    /// Related articles shown on a detail page.
    pub limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Paper Insight".to_string(),
            language: "ja".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "data/articles.json".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self { max_tags: 3 }
    }
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self { limit: 3 }
    }
}

impl AppConfig {
    /// Load and validate a config file. A missing file is the stock
    /// config; a present-but-broken file is an error, not a silent
    /// default.
    pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
        let config = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            AppConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.search.debounce_ms == 0 {
            return Err(ConfigError::Validation(
                "search.debounce_ms must be non-zero".into(),
            ));
        }
        if self.cards.max_tags == 0 {
            return Err(ConfigError::Validation(
                "cards.max_tags must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// The stock config as a documented TOML document, printed by the
/// `gen-config` command.
pub fn stock_config_toml() -> String {
    r#"# Paper Insight configuration
# All options are optional - defaults shown below

# Preference store directory (bookmarks, likes, theme)
prefs_dir = ".paper-insight"

[site]
title = "Paper Insight"       # Page title and header branding
language = "ja"               # lang attribute of generated documents

[catalog]
path = "data/articles.json"   # Catalog document location

[search]
debounce_ms = 300             # Quiet period before a query applies

[cards]
max_tags = 3                  # Tags shown per article card

[related]
limit = 3                     # Related articles on a detail page
"#
    .to_string()
}
