//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use staylet_market::search::{SortMode, MAX_PER_PAGE};
use staylet_market::Currency;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["staylet.toml", ".staylet.toml", "staylet.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub market: MarketConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub reviews: ReviewsConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Page size from config, clamped to what a search accepts.
    pub fn per_page(&self) -> usize {
        self.search.per_page.clamp(1, MAX_PER_PAGE)
    }
}

/// Marketplace defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Currency assumed for amounts typed on the command line.
    #[serde(default)]
    pub currency: Currency,
}

/// Listing search defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub default_sort: SortMode,

    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_per_page() -> usize {
    20
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::Popular,
            per_page: default_per_page(),
        }
    }
}

/// Review listing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsConfig {
    /// Include expired reviews when no status filter is given.
    #[serde(default = "default_true")]
    pub show_expired: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self { show_expired: true }
    }
}

/// Generate a default staylet.toml config file.
pub fn generate_default_config() -> String {
    r#"# Staylet CLI configuration

[market]
# KRW, USD, EUR, JPY or GBP
currency = "KRW"

[search]
# popular, price_asc, price_desc, rating or newest
default_sort = "popular"
per_page = 20

[reviews]
show_expired = true
"#
    .to_string()
}
