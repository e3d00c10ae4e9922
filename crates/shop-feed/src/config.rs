//! Shop configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::interleave::ADVERT_CHUNK_SIZE;
use crate::scroll::DEFAULT_SCROLL_THRESHOLD_PX;

/// Shop configuration file (`shop.toml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Feed paging.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Advert interleaving.
    #[serde(default)]
    pub adverts: AdvertConfig,

    /// Sign-in.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl ShopConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str::<Self>(&content)
                .map(Self::normalized)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Parse TOML text; missing sections take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ShopConfig = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = self.to_string_for(path)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Render in the format `path`'s extension implies.
    pub fn to_string_for(&self, path: &str) -> Result<String> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        Ok(content)
    }

    /// Clamp values that would stall the feed.
    fn normalized(mut self) -> Self {
        self.feed.page_size = self.feed.page_size.max(1);
        self.adverts.chunk_size = self.adverts.chunk_size.max(1);
        self
    }
}

/// Feed paging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Distance from the end of the content that triggers the next page.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,
}

fn default_page_size() -> u32 {
    12
}

fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD_PX
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            scroll_threshold_px: default_scroll_threshold(),
        }
    }
}

/// Advert configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertConfig {
    /// Whether adverts are fetched and interleaved at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Products between adverts.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_true() -> bool {
    true
}

fn default_chunk_size() -> usize {
    ADVERT_CHUNK_SIZE
}

impl Default for AdvertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            chunk_size: ADVERT_CHUNK_SIZE,
        }
    }
}

/// Google sign-in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth client id handed to the Google button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_client_id: Option<String>,
}
