use serde::{Deserialize, Serialize};

/// Failure to read the client configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// REST API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Where the session credential is persisted on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

fn default_storage_key() -> String {
    "token".to_string()
}

/// Shell behaviour knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_clock_interval")]
    pub clock_interval_secs: u64,
    /// Scroll offset in px beyond which the top bar is elevated.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_shadow_threshold: f64,
    /// Distance in px below the viewport top at which in-page sections count
    /// as current.
    #[serde(default = "default_section_offset")]
    pub section_offset: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clock_interval_secs: default_clock_interval(),
            scroll_shadow_threshold: default_scroll_threshold(),
            section_offset: default_section_offset(),
        }
    }
}

fn default_clock_interval() -> u64 {
    60
}

fn default_scroll_threshold() -> f64 {
    10.0
}

fn default_section_offset() -> f64 {
    96.0
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl ClientConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Replace the base URL when an override is present and non-blank.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }
}
