use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `api_base`
pub const API_BASE_ENV: &str = "CATALOG_ADMIN_API_BASE";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API; the collection lives at `{api_base}/servicos`
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_api_base() -> String {
    "https://lipes-cortes.vercel.app/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout_secs: default_request_timeout_secs(),
            theme: default_theme(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults when it is missing
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;

            if config.api_base.trim().is_empty() {
                config.api_base = default_api_base();
            }
            if config.request_timeout_secs == 0 {
                config.request_timeout_secs = default_request_timeout_secs();
            }

            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// API base after applying overrides: CLI flag, then
    /// `CATALOG_ADMIN_API_BASE`, then the file. Trailing slashes are dropped.
    pub fn effective_api_base(&self, cli_override: Option<&str>) -> String {
        let env_override = std::env::var(API_BASE_ENV).ok();
        let base = cli_override
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env_override.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or(&self.api_base);
        base.trim().trim_end_matches('/').to_string()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Theme to render with; `NO_COLOR` wins over the file.
    pub fn theme_type(&self) -> ThemeType {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return ThemeType::NoColor;
        }
        self.theme.parse().unwrap_or_default()
    }
}
