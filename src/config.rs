//! Application Config
//!
//! Embedded TOML read once at startup and shared through context.

use serde::Deserialize;

use client_form_core::FormSettings;

const APP_CONFIG_TOML: &str = include_str!("../config/client-form.toml");
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the REST API, without trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub form: FormSettings,
}

/// Parse the embedded config, falling back to defaults on error
pub fn load_config() -> AppConfig {
    parse_config(APP_CONFIG_TOML)
}

fn parse_config(raw: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(raw) {
        Ok(config) => {
            tracing::info!(
                base_url = %config.api.base_url,
                invalid_flash_ms = config.form.invalid_flash_ms,
                "loaded client form config"
            );
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse embedded client-form.toml; using defaults");
            AppConfig::default()
        }
    }
}
