//! Backend configuration.
//!
//! Settings merge from two sources, later ones winning: a per-user config
//! file at `<config-dir>/lumina/config.toml` and `GEMINI_*` environment
//! variables. Everything has a working default, so a bare environment with
//! only an API key set is enough to run.

use crate::ModelTable;
use config::{Config, Environment, File};
use derive_builder::Builder;
use derive_getters::Getters;
use lumina_error::{ConfigError, DriverError, DriverErrorKind, LuminaResult};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Public REST endpoint for the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for the Gemini backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[serde(default)]
#[builder(setter(into), default)]
pub struct GeminiConfig {
    /// Explicit API key; the environment is consulted when unset
    api_key: Option<String>,
    /// Base URL for REST dispatch
    base_url: String,
    /// Model routing table
    models: ModelTable,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            models: ModelTable::default(),
        }
    }
}

impl GeminiConfig {
    /// Creates a new builder for `GeminiConfig`.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Loads settings from the config file and environment.
    ///
    /// Reads `<config-dir>/lumina/config.toml` when present, then applies
    /// `GEMINI_*` environment variables on top (`GEMINI_BASE_URL`,
    /// `GEMINI_MODELS__TEXT_PRO`, ...).
    pub fn load() -> LuminaResult<Self> {
        let mut builder = Config::builder();
        if let Some(base) = dirs::config_dir() {
            let path = base.join("lumina").join("config.toml");
            debug!(path = %path.display(), "checking for config file");
            builder = builder.add_source(File::from(path).required(false));
        }
        let settings = builder
            .add_source(Environment::with_prefix("GEMINI").separator("__"))
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        let config = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        Ok(config)
    }

    /// Resolves the API credential.
    ///
    /// An explicit non-empty `api_key` wins; otherwise the `GEMINI_API_KEY`
    /// and `GOOGLE_API_KEY` environment variables are tried in that order.
    pub fn resolve_api_key(&self) -> LuminaResult<String> {
        if let Some(key) = self.api_key.as_deref() {
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }
        env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("GOOGLE_API_KEY"))
            .map_err(|_| DriverError::new(DriverErrorKind::MissingApiKey).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_point_at_the_public_endpoint() {
        let config = GeminiConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.api_key().is_none());
        assert_eq!(config.models(), &ModelTable::default());
    }

    #[test]
    fn file_settings_flow_through() {
        let toml = r#"
            base_url = "http://localhost:9090/v1beta"

            [models]
            text_pro = "gemini-next-pro"
        "#;
        let config: GeminiConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.base_url(), "http://localhost:9090/v1beta");
        assert_eq!(config.models().text_pro(), "gemini-next-pro");
        assert_eq!(config.models().text_flash(), crate::TEXT_FLASH_MODEL);
    }

    #[test]
    fn explicit_key_wins_over_the_environment() {
        let config = GeminiConfig::builder()
            .api_key("sk-explicit".to_string())
            .build()
            .unwrap();
        assert_eq!(config.resolve_api_key().unwrap(), "sk-explicit");
    }
}
