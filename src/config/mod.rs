#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::core::recipe_service::DEFAULT_TEMPERATURE;
use crate::core::ConfigProvider;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_required_field,
    validate_url, Validate,
};
use std::fmt;
use toml_config::TomlConfig;

pub const API_KEY_ENV: &str = "API_KEY";

/// Values given explicitly on the command line.
#[derive(Clone, Default)]
pub struct SettingsOverrides {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub timeout_seconds: Option<u64>,
}

/// Fully resolved generation settings.
#[derive(Clone)]
pub struct Settings {
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    timeout_seconds: Option<u64>,
}

impl Settings {
    /// Resolves overrides, then the TOML file, then `API_KEY`, then built-in defaults.
    pub fn resolve(overrides: SettingsOverrides, file: Option<&TomlConfig>) -> Result<Self> {
        Self::resolve_with_env_key(overrides, file, std::env::var(API_KEY_ENV).ok())
    }

    pub fn resolve_with_env_key(
        overrides: SettingsOverrides,
        file: Option<&TomlConfig>,
        env_key: Option<String>,
    ) -> Result<Self> {
        let generation = file.map(TomlConfig::generation).unwrap_or_default();
        let present = |key: &String| !key.trim().is_empty();

        let api_key = overrides
            .api_key
            .filter(present)
            .or_else(|| {
                file.and_then(TomlConfig::api_key)
                    .map(str::to_string)
                    .filter(present)
            })
            .or_else(|| env_key.filter(present));
        let api_key = validate_required_field("api_key", &api_key)?.clone();

        let settings = Self {
            api_key,
            model: overrides
                .model
                .or(generation.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: overrides
                .base_url
                .or(generation.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature: overrides
                .temperature
                .or(generation.temperature)
                .unwrap_or(DEFAULT_TEMPERATURE),
            timeout_seconds: overrides.timeout_seconds.or(generation.timeout_seconds),
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if self.api_key.starts_with("${") {
            return Err(RecipeError::MissingConfigError {
                field: format!("api_key (unresolved placeholder {})", self.api_key),
            });
        }
        validate_non_empty_string("model", &self.model)?;
        validate_url("base_url", &self.base_url)?;
        validate_range("temperature", self.temperature, 0.0, 2.0)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl fmt::Debug for SettingsOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsOverrides")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
