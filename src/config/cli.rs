use crate::config::toml_config::TomlConfig;
use crate::config::{Settings, SettingsOverrides, API_KEY_ENV};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-generator")]
#[command(about = "Turn the ingredients you have into a recipe")]
pub struct CliConfig {
    /// Ingredients to cook with; omit to enter them interactively
    #[arg(short, long)]
    pub ingredients: Option<String>,

    /// API key for the generation API; falls back to the config file, then $API_KEY
    #[arg(long)]
    pub api_key: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Model name, e.g. gemini-2.5-flash")]
    pub model: Option<String>,

    #[arg(long, help = "Base URL of the generation API")]
    pub base_url: Option<String>,

    #[arg(long, help = "Sampling temperature (0.0 - 2.0)")]
    pub temperature: Option<f32>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Print the recipe as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            temperature: self.temperature,
            timeout_seconds: self.timeout_seconds,
        }
    }

    pub fn load_settings(&self) -> Result<Settings> {
        self.load_settings_with_env_key(std::env::var(API_KEY_ENV).ok())
    }

    pub fn load_settings_with_env_key(&self, env_key: Option<String>) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        Settings::resolve_with_env_key(self.overrides(), file.as_ref(), env_key)
    }
}
