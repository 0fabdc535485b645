pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::GeminiClient;
pub use config::{Settings, SettingsOverrides};
pub use crate::core::{
    recipe_service::RecipeService,
    shell::{InteractionShell, ViewState, EMPTY_INPUT_MESSAGE},
};
pub use domain::model::Recipe;
pub use utils::error::{GenerationError, GenerationErrorKind, RecipeError, Result};
