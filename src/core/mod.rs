pub mod prompt;
pub mod recipe_service;
pub mod shell;

pub use crate::domain::model::{GenerationRequest, Recipe};
pub use crate::domain::ports::{ConfigProvider, GenerationClient};
pub use crate::utils::error::Result;
