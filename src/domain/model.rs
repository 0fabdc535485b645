use crate::utils::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};

/// A generated recipe. Construction validates every field, so a `Recipe`
/// in hand is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecipe", rename_all = "camelCase")]
pub struct Recipe {
    recipe_name: String,
    description: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

/// Wire shape of the structured payload; all four fields are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecipe {
    recipe_name: String,
    description: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

impl TryFrom<RawRecipe> for Recipe {
    type Error = RecipeError;

    fn try_from(raw: RawRecipe) -> Result<Self> {
        Recipe::new(
            raw.recipe_name,
            raw.description,
            raw.ingredients,
            raw.instructions,
        )
    }
}

impl Recipe {
    pub fn new(
        recipe_name: String,
        description: String,
        ingredients: Vec<String>,
        instructions: Vec<String>,
    ) -> Result<Self> {
        let problem = if recipe_name.trim().is_empty() {
            Some("recipeName must not be empty")
        } else if ingredients.is_empty() {
            Some("ingredients must contain at least one entry")
        } else if instructions.is_empty() {
            Some("instructions must contain at least one step")
        } else {
            None
        };
        if let Some(message) = problem {
            return Err(RecipeError::ValidationError {
                message: message.to_string(),
            });
        }

        Ok(Self {
            recipe_name,
            description,
            ingredients,
            instructions,
        })
    }

    pub fn name(&self) -> &str {
        &self.recipe_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }
}

/// One outbound call to the generation API.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: serde_json::Value,
    pub response_mime_type: String,
    pub temperature: f32,
}
