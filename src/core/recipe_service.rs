use crate::core::prompt;
use crate::domain::model::Recipe;
use crate::domain::ports::GenerationClient;
use crate::utils::error::{GenerationError, RecipeError};

pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Turns free-text ingredients into a validated [`Recipe`] with a single
/// call to the generation API.
pub struct RecipeService<G: GenerationClient> {
    client: G,
    temperature: f32,
}

impl<G: GenerationClient> RecipeService<G> {
    pub fn new(client: G) -> Self {
        Self::with_temperature(client, DEFAULT_TEMPERATURE)
    }

    pub fn with_temperature(client: G, temperature: f32) -> Self {
        Self {
            client,
            temperature,
        }
    }

    pub fn client(&self) -> &G {
        &self.client
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Emptiness of `ingredients_text` is the caller's concern; any text is
    /// passed through to the prompt unchanged.
    pub async fn generate(&self, ingredients_text: &str) -> Result<Recipe, GenerationError> {
        match self.try_generate(ingredients_text).await {
            Ok(recipe) => {
                tracing::info!(
                    recipe = recipe.name(),
                    ingredients = recipe.ingredients().len(),
                    steps = recipe.instructions().len(),
                    "Recipe generated"
                );
                Ok(recipe)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    category = ?e.category(),
                    model = self.client.model_name(),
                    "Error generating recipe from generation API"
                );
                Err(GenerationError::from(e))
            }
        }
    }

    async fn try_generate(&self, ingredients_text: &str) -> Result<Recipe, RecipeError> {
        let request = prompt::build_request(ingredients_text, self.temperature);

        tracing::debug!(
            model = self.client.model_name(),
            temperature = self.temperature,
            prompt_chars = request.prompt.len(),
            "Sending recipe request"
        );

        let text = self.client.generate_content(&request).await?;
        let json_text = text.trim();
        if json_text.is_empty() {
            return Err(RecipeError::EmptyResponseError);
        }

        let recipe: Recipe = serde_json::from_str(json_text)?;
        Ok(recipe)
    }
}
