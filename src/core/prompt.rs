use crate::domain::model::GenerationRequest;
use serde_json::{json, Value};

// 提示詞與回應 schema：模型輸出必須符合下方的 JSON 結構

pub const RESPONSE_MIME_TYPE: &str = "application/json";

pub const REQUIRED_FIELDS: [&str; 4] = ["recipeName", "description", "ingredients", "instructions"];

pub fn build_prompt(user_ingredients: &str) -> String {
    format!(
        "You are a world-class chef who specializes in creating delicious and accessible recipes \
         from a limited set of ingredients. Based on the following ingredients, create a complete \
         recipe: {user_ingredients}. You can assume basic pantry staples like salt, pepper, basic \
         spices, oil, and water are available. If the provided ingredients are insufficient for a \
         cohesive recipe, be creative and suggest a very simple but tasty preparation. Your \
         response must be in JSON format matching the provided schema."
    )
}

/// Response schema in the generation API's OpenAPI subset.
pub fn recipe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipeName": {
                "type": "STRING",
                "description": "A creative and appealing name for the recipe."
            },
            "description": {
                "type": "STRING",
                "description": "A short, enticing description of the dish, around 1-2 sentences."
            },
            "ingredients": {
                "type": "ARRAY",
                "items": {
                    "type": "STRING",
                    "description": "An ingredient required for the recipe, including quantity. e.g., '2 cups all-purpose flour'."
                },
                "description": "A list of all ingredients needed for the recipe based on what was provided and common pantry staples."
            },
            "instructions": {
                "type": "ARRAY",
                "items": {
                    "type": "STRING",
                    "description": "A single, clear step in the cooking instructions."
                },
                "description": "Step-by-step instructions on how to prepare the dish."
            }
        },
        "required": REQUIRED_FIELDS,
        "propertyOrdering": REQUIRED_FIELDS
    })
}

pub fn build_request(user_ingredients: &str, temperature: f32) -> GenerationRequest {
    GenerationRequest {
        prompt: build_prompt(user_ingredients),
        response_schema: recipe_schema(),
        response_mime_type: RESPONSE_MIME_TYPE.to_string(),
        temperature,
    }
}
