use crate::core::shell::ViewState;
use crate::domain::model::Recipe;
use chrono::Datelike;

// 終端機純文字呈現
pub const LOADING_MESSAGE: &str = "Our AI chef is thinking... 🍳";

/// Loading line to show before submitting `input`; blank input never
/// reaches the service, so it gets none.
pub fn loading_notice(input: &str) -> Option<&'static str> {
    if input.trim().is_empty() {
        None
    } else {
        Some(LOADING_MESSAGE)
    }
}

pub fn render_header() -> String {
    [
        "AI Recipe Generator",
        "Turn your ingredients into inspiration.",
        "",
        "What's in your kitchen?",
        "List your ingredients below, separated by commas, and let AI create a unique recipe for you!",
        "(e.g., chicken breast, tomatoes, rice, onion, garlic)",
    ]
    .join("\n")
}

pub fn render_footer(year: i32) -> String {
    format!("© {} AI Recipe Generator. Powered by Gemini.", year)
}

pub fn current_footer() -> String {
    render_footer(chrono::Local::now().year())
}

/// `None` when there is nothing to show yet.
pub fn render_view(view: &ViewState) -> Option<String> {
    match view {
        ViewState::Idle => None,
        ViewState::Loading => Some(LOADING_MESSAGE.to_string()),
        ViewState::Failed(message) => Some(format!("Oops!\n{}", message)),
        ViewState::Ready(recipe) => Some(render_recipe(recipe)),
    }
}

pub fn render_recipe(recipe: &Recipe) -> String {
    let mut lines = vec![recipe.name().to_string()];
    if !recipe.description().is_empty() {
        lines.push(recipe.description().to_string());
    }

    lines.push(String::new());
    lines.push("Ingredients".to_string());
    lines.extend(recipe.ingredients().iter().map(|item| format!("  • {}", item)));

    lines.push(String::new());
    lines.push("Instructions".to_string());
    lines.extend(
        recipe
            .instructions()
            .iter()
            .enumerate()
            .map(|(index, step)| format!("  {}. {}", index + 1, step)),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe::new(
            "Chicken Rice Bowl".to_string(),
            "A hearty bowl.".to_string(),
            vec!["2 cups rice".to_string(), "1 chicken breast".to_string()],
            vec!["Cook rice".to_string(), "Grill chicken".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_render_recipe_keeps_order() {
        let text = render_recipe(&recipe());
        let expected = "Chicken Rice Bowl\nA hearty bowl.\n\nIngredients\n  • 2 cups rice\n  • 1 chicken breast\n\nInstructions\n  1. Cook rice\n  2. Grill chicken";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_view_states() {
        assert_eq!(render_view(&ViewState::Idle), None);
        assert_eq!(render_view(&ViewState::Loading).unwrap(), LOADING_MESSAGE);
        assert_eq!(
            render_view(&ViewState::Failed("bad".to_string())).unwrap(),
            "Oops!\nbad"
        );
        assert!(render_view(&ViewState::Ready(recipe()))
            .unwrap()
            .starts_with("Chicken Rice Bowl"));
    }

    #[test]
    fn test_loading_notice_skips_blank_input() {
        assert_eq!(loading_notice("eggs, rice"), Some(LOADING_MESSAGE));
        assert_eq!(loading_notice(""), None);
        assert_eq!(loading_notice("  \t\n"), None);
    }

    #[test]
    fn test_footer_has_year() {
        assert_eq!(
            render_footer(2026),
            "© 2026 AI Recipe Generator. Powered by Gemini."
        );
    }
}
