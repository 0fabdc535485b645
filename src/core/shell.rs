use crate::core::recipe_service::RecipeService;
use crate::domain::model::Recipe;
use crate::domain::ports::GenerationClient;
use crate::utils::error::GenerationError;

pub const EMPTY_INPUT_MESSAGE: &str = "Please list the ingredients you have.";

/// What the front-end should display. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(Recipe),
}

/// A dispatched request. Completing it with a ticket older than the latest
/// one issued is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    ticket: u64,
    input: String,
}

impl Submission {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

// 單一會話的互動狀態：輸入文字、目前畫面、以及提交流程
pub struct InteractionShell<G: GenerationClient> {
    service: RecipeService<G>,
    input: String,
    view: ViewState,
    latest_ticket: u64,
}

impl<G: GenerationClient> InteractionShell<G> {
    pub fn new(service: RecipeService<G>) -> Self {
        Self {
            service,
            input: String::new(),
            view: ViewState::Idle,
            latest_ticket: 0,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.view {
            ViewState::Ready(recipe) => Some(recipe),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn has_attempted(&self) -> bool {
        !matches!(self.view, ViewState::Idle)
    }

    /// Validates the input and moves to `Loading`. Returns `None` when the
    /// input is blank, in which case the view shows the validation message
    /// and no request should be made.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        // A newer user action always supersedes whatever is still in flight.
        self.latest_ticket += 1;

        if self.input.trim().is_empty() {
            tracing::debug!("Rejected empty ingredient list");
            self.view = ViewState::Failed(EMPTY_INPUT_MESSAGE.to_string());
            return None;
        }

        self.view = ViewState::Loading;
        Some(Submission {
            ticket: self.latest_ticket,
            input: self.input.clone(),
        })
    }

    /// Applies the outcome of `submission`. Returns `false` when a later
    /// submission has superseded it and the outcome was dropped.
    pub fn complete(
        &mut self,
        submission: &Submission,
        outcome: Result<Recipe, GenerationError>,
    ) -> bool {
        if submission.ticket != self.latest_ticket {
            tracing::debug!(
                ticket = submission.ticket,
                latest = self.latest_ticket,
                "Discarding stale recipe response"
            );
            return false;
        }

        self.view = match outcome {
            Ok(recipe) => ViewState::Ready(recipe),
            Err(err) => {
                tracing::warn!(kind = ?err.kind(), "Recipe request failed: {}", err.kind().summary());
                ViewState::Failed(format!("An error occurred: {}", err))
            }
        };
        true
    }

    pub async fn submit(&mut self) -> &ViewState {
        if let Some(submission) = self.begin_submission() {
            let outcome = self.service.generate(submission.input()).await;
            self.complete(&submission, outcome);
        }
        &self.view
    }
}
