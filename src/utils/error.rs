use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Generation API returned {status}: {message}")]
    RemoteError { status: u16, message: String },

    #[error("Prompt was blocked by the generation API: {reason}")]
    BlockedError { reason: String },

    #[error("Generation API returned no text")]
    EmptyResponseError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Data,
    Configuration,
    System,
}

impl RecipeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecipeError::ApiError(_) => ErrorCategory::Network,
            RecipeError::RemoteError { .. }
            | RecipeError::BlockedError { .. }
            | RecipeError::EmptyResponseError => ErrorCategory::Remote,
            RecipeError::SerializationError(_) | RecipeError::ValidationError { .. } => {
                ErrorCategory::Data
            }
            RecipeError::ConfigValidationError { .. }
            | RecipeError::InvalidConfigValueError { .. }
            | RecipeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RecipeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecipeError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            RecipeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            RecipeError::ConfigValidationError { field, message } => {
                format!("Could not load configuration ({}): {}", field, message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Set the API_KEY environment variable or pass --api-key / a --config file"
            }
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Remote => "Check your API key and quota, then try again",
            ErrorCategory::Data => "The model returned an unexpected payload; try again",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    Network,
    Timeout,
    Remote,
    Blocked,
    MalformedPayload,
    InvalidRecipe,
}

impl GenerationErrorKind {
    pub fn summary(&self) -> &'static str {
        match self {
            GenerationErrorKind::Network => "could not reach the recipe service",
            GenerationErrorKind::Timeout => "the recipe service took too long to answer",
            GenerationErrorKind::Remote => "the recipe service rejected the request",
            GenerationErrorKind::Blocked => "the request was blocked by the recipe service",
            GenerationErrorKind::MalformedPayload => "the recipe service sent an unreadable answer",
            GenerationErrorKind::InvalidRecipe => "the recipe service sent an incomplete recipe",
        }
    }
}

/// Normalized failure returned by the recipe request service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to generate recipe: {message}")]
pub struct GenerationError {
    kind: GenerationErrorKind,
    message: String,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> GenerationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<RecipeError> for GenerationError {
    fn from(err: RecipeError) -> Self {
        let kind = match &err {
            RecipeError::ApiError(e) if e.is_timeout() => GenerationErrorKind::Timeout,
            RecipeError::ApiError(e) if e.is_decode() => GenerationErrorKind::MalformedPayload,
            RecipeError::ApiError(_) | RecipeError::IoError(_) => GenerationErrorKind::Network,
            RecipeError::RemoteError { .. } => GenerationErrorKind::Remote,
            RecipeError::BlockedError { .. } => GenerationErrorKind::Blocked,
            RecipeError::EmptyResponseError => GenerationErrorKind::MalformedPayload,
            RecipeError::SerializationError(e) if e.is_data() => GenerationErrorKind::InvalidRecipe,
            RecipeError::SerializationError(_) => GenerationErrorKind::MalformedPayload,
            RecipeError::ValidationError { .. } => GenerationErrorKind::InvalidRecipe,
            RecipeError::ConfigValidationError { .. }
            | RecipeError::InvalidConfigValueError { .. }
            | RecipeError::MissingConfigError { .. } => GenerationErrorKind::Remote,
        };
        GenerationError::new(kind, err.to_string())
    }
}
