use crate::domain::model::GenerationRequest;
use crate::domain::ports::{ConfigProvider, GenerationClient};
use crate::utils::error::{RecipeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// Gemini generateContent 客戶端，以 responseSchema 限制輸出格式
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig<'a>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig<'a> {
    temperature: f32,
    response_mime_type: &'a str,
    response_schema: &'a serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[derive(Deserialize)]
struct GeminiApiError {
    message: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, model, DEFAULT_BASE_URL, None)
    }

    pub fn with_options(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_options(
            config.api_key(),
            config.model(),
            config.base_url(),
            config.timeout_seconds(),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate_content(&self, request: &GenerationRequest) -> Result<String> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                response_mime_type: &request.response_mime_type,
                response_schema: &request.response_schema,
            },
        };

        let url = self.endpoint();
        tracing::debug!("Making generation request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Generation API response status: {}", status);

        let text = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<GeminiErrorResponse>(&text) {
                Ok(envelope) => envelope.error.message,
                Err(_) => text,
            };
            return Err(RecipeError::RemoteError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)?;

        let Some(candidate) = parsed.candidates.into_iter().next() else {
            if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(RecipeError::BlockedError { reason });
            }
            return Err(RecipeError::EmptyResponseError);
        };

        let output: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if output.is_empty() {
            return Err(RecipeError::EmptyResponseError);
        }

        Ok(output)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt;
    use httpmock::prelude::*;

    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::with_options("test-key", DEFAULT_MODEL, server.base_url(), Some(5)).unwrap()
    }

    #[tokio::test]
    async fn test_generate_content_sends_structured_request() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path(PATH)
                .header("x-goog-api-key", "test-key")
                .body_contains("\"responseMimeType\":\"application/json\"")
                .body_contains("\"temperature\":0.8")
                .body_contains("\"responseSchema\"")
                .body_contains("tofu, spinach");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [{
                        "content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": "1}"}]}
                    }]
                }));
        });

        let client = client_for(&server);
        let request = prompt::build_request("tofu, spinach", 0.8);
        let text = client.generate_content(&request).await.unwrap();

        api_mock.assert();
        assert_eq!(text, "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_non_success_status_uses_error_envelope_message() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path(PATH);
            then.status(400)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
                }));
        });

        let client = client_for(&server);
        let err = client
            .generate_content(&prompt::build_request("eggs", 0.8))
            .await
            .unwrap_err();

        api_mock.assert();
        match err {
            RecipeError::RemoteError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_success_status_with_plain_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(PATH);
            then.status(503).body("upstream unavailable");
        });

        let err = client_for(&server)
            .generate_content(&prompt::build_request("eggs", 0.8))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RecipeError::RemoteError { status: 503, ref message } if message == "upstream unavailable"
        ));
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(serde_json::json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            }));
        });

        let err = client_for(&server)
            .generate_content(&prompt::build_request("eggs", 0.8))
            .await
            .unwrap_err();

        assert!(matches!(err, RecipeError::BlockedError { ref reason } if reason == "SAFETY"));
    }

    #[tokio::test]
    async fn test_candidate_without_text_is_empty_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(serde_json::json!({
                "candidates": [{"finishReason": "MAX_TOKENS"}]
            }));
        });

        let err = client_for(&server)
            .generate_content(&prompt::build_request("eggs", 0.8))
            .await
            .unwrap_err();

        assert!(matches!(err, RecipeError::EmptyResponseError));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client =
            GeminiClient::with_options("k", "gemini-2.5-pro", "http://localhost:9000/", None)
                .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-pro:generateContent"
        );
        assert_eq!(client.model_name(), "gemini-2.5-pro");
    }
}
