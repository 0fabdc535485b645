use crate::domain::model::GenerationRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn model(&self) -> &str;
    fn base_url(&self) -> &str;
    fn temperature(&self) -> f32;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// Client for a schema-constrained text generation API.
///
/// Implementations issue exactly one request per call and return the raw
/// text of the first candidate, untrimmed.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate_content(&self, request: &GenerationRequest) -> Result<String>;

    fn model_name(&self) -> &str;
}
