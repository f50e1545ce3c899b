use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::UpstreamError;

/// Body of `POST /translate`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TranslationRequest {
    #[schema(example = "bueno dias!")]
    pub text: String,
    /// Source language code
    #[schema(example = "en")]
    pub from: String,
    /// Target language codes
    #[schema(example = json!(["de", "it"]))]
    pub to: Vec<String>,
    #[schema(example = "3.0")]
    pub api_version: String,
}

/// Body of `POST /detect`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DetectionRequest {
    #[schema(example = "Hello!")]
    pub text: String,
    #[schema(example = "3.0")]
    pub api_version: String,
}

/// Body of `POST /dictionary`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DictionaryRequest {
    #[schema(example = "fly")]
    pub text: String,
    #[schema(example = "en")]
    pub from: String,
    #[schema(example = json!(["es"]))]
    pub to: Vec<String>,
    #[schema(example = "3.0")]
    pub api_version: String,
}

/// One entry of the upstream `translations` array. Only used to document the
/// response; the array itself is relayed as received.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Translation {
    #[schema(example = "guten Tag!")]
    pub text: String,
    #[schema(example = "de")]
    pub to: String,
}

/// Outbound body element; upstream always receives a one-element array of these.
#[derive(Debug, Serialize)]
pub(crate) struct TextItem<'a> {
    pub text: &'a str,
}

#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Returns the `translations` array of the first upstream result.
    async fn translate(&self, request: &TranslationRequest) -> Result<Value, UpstreamError>;

    async fn detect(&self, request: &DetectionRequest) -> Result<Value, UpstreamError>;

    async fn dictionary_lookup(&self, request: &DictionaryRequest)
        -> Result<Value, UpstreamError>;
}
