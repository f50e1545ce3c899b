use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use super::interface::{
    DetectionRequest, DictionaryRequest, TextItem, TranslationRequest, TranslatorInterface,
};
use super::trace_id::TraceIdGenerator;
use crate::config::TranslatorConfig;
use crate::error::UpstreamError;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";
const TRACE_ID_HEADER: &str = "X-ClientTraceId";

/// Client for the Microsoft Translator REST API.
///
/// Holds no per-request state; every call is one POST with a fresh trace id.
/// No timeout is set on the underlying client.
pub struct TranslatorClient {
    client: Client,
    endpoint: String,
    api_key: String,
    region: String,
    trace_ids: Arc<dyn TraceIdGenerator>,
}

impl TranslatorClient {
    pub fn new(config: &TranslatorConfig, trace_ids: Arc<dyn TraceIdGenerator>) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            region: config.region.clone(),
            trace_ids,
        }
    }

    /// POST `[{text}]` to `path` and return the upstream JSON on 2xx.
    async fn post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        text: &str,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.endpoint, path);
        let trace_id = self.trace_ids.next_id();
        debug!("POST {} trace_id={}", path, trace_id);

        let response = self
            .client
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header(SUBSCRIPTION_REGION_HEADER, &self.region)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(TRACE_ID_HEADER, &trace_id)
            .query(query)
            .json(&[TextItem { text }])
            .send()
            .await
            .map_err(|e| {
                warn!("Upstream {} unreachable (trace_id={}): {}", path, trace_id, e);
                UpstreamError::Transport(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        if status.is_success() {
            Ok(body)
        } else {
            warn!(
                "Upstream {} returned {} (trace_id={})",
                path,
                status.as_u16(),
                trace_id
            );
            Err(UpstreamError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// `api-version` and `from`, then one `to` pair per target language.
fn language_query<'a>(api_version: &'a str, from: &'a str, to: &'a [String]) -> Vec<(&'a str, &'a str)> {
    let mut query = vec![("api-version", api_version), ("from", from)];
    query.extend(to.iter().map(|lang| ("to", lang.as_str())));
    query
}

#[async_trait]
impl TranslatorInterface for TranslatorClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<Value, UpstreamError> {
        let query = language_query(&request.api_version, &request.from, &request.to);
        let body = self.post("/translate", &query, &request.text).await?;

        match body
            .get(0)
            .and_then(|result| result.get("translations"))
            .filter(|translations| translations.is_array())
        {
            Some(translations) => Ok(translations.clone()),
            None => Err(UpstreamError::UnexpectedShape(body)),
        }
    }

    async fn detect(&self, request: &DetectionRequest) -> Result<Value, UpstreamError> {
        let query = [("api-version", request.api_version.as_str())];
        self.post("/detect", &query, &request.text).await
    }

    async fn dictionary_lookup(&self, request: &DictionaryRequest) -> Result<Value, UpstreamError> {
        let query = language_query(&request.api_version, &request.from, &request.to);
        self.post("/dictionary/lookup", &query, &request.text).await
    }
}
