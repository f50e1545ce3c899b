use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::error::UpstreamError;
use crate::state::AppState;
use crate::translate::{DetectionRequest, DictionaryRequest, Translation, TranslationRequest};

/// Translate one text into each of the target languages
#[utoipa::path(
    post,
    path = "/translate",
    tag = "translator",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "`translations` of the first upstream result", body = [Translation]),
        (status = 400, description = "Upstream error payload, relayed unchanged")
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<Value>, UpstreamError> {
    info!("translate {} -> {:?}", request.from, request.to);
    let translations = state.translator.translate(&request).await?;
    Ok(Json(translations))
}

/// Detect the language of one text
#[utoipa::path(
    post,
    path = "/detect",
    tag = "translator",
    request_body = DetectionRequest,
    responses(
        (status = 200, description = "Upstream detection payload (language, score, ...)"),
        (status = 400, description = "Upstream error payload, relayed unchanged")
    )
)]
pub async fn detect(
    State(state): State<AppState>,
    Json(request): Json<DetectionRequest>,
) -> Result<Json<Value>, UpstreamError> {
    info!("detect");
    let result = state.translator.detect(&request).await?;
    Ok(Json(result))
}

/// Dictionary lookup of one word or phrase
#[utoipa::path(
    post,
    path = "/dictionary",
    tag = "translator",
    request_body = DictionaryRequest,
    responses(
        (status = 200, description = "Upstream dictionary lookup payload"),
        (status = 400, description = "Upstream error payload, relayed unchanged")
    )
)]
pub async fn dictionary(
    State(state): State<AppState>,
    Json(request): Json<DictionaryRequest>,
) -> Result<Json<Value>, UpstreamError> {
    info!("dictionary {} -> {:?}", request.from, request.to);
    let result = state.translator.dictionary_lookup(&request).await?;
    Ok(Json(result))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "upstream": state.config.translator.endpoint,
    }))
}
