use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Anything that kept an outbound call from producing a usable result.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream rejected request with status {status}")]
    Rejected { status: u16, body: Value },

    #[error("upstream response had an unexpected shape")]
    UnexpectedShape(Value),
}

impl UpstreamError {
    /// Payload relayed to the caller.
    pub fn body(&self) -> Value {
        match self {
            UpstreamError::Transport(e) => json!({
                "error": {
                    "code": null,
                    "message": e.to_string(),
                }
            }),
            UpstreamError::Rejected { body, .. } => body.clone(),
            UpstreamError::UnexpectedShape(body) => body.clone(),
        }
    }
}

// Every failure reaches the caller as 400, whatever the upstream status was.
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.body())).into_response()
    }
}
