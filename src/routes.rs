use axum::{
    routing::{get, post},
    Router,
};

use crate::docs;
use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(handlers::translate))
        .route("/detect", post(handlers::detect))
        .route("/dictionary", post(handlers::dictionary))
        .route("/docs", get(docs::openapi_json))
        .route("/health", get(handlers::health_check))
}
