mod config;
mod docs;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up API_KEY and friends from a local .env when there is one
    let dotenv_path = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translator_proxy=debug,tower_http=debug")),
        )
        .init();

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let config_path = std::env::var("CONFIG_PATH")
        .unwrap_or_else(|_| crate::config::DEFAULT_CONFIG_NAME.to_string());
    let config = Config::load(&config_path)?;
    info!(
        "Loaded configuration (upstream={}, region={})",
        config.translator.endpoint, config.translator.region
    );

    if config.translator.api_key.is_empty() {
        warn!("API_KEY is not set; upstream will reject every request");
    }

    let addr = (config.server.host.clone(), config.server.port);
    let app_state = AppState::new(config);

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
