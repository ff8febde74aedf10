//! Andara API server entry point.

use std::error::Error;

use andara_api::config::Config;
use andara_api::state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Andara content event server");

    let config = Config::from_env()?;
    let addr = config.socket_addr()?;
    let app_state = AppState::from_config(&config);

    // TODO: Replace CorsLayer::permissive() with the dev tool's origin once it has a fixed port.
    let app = andara_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
