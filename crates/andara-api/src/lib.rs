//! Andara — HTTP surface for content events.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use crate::state::AppState;

/// Builds the application router with all route groups mounted.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/content", routes::content::router())
        .with_state(app_state)
}
