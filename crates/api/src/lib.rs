//! HTTP API layer with Axum routes and static front-end serving.
//!
//! This crate provides:
//! - The `/api` REST routes (conversion, health)
//! - The static front-end fallback
//! - Response types

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use amountwords_shared::AppConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded application configuration.
    pub config: Arc<AppConfig>,
}

/// Creates the main application router.
///
/// API routes live under `/api`; every other path falls back to the
/// static front-end directory, serving `index.html` for unknown paths.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let index = format!("{static_dir}/index.html");
    let front_end = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .nest("/api", routes::api_routes())
        .fallback_service(front_end)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
