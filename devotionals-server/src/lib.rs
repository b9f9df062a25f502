//! devotionals-server library
//!
//! HTTP service exposing devotional entries stored in an embedded SQLite
//! database. Records are soft-deleted and never physically removed.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod db;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened once at startup
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let devotionals = Router::new()
        .route(
            "/api/devotionals",
            get(api::list_devotionals).post(api::create_devotional),
        )
        .route(
            "/api/devotionals/:id",
            get(api::get_devotional)
                .patch(api::update_devotional)
                .delete(api::delete_devotional),
        );

    Router::new()
        .merge(devotionals)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
