//! # Marquee Server
//!
//! HTTP adapter over `marquee-core`: parses download URLs, backfills a
//! missing release year from TMDB and renders download labels.

pub mod config;
pub mod context;
pub mod error;
pub mod lookup;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use context::AppContext;
pub use error::ApiError;
pub use lookup::{LookupError, MediaKind, TmdbLookup, YearLookup};

/// Builds the application router.
pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/parse", post(routes::parse_release))
        .route("/api/label", post(routes::label_link))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
