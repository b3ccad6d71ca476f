pub mod config;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers::{health, songs};

pub use crate::state::AppState;

/// Builds the full router: song routes and health check under the configured
/// prefix, wrapped in CORS and request tracing.
pub fn create_app(state: AppState, cfg: &ServerConfig) -> Router {
  let api = Router::new()
    .route("/songs", get(songs::list_songs).post(songs::create_song))
    .route("/songs/search/by-title", get(songs::search_by_title))
    .route("/songs/search/by-artist", get(songs::search_by_artist))
    .route("/songs/category/{category}", get(songs::list_by_category))
    .route("/songs/{id}", get(songs::get_song).put(songs::update_song).delete(songs::delete_song))
    .route("/health", get(health::health));

  let prefix = cfg.normalized_prefix();
  let router = if prefix.is_empty() { api } else { Router::new().nest(&prefix, api) };

  router
    .layer(infrastructure::cors::layer(&cfg.cors_origins))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
