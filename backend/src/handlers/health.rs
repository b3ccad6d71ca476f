use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::errors::AppResult;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> AppResult<Json<Value>> {
  let songs = state.run(|service| service.count()).await?;

  Ok(Json(json!({
    "status": "UP",
    "timestamp": chrono::Utc::now().timestamp_millis(),
    "version": env!("CARGO_PKG_VERSION"),
    "database": state.storage_label(),
    "songs": songs,
  })))
}
