//! Song routes. Handlers stay thin: extract, hand the call to the service on
//! the blocking pool, turn `None`/`false` into 404.

use axum::{
  Json,
  extract::{Path, Query, State},
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use cantus_core::SongDto;
use cantus_core::domain::SongId;

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  pub q: String,
}

/// GET /songs
pub async fn list_songs(State(state): State<AppState>) -> AppResult<Json<Vec<SongDto>>> {
  info!("GET /songs");
  let songs = state.run(|service| service.list_all()).await?;
  Ok(Json(songs))
}

/// GET /songs/{id}
pub async fn get_song(State(state): State<AppState>, Path(id): Path<SongId>) -> AppResult<Response> {
  info!(song_id = %id, "GET /songs/{{id}}");
  let song = state.run(move |service| service.get_by_id(id)).await?;
  Ok(found_or_404(song))
}

/// POST /songs
pub async fn create_song(State(state): State<AppState>, Json(input): Json<SongDto>) -> AppResult<Response> {
  info!(title = input.title.as_deref().unwrap_or_default(), "POST /songs");
  let created = state.run(move |service| service.create(input)).await?;

  let id = created.id.ok_or_else(|| AppError::internal("created song has no id"))?;
  let location = format!("{}/songs/{id}", state.api_prefix());

  Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}

/// PUT /songs/{id}
pub async fn update_song(
  State(state): State<AppState>,
  Path(id): Path<SongId>,
  Json(input): Json<SongDto>,
) -> AppResult<Response> {
  info!(song_id = %id, "PUT /songs/{{id}}");
  let updated = state.run(move |service| service.update(id, input)).await?;
  Ok(found_or_404(updated))
}

/// DELETE /songs/{id}
pub async fn delete_song(State(state): State<AppState>, Path(id): Path<SongId>) -> AppResult<StatusCode> {
  info!(song_id = %id, "DELETE /songs/{{id}}");
  let deleted = state.run(move |service| service.delete(id)).await?;
  Ok(if deleted { StatusCode::NO_CONTENT } else { StatusCode::NOT_FOUND })
}

/// GET /songs/search/by-title?q=
pub async fn search_by_title(
  State(state): State<AppState>,
  Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SongDto>>> {
  info!(q = %params.q, "GET /songs/search/by-title");
  let songs = state.run(move |service| service.search_by_title(&params.q)).await?;
  Ok(Json(songs))
}

/// GET /songs/search/by-artist?q=
pub async fn search_by_artist(
  State(state): State<AppState>,
  Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SongDto>>> {
  info!(q = %params.q, "GET /songs/search/by-artist");
  let songs = state.run(move |service| service.search_by_artist(&params.q)).await?;
  Ok(Json(songs))
}

/// GET /songs/category/{category}
pub async fn list_by_category(
  State(state): State<AppState>,
  Path(category): Path<String>,
) -> AppResult<Json<Vec<SongDto>>> {
  info!(%category, "GET /songs/category/{{category}}");
  let songs = state.run(move |service| service.list_by_category(&category)).await?;
  Ok(Json(songs))
}

fn found_or_404(song: Option<SongDto>) -> Response {
  match song {
    Some(song) => Json(song).into_response(),
    None => StatusCode::NOT_FOUND.into_response(),
  }
}
