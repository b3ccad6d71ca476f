use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};

use cantus::config::ServerConfig;
use cantus::{AppState, create_app};
use cantus_core::SongDto;
use cantus_storage::SqliteSongStore;

fn create_test_app() -> TestServer {
  let cfg = ServerConfig::default();
  let store = SqliteSongStore::open_in_memory().expect("in-memory store");
  let state = AppState::new(Arc::new(store), cfg.normalized_prefix(), "SQLite (memory)");
  TestServer::new(create_app(state, &cfg)).expect("test server")
}

async fn create_song(server: &TestServer, body: Value) -> SongDto {
  let response = server.post("/api/songs").json(&body).await;
  response.assert_status(StatusCode::CREATED);
  response.json::<SongDto>()
}

#[tokio::test]
async fn create_returns_201_with_location() {
  let server = create_test_app();

  let response = server
    .post("/api/songs")
    .json(&json!({
      "id": 42,
      "title": "Imagine",
      "artist": "John Lennon",
      "category": "pop",
      "duration": 183
    }))
    .await;

  response.assert_status(StatusCode::CREATED);
  let created = response.json::<SongDto>();
  let id = created.id.expect("id assigned");
  assert_eq!(id.get(), 1);
  assert_eq!(response.header(header::LOCATION), format!("/api/songs/{id}"));
  assert_eq!(created.created_at, created.updated_at);
  assert_eq!(created.duration, Some(183));
}

#[tokio::test]
async fn wire_shape_uses_camel_case() {
  let server = create_test_app();
  create_song(&server, json!({"title": "Imagine", "artist": "John Lennon", "audioUrl": "/a.mp3"})).await;

  let body = server.get("/api/songs/1").await.json::<Value>();

  assert_eq!(body["audioUrl"], "/a.mp3");
  assert!(body["imageUrl"].is_null());
  assert!(body["createdAt"].is_string());
  assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn get_missing_song_is_404() {
  let server = create_test_app();

  let response = server.get("/api/songs/999").await;

  response.assert_status_not_found();
  assert!(response.text().is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
  let server = create_test_app();
  server.get("/api/songs/abc").await.assert_status_bad_request();
}

#[tokio::test]
async fn list_returns_songs_in_creation_order() {
  let server = create_test_app();
  assert!(server.get("/api/songs").await.json::<Vec<SongDto>>().is_empty());

  create_song(&server, json!({"title": "Imagine", "artist": "John Lennon"})).await;
  create_song(&server, json!({"title": "Bohemian Rhapsody", "artist": "Queen"})).await;

  let songs = server.get("/api/songs").await.json::<Vec<SongDto>>();
  let titles: Vec<_> = songs.into_iter().filter_map(|s| s.title).collect();
  assert_eq!(titles, ["Imagine", "Bohemian Rhapsody"]);
}

#[tokio::test]
async fn update_existing_and_missing() {
  let server = create_test_app();
  let created = create_song(&server, json!({"title": "Imagine", "artist": "John Lennon"})).await;

  let response = server
    .put("/api/songs/1")
    .json(&json!({"title": "Imagine (Remastered)", "artist": "John Lennon", "duration": 185}))
    .await;
  response.assert_status_ok();
  let updated = response.json::<SongDto>();
  assert_eq!(updated.id, created.id);
  assert_eq!(updated.created_at, created.created_at);
  assert_eq!(updated.duration, Some(185));

  server
    .put("/api/songs/999")
    .json(&json!({"title": "Ghost", "artist": "Nobody"}))
    .await
    .assert_status_not_found();
}

#[tokio::test]
async fn delete_twice_gives_204_then_404() {
  let server = create_test_app();
  create_song(&server, json!({"title": "Imagine", "artist": "John Lennon"})).await;

  server.delete("/api/songs/1").await.assert_status(StatusCode::NO_CONTENT);
  server.delete("/api/songs/1").await.assert_status_not_found();
  server.get("/api/songs/1").await.assert_status_not_found();
}

#[tokio::test]
async fn search_and_category_routes() {
  let server = create_test_app();
  create_song(&server, json!({"title": "Imagine", "artist": "John Lennon", "category": "Pop"})).await;
  create_song(&server, json!({"title": "Bohemian Rhapsody", "artist": "Queen", "category": "Rock"})).await;

  let by_artist =
    server.get("/api/songs/search/by-artist").add_query_param("q", "lennon").await.json::<Vec<SongDto>>();
  assert_eq!(by_artist.len(), 1);
  assert_eq!(by_artist[0].title.as_deref(), Some("Imagine"));

  let by_title =
    server.get("/api/songs/search/by-title").add_query_param("q", "RHAPSODY").await.json::<Vec<SongDto>>();
  assert_eq!(by_title.len(), 1);
  assert_eq!(by_title[0].artist.as_deref(), Some("Queen"));

  let pop = server.get("/api/songs/category/Pop").await.json::<Vec<SongDto>>();
  assert_eq!(pop.len(), 1);
  let lower_pop = server.get("/api/songs/category/pop").await.json::<Vec<SongDto>>();
  assert!(lower_pop.is_empty());
}

#[tokio::test]
async fn search_without_query_is_bad_request() {
  let server = create_test_app();
  server.get("/api/songs/search/by-title").await.assert_status_bad_request();
}

#[tokio::test]
async fn missing_title_is_bad_request() {
  let server = create_test_app();

  let response = server.post("/api/songs").json(&json!({"artist": "John Lennon"})).await;

  response.assert_status_bad_request();
  let body = response.json::<Value>();
  assert_eq!(body["error"]["message"], "title is required");
  assert_eq!(body["error"]["status"], 400);
  assert!(server.get("/api/songs").await.json::<Vec<SongDto>>().is_empty());
}

#[tokio::test]
async fn health_reports_status_and_count() {
  let server = create_test_app();
  create_song(&server, json!({"title": "Imagine", "artist": "John Lennon"})).await;

  let response = server.get("/api/health").await;

  response.assert_status_ok();
  let body = response.json::<Value>();
  assert_eq!(body["status"], "UP");
  assert_eq!(body["database"], "SQLite (memory)");
  assert_eq!(body["songs"], 1);
}

#[tokio::test]
async fn cors_preflight_allows_the_spa_origin() {
  let server = create_test_app();

  let response = server
    .method(axum::http::Method::OPTIONS, "/api/songs")
    .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:4200"))
    .add_header(header::ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"))
    .await;

  assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "http://localhost:4200");
  assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS), "true");
}

#[tokio::test]
async fn routes_can_be_mounted_at_the_root() {
  let cfg = ServerConfig { api_prefix: "/".into(), ..Default::default() };
  let store = SqliteSongStore::open_in_memory().unwrap();
  let state = AppState::new(Arc::new(store), cfg.normalized_prefix(), "SQLite");
  let server = TestServer::new(create_app(state, &cfg)).unwrap();

  let response = server.post("/songs").json(&json!({"title": "Imagine", "artist": "John Lennon"})).await;

  response.assert_status(StatusCode::CREATED);
  assert_eq!(response.header(header::LOCATION), "/songs/1");
}
