use std::sync::Arc;

use cantus_core::CoreError;
use cantus_core::ports::SongStore;
use cantus_core::services::SongService;

use crate::errors::{AppError, AppResult};

/// Type alias to simplify the generic signature of the Service.
pub type ConcreteSongService = SongService<Arc<dyn SongStore>>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
  songs: Arc<ConcreteSongService>,
  /// Prefix the routes are mounted under, used to build `Location` headers.
  api_prefix: Arc<str>,
  /// Human-readable name of the backing store, reported by `/health`.
  storage_label: Arc<str>,
}

impl AppState {
  pub fn new(store: Arc<dyn SongStore>, api_prefix: impl Into<Arc<str>>, storage_label: impl Into<Arc<str>>) -> Self {
    Self {
      songs: Arc::new(SongService::new(store)),
      api_prefix: api_prefix.into(),
      storage_label: storage_label.into(),
    }
  }

  pub fn api_prefix(&self) -> &str {
    &self.api_prefix
  }

  pub fn storage_label(&self) -> &str {
    &self.storage_label
  }

  /// Runs a blocking service call off the async executor.
  pub async fn run<T, F>(&self, call: F) -> AppResult<T>
  where
    F: FnOnce(&ConcreteSongService) -> Result<T, CoreError> + Send + 'static,
    T: Send + 'static,
  {
    let songs = Arc::clone(&self.songs);
    tokio::task::spawn_blocking(move || call(&songs))
      .await
      .map_err(|e| AppError::internal(format!("song service task failed: {e}")))?
      .map_err(AppError::from)
  }
}
