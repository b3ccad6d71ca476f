use std::sync::Arc;

use crate::domain::{NewSong, Song, SongId};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("entity not found")]
  NotFound,
  #[error("invalid record: {0}")]
  Validation(String),
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port de persistencia de canciones.
///
/// Every sequence comes back in ascending id order. Misses are `None`,
/// `false` or an empty `Vec`; `Err` is reserved for records the store refuses
/// and for the store itself failing.
pub trait SongStore: Send + Sync {
  /// Persists a new record and returns it with its freshly assigned id.
  fn insert(&self, song: NewSong) -> Result<Song, RepoError>;

  /// Replaces the full record at `song.id`. `RepoError::NotFound` if the id
  /// is not live.
  fn save(&self, song: &Song) -> Result<Song, RepoError>;

  fn get_by_id(&self, id: SongId) -> Result<Option<Song>, RepoError>;
  fn get_all(&self) -> Result<Vec<Song>, RepoError>;
  fn exists_by_id(&self, id: SongId) -> Result<bool, RepoError>;

  /// Hard delete. Returns whether a record was removed.
  fn delete_by_id(&self, id: SongId) -> Result<bool, RepoError>;

  fn count(&self) -> Result<u64, RepoError>;

  // --- Igualdad exacta, sensible a mayúsculas ---
  fn find_by_exact_title(&self, title: &str) -> Result<Option<Song>, RepoError>;
  fn find_by_exact_artist(&self, artist: &str) -> Result<Vec<Song>, RepoError>;
  fn find_by_exact_category(&self, category: &str) -> Result<Vec<Song>, RepoError>;

  // --- Subcadena, sin distinguir mayúsculas ---
  fn find_by_title_substring(&self, keyword: &str) -> Result<Vec<Song>, RepoError>;
  fn find_by_artist_substring(&self, keyword: &str) -> Result<Vec<Song>, RepoError>;
}

impl<T: SongStore + ?Sized> SongStore for Arc<T> {
  fn insert(&self, song: NewSong) -> Result<Song, RepoError> {
    (**self).insert(song)
  }

  fn save(&self, song: &Song) -> Result<Song, RepoError> {
    (**self).save(song)
  }

  fn get_by_id(&self, id: SongId) -> Result<Option<Song>, RepoError> {
    (**self).get_by_id(id)
  }

  fn get_all(&self) -> Result<Vec<Song>, RepoError> {
    (**self).get_all()
  }

  fn exists_by_id(&self, id: SongId) -> Result<bool, RepoError> {
    (**self).exists_by_id(id)
  }

  fn delete_by_id(&self, id: SongId) -> Result<bool, RepoError> {
    (**self).delete_by_id(id)
  }

  fn count(&self) -> Result<u64, RepoError> {
    (**self).count()
  }

  fn find_by_exact_title(&self, title: &str) -> Result<Option<Song>, RepoError> {
    (**self).find_by_exact_title(title)
  }

  fn find_by_exact_artist(&self, artist: &str) -> Result<Vec<Song>, RepoError> {
    (**self).find_by_exact_artist(artist)
  }

  fn find_by_exact_category(&self, category: &str) -> Result<Vec<Song>, RepoError> {
    (**self).find_by_exact_category(category)
  }

  fn find_by_title_substring(&self, keyword: &str) -> Result<Vec<Song>, RepoError> {
    (**self).find_by_title_substring(keyword)
  }

  fn find_by_artist_substring(&self, keyword: &str) -> Result<Vec<Song>, RepoError> {
    (**self).find_by_artist_substring(keyword)
  }
}
