use std::collections::BTreeMap;

use parking_lot::RwLock;

use cantus_core::domain::{NewSong, Song, SongId};
use cantus_core::ports::{RepoError, SongStore};

#[derive(Default)]
struct Inner {
  rows: BTreeMap<SongId, Song>,
  last_id: i64,
}

/// Store en memoria. Same contract as the SQLite store: ids are handed out
/// from a counter that never goes back, so a deleted id is never reissued.
#[derive(Default)]
pub struct MemorySongStore {
  inner: RwLock<Inner>,
}

impl MemorySongStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn filter(&self, pred: impl Fn(&Song) -> bool) -> Vec<Song> {
    self.inner.read().rows.values().filter(|s| pred(s)).cloned().collect()
  }
}

fn contains_ignore_case(haystack: &str, keyword: &str) -> bool {
  haystack.to_lowercase().contains(&keyword.to_lowercase())
}

impl SongStore for MemorySongStore {
  fn insert(&self, song: NewSong) -> Result<Song, RepoError> {
    song.details.validate().map_err(RepoError::Validation)?;

    let mut inner = self.inner.write();
    inner.last_id += 1;
    let song = song.into_song(SongId::new(inner.last_id));
    inner.rows.insert(song.id, song.clone());
    Ok(song)
  }

  fn save(&self, song: &Song) -> Result<Song, RepoError> {
    song.details.validate().map_err(RepoError::Validation)?;

    let mut inner = self.inner.write();
    let slot = inner.rows.get_mut(&song.id).ok_or(RepoError::NotFound)?;
    // created_at es inmutable
    slot.details = song.details.clone();
    slot.updated_at = song.updated_at;
    Ok(slot.clone())
  }

  fn get_by_id(&self, id: SongId) -> Result<Option<Song>, RepoError> {
    Ok(self.inner.read().rows.get(&id).cloned())
  }

  fn get_all(&self) -> Result<Vec<Song>, RepoError> {
    Ok(self.inner.read().rows.values().cloned().collect())
  }

  fn exists_by_id(&self, id: SongId) -> Result<bool, RepoError> {
    Ok(self.inner.read().rows.contains_key(&id))
  }

  fn delete_by_id(&self, id: SongId) -> Result<bool, RepoError> {
    Ok(self.inner.write().rows.remove(&id).is_some())
  }

  fn count(&self) -> Result<u64, RepoError> {
    Ok(self.inner.read().rows.len() as u64)
  }

  fn find_by_exact_title(&self, title: &str) -> Result<Option<Song>, RepoError> {
    Ok(self.inner.read().rows.values().find(|s| s.details.title == title).cloned())
  }

  fn find_by_exact_artist(&self, artist: &str) -> Result<Vec<Song>, RepoError> {
    Ok(self.filter(|s| s.details.artist == artist))
  }

  fn find_by_exact_category(&self, category: &str) -> Result<Vec<Song>, RepoError> {
    Ok(self.filter(|s| s.details.category.as_deref() == Some(category)))
  }

  fn find_by_title_substring(&self, keyword: &str) -> Result<Vec<Song>, RepoError> {
    Ok(self.filter(|s| contains_ignore_case(&s.details.title, keyword)))
  }

  fn find_by_artist_substring(&self, keyword: &str) -> Result<Vec<Song>, RepoError> {
    Ok(self.filter(|s| contains_ignore_case(&s.details.artist, keyword)))
  }
}
