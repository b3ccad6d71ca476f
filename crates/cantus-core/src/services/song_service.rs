use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::{Song, SongId};
use crate::dto::SongDto;
use crate::errors::CoreError;
use crate::ports::{RepoError, SongStore};

fn utc_now() -> NaiveDateTime {
  Utc::now().naive_utc()
}

/// Reglas de negocio alrededor del store de canciones.
///
/// Owns its store; there is no ambient persistence context. Lookups that miss
/// come back as `None`/`false`/empty, never as `Err`.
pub struct SongService<S>
where
  S: SongStore,
{
  store: S,
  clock: fn() -> NaiveDateTime,
}

impl<S> SongService<S>
where
  S: SongStore,
{
  pub fn new(store: S) -> Self {
    Self { store, clock: utc_now }
  }

  /// Same as [`SongService::new`] with a custom time source.
  pub fn with_clock(store: S, clock: fn() -> NaiveDateTime) -> Self {
    Self { store, clock }
  }

  // -------- QUERY (read) --------

  pub fn list_all(&self) -> Result<Vec<SongDto>, CoreError> {
    info!("listing all songs");
    Ok(to_transfers(self.store.get_all()?))
  }

  pub fn get_by_id(&self, id: SongId) -> Result<Option<SongDto>, CoreError> {
    info!(song_id = %id, "fetching song");
    Ok(self.store.get_by_id(id)?.map(SongDto::from))
  }

  pub fn search_by_title(&self, keyword: &str) -> Result<Vec<SongDto>, CoreError> {
    info!(keyword, "searching songs by title");
    Ok(to_transfers(self.store.find_by_title_substring(keyword)?))
  }

  pub fn search_by_artist(&self, keyword: &str) -> Result<Vec<SongDto>, CoreError> {
    info!(keyword, "searching songs by artist");
    Ok(to_transfers(self.store.find_by_artist_substring(keyword)?))
  }

  pub fn list_by_category(&self, category: &str) -> Result<Vec<SongDto>, CoreError> {
    info!(category, "listing songs by category");
    Ok(to_transfers(self.store.find_by_exact_category(category)?))
  }

  /// Exact, case-sensitive artist match.
  pub fn list_by_artist(&self, artist: &str) -> Result<Vec<SongDto>, CoreError> {
    info!(artist, "listing songs by artist");
    Ok(to_transfers(self.store.find_by_exact_artist(artist)?))
  }

  /// Exact, case-sensitive title match; first hit in id order.
  pub fn find_by_title(&self, title: &str) -> Result<Option<SongDto>, CoreError> {
    info!(title, "fetching song by exact title");
    Ok(self.store.find_by_exact_title(title)?.map(SongDto::from))
  }

  pub fn count(&self) -> Result<u64, CoreError> {
    Ok(self.store.count()?)
  }

  // -------- COMMAND (write) --------

  pub fn create(&self, mut input: SongDto) -> Result<SongDto, CoreError> {
    info!(title = input.title.as_deref().unwrap_or_default(), "creating song");

    // Always a fresh insert: whatever id the client sent is dropped here.
    if let Some(client_id) = input.id.take() {
      debug!(%client_id, "ignoring client-supplied id on create");
    }

    let new_song = input.into_new_song((self.clock)());
    new_song.details.validate().map_err(CoreError::Validation)?;

    let saved = self.store.insert(new_song)?;
    info!(song_id = %saved.id, "song created");
    Ok(SongDto::from(saved))
  }

  pub fn update(&self, id: SongId, input: SongDto) -> Result<Option<SongDto>, CoreError> {
    info!(song_id = %id, "updating song");

    let Some(existing) = self.store.get_by_id(id)? else {
      return Ok(None);
    };

    let details = input.into_details();
    details.validate().map_err(CoreError::Validation)?;

    let song = Song {
      id: existing.id,
      details,
      created_at: existing.created_at,
      updated_at: (self.clock)().max(existing.updated_at),
    };

    match self.store.save(&song) {
      Ok(updated) => {
        info!(song_id = %id, "song updated");
        Ok(Some(SongDto::from(updated)))
      }
      Err(RepoError::NotFound) => {
        warn!(song_id = %id, "song vanished before it could be saved");
        Ok(None)
      }
      Err(e) => Err(e.into()),
    }
  }

  pub fn delete(&self, id: SongId) -> Result<bool, CoreError> {
    info!(song_id = %id, "deleting song");

    if !self.store.exists_by_id(id)? {
      warn!(song_id = %id, "attempt to delete a missing song");
      return Ok(false);
    }

    let deleted = self.store.delete_by_id(id)?;
    if deleted {
      info!(song_id = %id, "song deleted");
    } else {
      warn!(song_id = %id, "song vanished before it could be deleted");
    }
    Ok(deleted)
  }
}

fn to_transfers(songs: Vec<Song>) -> Vec<SongDto> {
  songs.into_iter().map(SongDto::from).collect()
}
