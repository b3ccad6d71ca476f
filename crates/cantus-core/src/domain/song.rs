use crate::domain::ids::SongId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Los campos mutables de una canción.
///
/// `update` replaces this block wholesale; `id` and `created_at` live outside
/// of it so they cannot be touched by accident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDetails {
  /// Título. Obligatorio y no vacío.
  pub title: String,
  /// Intérprete. Obligatorio y no vacío.
  pub artist: String,
  pub album: Option<String>,
  pub genre: Option<String>,
  /// Categoría libre (Pop, Rock, Jazz...). Se compara de forma exacta.
  pub category: Option<String>,
  /// Duración en segundos.
  pub duration: Option<i32>,
  /// URL o ruta del fichero de audio.
  pub audio_url: Option<String>,
  /// URL o ruta de la portada.
  pub image_url: Option<String>,
}

impl SongDetails {
  /// Checks the required fields. Returns the message of the first violation.
  pub fn validate(&self) -> Result<(), String> {
    if self.title.trim().is_empty() {
      return Err("title is required".to_string());
    }
    if self.artist.trim().is_empty() {
      return Err("artist is required".to_string());
    }
    Ok(())
  }
}

/// La Canción (Song) tal y como vive en el store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  pub id: SongId,
  pub details: SongDetails,
  /// Fijado una sola vez al crear.
  pub created_at: NaiveDateTime,
  /// Refrescado en cada mutación; nunca menor que `created_at`.
  pub updated_at: NaiveDateTime,
}

/// A song that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
  pub details: SongDetails,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
}

impl NewSong {
  /// Stamps both timestamps with the same instant.
  pub fn stamped(details: SongDetails, now: NaiveDateTime) -> Self {
    NewSong { details, created_at: now, updated_at: now }
  }

  pub fn into_song(self, id: SongId) -> Song {
    Song { id, details: self.details, created_at: self.created_at, updated_at: self.updated_at }
  }
}
