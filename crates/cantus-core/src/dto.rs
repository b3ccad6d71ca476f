//! Transfer representation of a song.
//!
//! `SongDto` is the shape that crosses the service boundary (and, through the
//! HTTP layer, the wire). It mirrors [`Song`] one to one but every field is
//! optional so that partial client payloads still deserialize; validation is
//! the service's job, not the mapping's.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{NewSong, Song, SongDetails, SongId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongDto {
  pub id: Option<SongId>,
  pub title: Option<String>,
  pub artist: Option<String>,
  pub album: Option<String>,
  pub genre: Option<String>,
  pub category: Option<String>,
  pub duration: Option<i32>,
  pub audio_url: Option<String>,
  pub image_url: Option<String>,
  pub created_at: Option<NaiveDateTime>,
  pub updated_at: Option<NaiveDateTime>,
}

impl From<Song> for SongDto {
  fn from(song: Song) -> Self {
    let Song { id, details, created_at, updated_at } = song;
    SongDto {
      id: Some(id),
      title: Some(details.title),
      artist: Some(details.artist),
      album: details.album,
      genre: details.genre,
      category: details.category,
      duration: details.duration,
      audio_url: details.audio_url,
      image_url: details.image_url,
      created_at: Some(created_at),
      updated_at: Some(updated_at),
    }
  }
}

impl SongDto {
  /// Copia los campos mutables. A missing title/artist becomes an empty
  /// string, which `SongDetails::validate` rejects later.
  pub fn into_details(self) -> SongDetails {
    SongDetails {
      title: self.title.unwrap_or_default(),
      artist: self.artist.unwrap_or_default(),
      album: self.album,
      genre: self.genre,
      category: self.category,
      duration: self.duration,
      audio_url: self.audio_url,
      image_url: self.image_url,
    }
  }

  /// Builds the record to insert. `id` and the client timestamps are dropped
  /// here by construction; callers decide what `now` is.
  pub fn into_new_song(self, now: NaiveDateTime) -> NewSong {
    NewSong::stamped(self.into_details(), now)
  }
}
