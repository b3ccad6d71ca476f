use crate::schema::songs;

use cantus_core::domain::{NewSong, Song, SongDetails, SongId};
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = songs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SongRow {
  pub id: i64,
  pub title: String,
  pub artist: String,
  pub album: Option<String>,
  pub genre: Option<String>,
  pub category: Option<String>,
  pub duration: Option<i32>,
  pub audio_url: Option<String>,
  pub image_url: Option<String>,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = songs)]
pub struct NewSongRow {
  pub title: String,
  pub artist: String,
  pub album: Option<String>,
  pub genre: Option<String>,
  pub category: Option<String>,
  pub duration: Option<i32>,
  pub audio_url: Option<String>,
  pub image_url: Option<String>,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
}

/// Columnas que un `save` puede reescribir. `id` y `created_at` no están.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = songs, treat_none_as_null = true)]
pub struct SongChangeset<'a> {
  pub title: &'a str,
  pub artist: &'a str,
  pub album: Option<&'a str>,
  pub genre: Option<&'a str>,
  pub category: Option<&'a str>,
  pub duration: Option<i32>,
  pub audio_url: Option<&'a str>,
  pub image_url: Option<&'a str>,
  pub updated_at: NaiveDateTime,
}

impl From<NewSong> for NewSongRow {
  fn from(song: NewSong) -> Self {
    let NewSong { details, created_at, updated_at } = song;
    NewSongRow {
      title: details.title,
      artist: details.artist,
      album: details.album,
      genre: details.genre,
      category: details.category,
      duration: details.duration,
      audio_url: details.audio_url,
      image_url: details.image_url,
      created_at,
      updated_at,
    }
  }
}

impl<'a> From<&'a Song> for SongChangeset<'a> {
  fn from(song: &'a Song) -> Self {
    let d = &song.details;
    SongChangeset {
      title: &d.title,
      artist: &d.artist,
      album: d.album.as_deref(),
      genre: d.genre.as_deref(),
      category: d.category.as_deref(),
      duration: d.duration,
      audio_url: d.audio_url.as_deref(),
      image_url: d.image_url.as_deref(),
      updated_at: song.updated_at,
    }
  }
}

impl From<SongRow> for Song {
  fn from(row: SongRow) -> Self {
    Song {
      id: SongId::new(row.id),
      details: SongDetails {
        title: row.title,
        artist: row.artist,
        album: row.album,
        genre: row.genre,
        category: row.category,
        duration: row.duration,
        audio_url: row.audio_url,
        image_url: row.image_url,
      },
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}
