use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use cantus_core::domain::{NewSong, Song, SongId};
use cantus_core::ports::{RepoError, SongStore};

use crate::config::StorageConfig;
use crate::models::{NewSongRow, SongChangeset, SongRow};
use crate::schema::songs;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT_MS: u32 = 5_000;

// lower() de SQLite solo pliega ASCII; esta se registra en cada conexión
diesel::define_sql_function! {
  fn fold_case(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
type SqlitePooled = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pragmas aplicados a cada conexión nueva del pool.
#[derive(Debug)]
struct ConnectionOptions {
  journal_mode: Option<String>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
  fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
    let mut pragmas = format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};");
    if let Some(mode) = &self.journal_mode {
      pragmas.push_str(&format!(" PRAGMA journal_mode = {mode};"));
    }
    conn.batch_execute(&pragmas).map_err(diesel::r2d2::Error::QueryError)?;
    fold_case_utils::register_impl(conn, |x: String| x.to_lowercase())
      .map_err(diesel::r2d2::Error::QueryError)
  }
}

/// Store de canciones sobre SQLite.
///
/// Shares an r2d2 pool, so one instance can be used from many threads. The
/// `songs` table is created on open.
pub struct SqliteSongStore {
  pool: SqlitePool,
}

impl SqliteSongStore {
  pub fn new_from_config() -> Result<Self, RepoError> {
    let cfg = StorageConfig::load().map_err(|e| RepoError::Storage(e.to_string()))?;
    Self::open(&cfg)
  }

  pub fn open(cfg: &StorageConfig) -> Result<Self, RepoError> {
    if let Some(parent) = cfg.db_path.parent() {
      std::fs::create_dir_all(parent).map_err(|e| RepoError::Storage(e.to_string()))?;
    }

    let journal_mode = cfg.journal_mode.as_deref().map(checked_journal_mode).transpose()?;
    let manager = ConnectionManager::<SqliteConnection>::new(path_to_url(&cfg.db_path));
    let pool = Pool::builder()
      .max_size(cfg.pool_size.max(1))
      .connection_customizer(Box::new(ConnectionOptions { journal_mode }))
      .build(manager)
      .map_err(storage_error)?;

    info!(db_path = %cfg.db_path.display(), pool_size = cfg.pool_size, "opened sqlite song store");
    Self::with_pool(pool)
  }

  /// A private database that lives as long as the store. Single connection,
  /// never recycled, since closing it would drop the data.
  pub fn open_in_memory() -> Result<Self, RepoError> {
    let pool = Pool::builder()
      .max_size(1)
      .idle_timeout(None)
      .max_lifetime(None)
      .connection_customizer(Box::new(ConnectionOptions { journal_mode: None }))
      .build(ConnectionManager::<SqliteConnection>::new(":memory:"))
      .map_err(storage_error)?;

    Self::with_pool(pool)
  }

  fn with_pool(pool: SqlitePool) -> Result<Self, RepoError> {
    let store = Self { pool };
    {
      let mut pooled = store.conn()?;
      let conn: &mut SqliteConnection = &mut pooled;
      let applied = conn.run_pending_migrations(MIGRATIONS).map_err(storage_error)?;
      if !applied.is_empty() {
        info!(count = applied.len(), "applied song store migrations");
      }
    }
    Ok(store)
  }

  fn conn(&self) -> Result<SqlitePooled, RepoError> {
    self.pool.get().map_err(storage_error)
  }
}

impl SongStore for SqliteSongStore {
  fn insert(&self, song: NewSong) -> Result<Song, RepoError> {
    let mut conn = self.conn()?;
    let row = diesel::insert_into(songs::table)
      .values(NewSongRow::from(song))
      .returning(SongRow::as_returning())
      .get_result::<SongRow>(&mut *conn)
      .map_err(query_error)?;

    debug!(song_id = row.id, "inserted song row");
    Ok(row.into())
  }

  fn save(&self, song: &Song) -> Result<Song, RepoError> {
    let mut conn = self.conn()?;
    let row = diesel::update(songs::table.find(song.id.get()))
      .set(SongChangeset::from(song))
      .returning(SongRow::as_returning())
      .get_result::<SongRow>(&mut *conn)
      .optional()
      .map_err(query_error)?;

    row.map(Song::from).ok_or(RepoError::NotFound)
  }

  fn get_by_id(&self, id: SongId) -> Result<Option<Song>, RepoError> {
    let mut conn = self.conn()?;
    let row = songs::table
      .find(id.get())
      .select(SongRow::as_select())
      .first::<SongRow>(&mut *conn)
      .optional()
      .map_err(query_error)?;

    Ok(row.map(Song::from))
  }

  fn get_all(&self) -> Result<Vec<Song>, RepoError> {
    let mut conn = self.conn()?;
    songs::table
      .order(songs::id.asc())
      .select(SongRow::as_select())
      .load::<SongRow>(&mut *conn)
      .map(into_songs)
      .map_err(query_error)
  }

  fn exists_by_id(&self, id: SongId) -> Result<bool, RepoError> {
    let mut conn = self.conn()?;
    diesel::select(diesel::dsl::exists(songs::table.find(id.get())))
      .get_result::<bool>(&mut *conn)
      .map_err(query_error)
  }

  fn delete_by_id(&self, id: SongId) -> Result<bool, RepoError> {
    let mut conn = self.conn()?;
    let deleted = diesel::delete(songs::table.find(id.get())).execute(&mut *conn).map_err(query_error)?;
    Ok(deleted > 0)
  }

  fn count(&self) -> Result<u64, RepoError> {
    let mut conn = self.conn()?;
    let total: i64 = songs::table.count().get_result(&mut *conn).map_err(query_error)?;
    Ok(total.max(0) as u64)
  }

  fn find_by_exact_title(&self, title: &str) -> Result<Option<Song>, RepoError> {
    let mut conn = self.conn()?;
    let row = songs::table
      .filter(songs::title.eq(title))
      .order(songs::id.asc())
      .select(SongRow::as_select())
      .first::<SongRow>(&mut *conn)
      .optional()
      .map_err(query_error)?;

    Ok(row.map(Song::from))
  }

  fn find_by_exact_artist(&self, artist: &str) -> Result<Vec<Song>, RepoError> {
    let mut conn = self.conn()?;
    songs::table
      .filter(songs::artist.eq(artist))
      .order(songs::id.asc())
      .select(SongRow::as_select())
      .load::<SongRow>(&mut *conn)
      .map(into_songs)
      .map_err(query_error)
  }

  fn find_by_exact_category(&self, category: &str) -> Result<Vec<Song>, RepoError> {
    let mut conn = self.conn()?;
    songs::table
      .filter(songs::category.eq(category))
      .order(songs::id.asc())
      .select(SongRow::as_select())
      .load::<SongRow>(&mut *conn)
      .map(into_songs)
      .map_err(query_error)
  }

  fn find_by_title_substring(&self, keyword: &str) -> Result<Vec<Song>, RepoError> {
    let mut conn = self.conn()?;
    songs::table
      .filter(fold_case(songs::title).like(contains_pattern(keyword)).escape('\\'))
      .order(songs::id.asc())
      .select(SongRow::as_select())
      .load::<SongRow>(&mut *conn)
      .map(into_songs)
      .map_err(query_error)
  }

  fn find_by_artist_substring(&self, keyword: &str) -> Result<Vec<Song>, RepoError> {
    let mut conn = self.conn()?;
    songs::table
      .filter(fold_case(songs::artist).like(contains_pattern(keyword)).escape('\\'))
      .order(songs::id.asc())
      .select(SongRow::as_select())
      .load::<SongRow>(&mut *conn)
      .map(into_songs)
      .map_err(query_error)
  }
}

fn into_songs(rows: Vec<SongRow>) -> Vec<Song> {
  rows.into_iter().map(Song::from).collect()
}

/// `%keyword%` in lower case, with LIKE metacharacters escaped so they match
/// literally.
fn contains_pattern(keyword: &str) -> String {
  let mut pattern = String::with_capacity(keyword.len() + 2);
  pattern.push('%');
  for c in keyword.to_lowercase().chars() {
    if matches!(c, '%' | '_' | '\\') {
      pattern.push('\\');
    }
    pattern.push(c);
  }
  pattern.push('%');
  pattern
}

fn checked_journal_mode(mode: &str) -> Result<String, RepoError> {
  let upper = mode.trim().to_ascii_uppercase();
  match upper.as_str() {
    "DELETE" | "TRUNCATE" | "PERSIST" | "MEMORY" | "WAL" | "OFF" => Ok(upper),
    _ => Err(RepoError::Storage(format!("unsupported journal_mode: {mode}"))),
  }
}

fn path_to_url(path: &Path) -> String {
  path.to_string_lossy().into_owned()
}

fn storage_error(e: impl std::fmt::Display) -> RepoError {
  RepoError::Storage(e.to_string())
}

fn query_error(e: DieselError) -> RepoError {
  match e {
    DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation | DatabaseErrorKind::CheckViolation, info) => {
      RepoError::Validation(info.message().to_string())
    }
    // sin códigos extendidos SQLite solo reporta SQLITE_CONSTRAINT
    DieselError::DatabaseError(_, info) if is_constraint_message(info.message()) => {
      RepoError::Validation(info.message().to_string())
    }
    DieselError::NotFound => RepoError::NotFound,
    other => RepoError::Storage(other.to_string()),
  }
}

fn is_constraint_message(message: &str) -> bool {
  message.starts_with("NOT NULL constraint failed") || message.starts_with("CHECK constraint failed")
}
