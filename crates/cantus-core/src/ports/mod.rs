pub mod song_store;

pub use song_store::{RepoError, SongStore};
