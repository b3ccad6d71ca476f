pub mod config;
pub mod memory;
pub mod models;
pub mod schema;
pub mod sqlite;

pub use config::StorageConfig;
pub use memory::MemorySongStore;
pub use sqlite::SqliteSongStore;
