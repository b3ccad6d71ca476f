use cantus_config::{CONFIG_BACKEND, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sección `[storage]` de cantus.toml.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
  pub db_path: PathBuf,
  /// `PRAGMA journal_mode` aplicado a cada conexión.
  pub journal_mode: Option<String>,
  /// Tamaño máximo del pool de conexiones.
  pub pool_size: u32,
}

impl Default for StorageConfig {
  fn default() -> Self {
    let db_path = PATHS.data_dir.join("cantus.db");
    StorageConfig { db_path, journal_mode: Some("WAL".to_string()), pool_size: 8 }
  }
}

impl StorageConfig {
  pub fn load() -> Result<Self, ConfigError> {
    CONFIG_BACKEND.load_or_init_section("storage")
  }
}
