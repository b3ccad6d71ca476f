use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that relocates every Cantus directory under one root.
pub const BASE_DIR_ENV: &str = "CANTUS_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct CantusPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl CantusPaths {
  /// Portable layout: `config/`, `data/` and `cache/` under `base`.
  pub fn from_base(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base_dir = base.as_ref().to_path_buf();
    let paths = Self {
      config_dir: base_dir.join("config"),
      data_dir: base_dir.join("data"),
      cache_dir: base_dir.join("cache"),
      base_dir,
    };
    paths.create_dirs()?;
    Ok(paths)
  }

  /// System layout from the platform's project directories.
  pub fn system() -> Result<Self, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "cantus", "cantus").ok_or(ConfigError::Directories)?;
    let paths = Self {
      base_dir: proj_dirs.config_dir().to_path_buf(),
      config_dir: proj_dirs.config_dir().to_path_buf(),
      data_dir: proj_dirs.data_dir().to_path_buf(),
      cache_dir: proj_dirs.cache_dir().to_path_buf(),
    };
    paths.create_dirs()?;
    Ok(paths)
  }

  /// `CANTUS_BASE_DIR` wins over the system layout.
  pub fn detect() -> Result<Self, ConfigError> {
    match std::env::var(BASE_DIR_ENV) {
      Ok(env_base) if !env_base.trim().is_empty() => Self::from_base(env_base),
      _ => Self::system(),
    }
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("cantus.toml")
  }

  fn create_dirs(&self) -> Result<(), ConfigError> {
    std::fs::create_dir_all(&self.config_dir)?;
    std::fs::create_dir_all(&self.data_dir)?;
    std::fs::create_dir_all(&self.cache_dir)?;
    Ok(())
  }
}
