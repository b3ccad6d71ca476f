// crates/cantus-core/src/errors.rs
use thiserror::Error;

use crate::ports::RepoError;

/// Error genérico del núcleo de Cantus.
///
/// "Not found" never travels through this type: lookups return `Option`,
/// deletes return `bool`. The HTTP layer maps the remaining cases to 400/500.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("repository error: {0}")]
  Repository(String),
}

impl From<RepoError> for CoreError {
  fn from(err: RepoError) -> Self {
    match err {
      RepoError::Validation(msg) => CoreError::Validation(msg),
      other => CoreError::Repository(other.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn repo_validation_stays_a_validation_error() {
    let err = CoreError::from(RepoError::Validation("title is required".into()));
    assert!(matches!(err, CoreError::Validation(msg) if msg == "title is required"));
  }

  #[test]
  fn storage_failures_become_repository_errors() {
    let err = CoreError::from(RepoError::Storage("database is locked".into()));
    assert_eq!(err.to_string(), "repository error: storage error: database is locked");
  }
}
