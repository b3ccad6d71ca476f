use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identificador único de una canción.
///
/// Lo asigna el store al insertar; nunca se reutiliza tras un borrado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(i64);

impl SongId {
  pub fn new(raw: i64) -> Self {
    SongId(raw)
  }

  /// Devuelve el valor interno.
  pub fn get(&self) -> i64 {
    self.0
  }
}

impl From<i64> for SongId {
  fn from(raw: i64) -> Self {
    SongId(raw)
  }
}

impl From<SongId> for i64 {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl FromStr for SongId {
  type Err = std::num::ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<i64>().map(SongId)
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_as_a_bare_number() {
    let json = serde_json::to_string(&SongId::new(42)).unwrap();
    assert_eq!(json, "42");
  }

  #[test]
  fn parses_from_path_segments() {
    assert_eq!("7".parse::<SongId>().unwrap(), SongId::new(7));
    assert!("seven".parse::<SongId>().is_err());
  }
}
