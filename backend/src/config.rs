use cantus_config::{CONFIG_BACKEND, ConfigError};
use serde::{Deserialize, Serialize};

/// Sección `[server]` de cantus.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  /// Prefijo bajo el que se montan las rutas (`/api` por defecto).
  pub api_prefix: String,
  /// Orígenes a los que se permite llamar a la API desde el navegador.
  pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig {
      host: "127.0.0.1".to_string(),
      port: 8080,
      api_prefix: "/api".to_string(),
      cors_origins: vec!["http://localhost:4200".to_string(), "http://127.0.0.1:4200".to_string()],
    }
  }
}

impl ServerConfig {
  pub fn load() -> Result<Self, ConfigError> {
    CONFIG_BACKEND.load_or_init_section("server")
  }

  /// `api_prefix` with exactly one leading slash and no trailing one. An
  /// empty result means routes are mounted at the root.
  pub fn normalized_prefix(&self) -> String {
    let trimmed = self.api_prefix.trim().trim_matches('/');
    if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") }
  }

  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prefix_is_normalized() {
    let mut cfg = ServerConfig::default();
    assert_eq!(cfg.normalized_prefix(), "/api");

    cfg.api_prefix = "api/v1/".into();
    assert_eq!(cfg.normalized_prefix(), "/api/v1");

    cfg.api_prefix = "/".into();
    assert_eq!(cfg.normalized_prefix(), "");
  }

  #[test]
  fn bind_addr_joins_host_and_port() {
    let cfg = ServerConfig { host: "0.0.0.0".into(), port: 9000, ..Default::default() };
    assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
  }
}
