use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use cantus::config::ServerConfig;
use cantus::infrastructure::logging;
use cantus::{AppState, create_app};
use cantus_storage::{SqliteSongStore, StorageConfig};

#[derive(Debug, Parser)]
#[command(name = "cantus", version, about = "REST service for a song catalog")]
struct Args {
  /// Overrides `[server].host`.
  #[arg(long, env = "CANTUS_HOST")]
  host: Option<String>,

  /// Overrides `[server].port`.
  #[arg(long, env = "CANTUS_PORT")]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  logging::init();

  let mut server_cfg = ServerConfig::load().context("failed to load [server] configuration")?;
  if let Some(host) = args.host {
    server_cfg.host = host;
  }
  if let Some(port) = args.port {
    server_cfg.port = port;
  }

  // --- Dependency Injection Phase ---

  // 1. Persistence Adapter (SQLite)
  let storage_cfg = StorageConfig::load().context("failed to load [storage] configuration")?;
  let store = SqliteSongStore::open(&storage_cfg).context("failed to open song store")?;

  // 2. Service + shared state
  let state = AppState::new(Arc::new(store), server_cfg.normalized_prefix(), "SQLite");

  // 3. HTTP surface
  let app = create_app(state, &server_cfg);

  let addr = server_cfg.bind_addr();
  let listener = tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  info!(%addr, prefix = %server_cfg.normalized_prefix(), "cantus listening");

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await.context("server error")?;

  info!("cantus stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
  }
}
