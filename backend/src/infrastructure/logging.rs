use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Override the filter via RUST_LOG.
pub fn init() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=warn".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();
}
