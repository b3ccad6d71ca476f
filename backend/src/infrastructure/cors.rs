use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

/// Preflight answers may be cached this long by the browser.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// CORS for the single-page client. Credentials are allowed, so headers are
/// mirrored instead of wildcarded.
pub fn layer(origins: &[String]) -> CorsLayer {
  let origins: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|origin| match origin.parse::<HeaderValue>() {
      Ok(value) => Some(value),
      Err(_) => {
        warn!(%origin, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
    .allow_headers(AllowHeaders::mirror_request())
    .expose_headers([header::LOCATION])
    .allow_credentials(true)
    .max_age(PREFLIGHT_MAX_AGE)
}
