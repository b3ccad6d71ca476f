use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use cantus_core::CoreError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
  pub status: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
    Self { status, message: message.into() }
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": {
        "message": self.message,
        "status": self.status.as_u16(),
      }
    }));

    (self.status, body).into_response()
  }
}

impl From<CoreError> for AppError {
  fn from(err: CoreError) -> Self {
    match err {
      CoreError::Validation(msg) => Self::bad_request(msg),
      CoreError::Repository(msg) => {
        tracing::error!(error = %msg, "song store operation failed");
        Self::internal("Database operation failed")
      }
    }
  }
}
