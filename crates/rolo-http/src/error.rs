//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every service failure maps to a status by kind — including on the photo
//! routes, where a storage failure is a 500 rather than being collapsed
//! into 404.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  Validation(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Validation(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Storage(e) => {
        tracing::error!(error = %e, "storage failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

impl From<rolo_core::Error> for ApiError {
  fn from(e: rolo_core::Error) -> Self {
    use rolo_core::Error as E;
    match e {
      E::ContactNotFound(_) => ApiError::NotFound(e.to_string()),
      E::Validation(msg) => ApiError::Validation(msg),
      E::DuplicateEmail(_) => ApiError::Conflict(e.to_string()),
      E::Storage(inner) => ApiError::Storage(inner),
    }
  }
}

impl From<rolo_photos::Error> for ApiError {
  fn from(e: rolo_photos::Error) -> Self {
    use rolo_photos::Error as E;
    match e {
      E::NotFound(_) => ApiError::NotFound(e.to_string()),
      E::InvalidFileName(_) => ApiError::Validation(e.to_string()),
      E::Io(inner) => ApiError::Storage(Box::new(inner)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn maps_core_errors_by_kind() {
    let api: ApiError = rolo_core::Error::ContactNotFound(7).into();
    assert!(matches!(api, ApiError::NotFound(_)));

    let api: ApiError =
      rolo_core::Error::DuplicateEmail("a@b.com".into()).into();
    assert!(matches!(api, ApiError::Conflict(_)));

    let api: ApiError = rolo_core::Error::Validation("bad".into()).into();
    assert!(matches!(api, ApiError::Validation(m) if m == "bad"));
  }

  #[test]
  fn maps_photo_errors_by_kind() {
    let api: ApiError = rolo_photos::Error::NotFound("x.png".into()).into();
    assert!(matches!(api, ApiError::NotFound(_)));

    let api: ApiError =
      rolo_photos::Error::InvalidFileName("../x".into()).into();
    assert!(matches!(api, ApiError::Validation(_)));
  }
}
