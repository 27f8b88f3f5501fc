//! REST layer for the Rolo contact API.
//!
//! Exposes an axum [`Router`] backed by any [`ContactStore`], plus the
//! [`ContactService`] orchestration layer the handlers call into.

pub mod error;
pub mod handlers;
pub mod service;

pub use error::ApiError;
pub use service::ContactService;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  extract::DefaultBodyLimit,
  http::{HeaderName, HeaderValue, Method, header},
  routing::{get, put},
};
use rolo_core::ContactStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use handlers::{contacts, photos};

/// Request bodies above this size are refused at the transport level. Kept
/// well above the 2 MiB photo cap so an oversized upload reaches the
/// service and fails validation with a 400 instead of a bare 413.
const MAX_REQUEST_BYTES: usize = 8 * 1024 * 1024;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`. Every
/// field has a local-development default, so the server starts with no
/// config file at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  /// Base URL clients reach the API under; stored `photo_url` values are
  /// built from it.
  pub public_base_url: String,
  pub db_path:         PathBuf,
  pub upload_dir:      PathBuf,
  /// The single origin cross-origin requests are permitted from.
  pub cors_origin:     String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            "127.0.0.1".to_string(),
      port:            8080,
      public_base_url: "http://localhost:8080".to_string(),
      db_path:         PathBuf::from("rolo.db"),
      upload_dir:      PathBuf::from("uploads/photos"),
      cors_origin:     "http://localhost:5173".to_string(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ContactStore> {
  pub service: Arc<ContactService<S>>,
  pub config:  Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the contact API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let cors = cors_layer(&state.config);

  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete::<S>),
    )
    .route(
      "/contacts/{id}/photo",
      put(photos::upload::<S>).get(photos::by_contact::<S>),
    )
    .route(
      "/contacts/uploads/photos/{file_name}",
      get(photos::get_photo::<S>),
    )
    .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Static CORS policy: one configured origin, credentials allowed, and the
/// fixed header/method lists existing clients of the API rely on.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
  let shared_headers: Vec<HeaderName> = vec![
    header::ORIGIN,
    header::CONTENT_TYPE,
    header::ACCEPT,
    header::AUTHORIZATION,
    HeaderName::from_static("x-requested-with"),
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    header::ACCESS_CONTROL_REQUEST_METHOD,
    header::ACCESS_CONTROL_REQUEST_HEADERS,
  ];

  let allowed_origin = config.cors_origin.clone();

  CorsLayer::new()
    .allow_origin(AllowOrigin::predicate(
      move |origin: &HeaderValue, _parts| {
        origin.as_bytes() == allowed_origin.as_bytes()
      },
    ))
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PUT,
      Method::PATCH,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers(tower_http::cors::AllowHeaders::list(
      shared_headers.clone(),
    ))
    .expose_headers(tower_http::cors::ExposeHeaders::list(shared_headers))
    .allow_credentials(true)
}

// ─── Integration tests ────────────────────────────────────────────────────────
