//! Error types for `rolo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("contact not found with id {0}")]
  ContactNotFound(i64),

  /// A field-level constraint violation; the message is caller-facing.
  #[error("{0}")]
  Validation(String),

  #[error("a contact with email {0:?} already exists")]
  DuplicateEmail(String),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
