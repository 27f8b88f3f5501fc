//! The `ContactStore` trait and the paged result type.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-sqlite`).
//! Higher layers depend on this abstraction, not on any concrete backend.

use std::future::Future;

use serde::Serialize;

use crate::{Contact, NewContact, Result};

// ─── Paged results ───────────────────────────────────────────────────────────

/// One page of contacts plus total-count metadata, sorted by name ascending.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
  pub content:        Vec<Contact>,
  pub page:           u32,
  pub size:           u32,
  pub total_elements: u64,
  pub total_pages:    u64,
}

impl ContactPage {
  pub fn new(
    content: Vec<Contact>,
    page: u32,
    size: u32,
    total_elements: u64,
  ) -> Self {
    let total_pages = if size == 0 {
      0
    } else {
      total_elements.div_ceil(u64::from(size))
    };
    Self { content, page, size, total_elements, total_pages }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a contact storage backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`). Errors use the
/// shared [`crate::Error`] kinds so callers can map them to responses without
/// knowing which backend produced them.
pub trait ContactStore: Send + Sync {
  /// Return the `page`-th page of `size` contacts, sorted by name ascending,
  /// with total-count metadata.
  fn list_page(
    &self,
    page: u32,
    size: u32,
  ) -> impl Future<Output = Result<ContactPage>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>>> + Send + '_;

  /// Persist a new contact and return it with its assigned id. A duplicate
  /// email fails with [`crate::Error::DuplicateEmail`].
  fn insert(
    &self,
    contact: NewContact,
  ) -> impl Future<Output = Result<Contact>> + Send + '_;

  /// Persist every field of an existing contact, addressed by its id.
  /// Fails with [`crate::Error::ContactNotFound`] if the row is gone and
  /// [`crate::Error::DuplicateEmail`] if the email now collides.
  fn update<'a>(
    &'a self,
    contact: &'a Contact,
  ) -> impl Future<Output = Result<Contact>> + Send + 'a;

  /// Hard-delete a contact by id; [`crate::Error::ContactNotFound`] if
  /// absent. Any photo file the contact pointed at is left on disk.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<()>> + Send + '_;
}
