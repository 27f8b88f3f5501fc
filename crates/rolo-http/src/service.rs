//! The contact service — orchestrates validation, field-merge updates, and
//! the photo-upload workflow between the contact store and the photo store.

use std::sync::Arc;

use bytes::Bytes;
use rolo_core::{
  Contact, ContactPage, ContactStore, ContactUpdate, NewContact, validate,
};
use rolo_photos::FsPhotoStore;
use uuid::Uuid;

use crate::error::ApiError;

/// Photo uploads larger than this are rejected outright.
pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Path under which stored photos are served, appended to the public base
/// URL when building a contact's `photo_url`.
pub const PHOTO_ROUTE: &str = "/contacts/uploads/photos";

pub struct ContactService<S> {
  store:    Arc<S>,
  photos:   FsPhotoStore,
  base_url: String,
}

impl<S: ContactStore> ContactService<S> {
  pub fn new(
    store: S,
    photos: FsPhotoStore,
    public_base_url: impl Into<String>,
  ) -> Self {
    let mut base_url = public_base_url.into();
    while base_url.ends_with('/') {
      base_url.pop();
    }
    Self { store: Arc::new(store), photos, base_url }
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  pub async fn get_all_contacts(
    &self,
    page: u32,
    size: u32,
  ) -> Result<ContactPage, ApiError> {
    tracing::info!(page, size, "fetching contacts page");
    Ok(self.store.list_page(page, size).await?)
  }

  pub async fn get_contact_by_id(&self, id: i64) -> Result<Contact, ApiError> {
    let contact = self
      .store
      .find_by_id(id)
      .await?
      .ok_or(rolo_core::Error::ContactNotFound(id))?;
    Ok(contact)
  }

  pub async fn add_contact(
    &self,
    contact: NewContact,
  ) -> Result<Contact, ApiError> {
    tracing::info!(name = %contact.name, "adding contact");
    validate::validate_new(&contact)?;
    Ok(self.store.insert(contact).await?)
  }

  /// Field-merge update: only fields present on `updates` overwrite the
  /// stored row; the merged row is re-validated before persisting.
  pub async fn update_contact(
    &self,
    id: i64,
    updates: ContactUpdate,
  ) -> Result<Contact, ApiError> {
    tracing::info!(id, "updating contact");

    let mut contact = self.get_contact_by_id(id).await?;
    updates.apply_to(&mut contact);
    validate::validate_contact(&contact)?;

    Ok(self.store.update(&contact).await?)
  }

  /// Hard delete. The photo file a contact may point at is left on disk —
  /// a known leak inherited from the original API.
  pub async fn delete_contact(&self, id: i64) -> Result<(), ApiError> {
    tracing::info!(id, "deleting contact");
    Ok(self.store.delete_by_id(id).await?)
  }

  // ── Photos ────────────────────────────────────────────────────────────────

  /// Validate and store an uploaded photo, then point the contact's
  /// `photo_url` at it.
  pub async fn upload_photo(
    &self,
    id: i64,
    bytes: Bytes,
    original_file_name: &str,
  ) -> Result<Contact, ApiError> {
    let mut contact = self.get_contact_by_id(id).await?;
    validate_photo(&bytes, original_file_name)?;

    let extension = file_extension(original_file_name)
      .ok_or_else(|| ApiError::Validation("Invalid file extension!".into()))?;
    let file_name = format!(
      "{}_photo_{}{}",
      sanitize_file_stem(&contact.name),
      Uuid::new_v4(),
      extension,
    );

    self.photos.write(&file_name, &bytes).await?;
    tracing::info!(id, file_name, "stored contact photo");

    contact.photo_url =
      Some(format!("{}{}/{}", self.base_url, PHOTO_ROUTE, file_name));
    validate::validate_contact(&contact)?;

    Ok(self.store.update(&contact).await?)
  }

  pub async fn get_photo(&self, file_name: &str) -> Result<Vec<u8>, ApiError> {
    Ok(self.photos.read(file_name).await?)
  }

  /// Resolve a contact's photo through its stored `photo_url`. Returns the
  /// file name alongside the bytes so the caller can derive a content type.
  pub async fn get_photo_by_contact_id(
    &self,
    id: i64,
  ) -> Result<(String, Vec<u8>), ApiError> {
    let contact = self.get_contact_by_id(id).await?;

    let photo_url = contact.photo_url.as_deref().unwrap_or("");
    if photo_url.is_empty() {
      return Err(ApiError::NotFound(format!(
        "no photo available for contact {id}"
      )));
    }

    // The file name is the trailing segment of the stored URL.
    let file_name = photo_url.rsplit('/').next().unwrap_or(photo_url);
    let bytes = self.get_photo(file_name).await?;
    Ok((file_name.to_owned(), bytes))
  }
}

// ─── Photo helpers ───────────────────────────────────────────────────────────

fn validate_photo(bytes: &[u8], original_file_name: &str) -> Result<(), ApiError> {
  if bytes.is_empty() {
    return Err(ApiError::Validation("Photo file is empty!".into()));
  }
  if bytes.len() > MAX_PHOTO_BYTES {
    return Err(ApiError::Validation(
      "Photo file size exceeds the maximum allowed size of 2 MB!".into(),
    ));
  }

  let allowed = file_extension(original_file_name)
    .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
    .unwrap_or(false);
  if !allowed {
    return Err(ApiError::Validation(
      "Invalid file extension! Only JPG, JPEG, and PNG files are allowed."
        .into(),
    ));
  }
  Ok(())
}

/// The extension of `name` including its leading dot, or `None` if the name
/// has no dot.
fn file_extension(name: &str) -> Option<&str> {
  name.rfind('.').map(|idx| &name[idx..])
}

/// Replace every character outside `[A-Za-z0-9]` with `_`, yielding a stem
/// that is always safe as part of a file name.
fn sanitize_file_stem(name: &str) -> String {
  name
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
    .collect()
}
