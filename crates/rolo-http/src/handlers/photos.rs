//! Handlers for photo upload and retrieval.
//!
//! Uploads arrive as `multipart/form-data` with the file under a `photo`
//! field. Retrieval routes serve raw bytes with a Content-Type derived from
//! the file extension.

use axum::{
  Json,
  body::Body,
  extract::{Multipart, Path, State},
  http::{StatusCode, header},
  response::Response,
};
use rolo_core::{Contact, ContactStore};

use crate::{AppState, error::ApiError};

/// `PUT /contacts/{id}/photo` — multipart field `photo`.
pub async fn upload<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  mut multipart: Multipart,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let mut photo: Option<(String, bytes::Bytes)> = None;

  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(|e| ApiError::Validation(format!("multipart error: {e}")))?
  {
    if field.name() != Some("photo") {
      continue;
    }
    let file_name = field
      .file_name()
      .map(str::to_owned)
      .ok_or_else(|| {
        ApiError::Validation("photo field carries no file name".into())
      })?;
    let bytes = field
      .bytes()
      .await
      .map_err(|e| ApiError::Validation(format!("multipart read error: {e}")))?;
    photo = Some((file_name, bytes));
  }

  let (file_name, bytes) = photo.ok_or_else(|| {
    ApiError::Validation("missing multipart field \"photo\"".into())
  })?;

  let contact = state.service.upload_photo(id, bytes, &file_name).await?;
  Ok(Json(contact))
}

/// `GET /contacts/uploads/photos/{file_name}`
pub async fn get_photo<S>(
  State(state): State<AppState<S>>,
  Path(file_name): Path<String>,
) -> Result<Response, ApiError>
where
  S: ContactStore,
{
  let bytes = state.service.get_photo(&file_name).await?;
  photo_response(&file_name, bytes)
}

/// `GET /contacts/{id}/photo`
pub async fn by_contact<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Response, ApiError>
where
  S: ContactStore,
{
  let (file_name, bytes) = state.service.get_photo_by_contact_id(id).await?;
  photo_response(&file_name, bytes)
}

fn photo_response(file_name: &str, bytes: Vec<u8>) -> Result<Response, ApiError> {
  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, content_type_for(file_name))
    .header(header::CONTENT_LENGTH, bytes.len())
    .body(Body::from(bytes))
    .map_err(|e| ApiError::Storage(Box::new(e)))
}

/// Content-Type by file extension; unknown extensions fall back to a raw
/// byte stream.
pub fn content_type_for(file_name: &str) -> &'static str {
  let lower = file_name.to_ascii_lowercase();
  if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
    "image/jpeg"
  } else if lower.ends_with(".png") {
    "image/png"
  } else if lower.ends_with(".gif") {
    "image/gif"
  } else if lower.ends_with(".pdf") {
    "application/pdf"
  } else {
    "application/octet-stream"
  }
}
