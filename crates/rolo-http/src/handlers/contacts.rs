//! Handlers for the `/contacts` CRUD endpoints.
//!
//! | Method   | Path             | Success |
//! |----------|------------------|---------|
//! | `GET`    | `/contacts`      | 200 + page body |
//! | `POST`   | `/contacts`      | 201 + `Location` header |
//! | `GET`    | `/contacts/{id}` | 200 + contact |
//! | `PUT`    | `/contacts/{id}` | 200 + contact |
//! | `DELETE` | `/contacts/{id}` | 204 |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::{StatusCode, header},
  response::IntoResponse,
};
use rolo_core::{Contact, ContactPage, ContactStore, ContactUpdate, NewContact};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Page parameters; both default when unspecified. No upper bound on `size`
/// is enforced, matching the original API.
#[derive(Debug, Deserialize)]
pub struct PageParams {
  pub page: Option<u32>,
  pub size: Option<u32>,
}

/// `GET /contacts?page=&size=`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<PageParams>,
) -> Result<Json<ContactPage>, ApiError>
where
  S: ContactStore,
{
  let page = params.page.unwrap_or(0);
  let size = params.size.unwrap_or(10);
  let contacts = state.service.get_all_contacts(page, size).await?;
  Ok(Json(contacts))
}

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(state.service.get_contact_by_id(id).await?))
}

/// `POST /contacts`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(contact): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let contact = state.service.add_contact(contact).await?;
  let location = format!("/contacts/{}", contact.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location)],
    Json(contact),
  ))
}

/// `PUT /contacts/{id}`
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Json(updates): Json<ContactUpdate>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(state.service.update_contact(id, updates).await?))
}

/// `DELETE /contacts/{id}`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
{
  state.service.delete_contact(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
