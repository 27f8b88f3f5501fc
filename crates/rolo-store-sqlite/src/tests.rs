//! Integration tests for `SqliteStore` against an in-memory database.

use rolo_core::{Contact, ContactStore, Error, NewContact, Status};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_contact(name: &str, email: &str) -> NewContact {
  NewContact {
    name:    name.to_owned(),
    title:   None,
    phone:   None,
    email:   email.to_owned(),
    address: None,
    status:  None,
  }
}

// ─── Insert / find ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_defaults_status() {
  let s = store().await;

  let contact = s
    .insert(new_contact("Ann Lee", "ann@example.com"))
    .await
    .unwrap();

  assert!(contact.id > 0);
  assert_eq!(contact.status, Status::Active);
  assert_eq!(contact.photo_url, None);
}

#[tokio::test]
async fn insert_then_find_round_trips_every_field() {
  let s = store().await;

  let mut input = new_contact("Ann Lee", "ann@example.com");
  input.title = Some("Engineer".into());
  input.phone = Some("+12025550143".into());
  input.address = Some("1 Main St".into());
  input.status = Some(Status::Inactive);

  let inserted = s.insert(input).await.unwrap();
  let fetched = s.find_by_id(inserted.id).await.unwrap().unwrap();

  assert_eq!(fetched, inserted);
}

#[tokio::test]
async fn find_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_fails_with_conflict() {
  let s = store().await;

  s.insert(new_contact("Ann Lee", "ann@example.com"))
    .await
    .unwrap();
  let err = s
    .insert(new_contact("Other Ann", "ann@example.com"))
    .await
    .unwrap_err();

  assert!(matches!(err, Error::DuplicateEmail(email) if email == "ann@example.com"));
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_persists_every_field() {
  let s = store().await;
  let inserted = s
    .insert(new_contact("Ann Lee", "ann@example.com"))
    .await
    .unwrap();

  let updated = Contact {
    title: Some("Manager".into()),
    status: Status::Inactive,
    photo_url: Some("http://localhost:8080/contacts/uploads/photos/a.png".into()),
    ..inserted
  };
  s.update(&updated).await.unwrap();

  let fetched = s.find_by_id(updated.id).await.unwrap().unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_missing_row_fails_with_not_found() {
  let s = store().await;

  let ghost = Contact {
    id:        404,
    name:      "No One".into(),
    title:     None,
    phone:     None,
    email:     "ghost@example.com".into(),
    address:   None,
    status:    Status::Active,
    photo_url: None,
  };
  let err = s.update(&ghost).await.unwrap_err();
  assert!(matches!(err, Error::ContactNotFound(404)));
}

#[tokio::test]
async fn update_to_taken_email_fails_with_conflict() {
  let s = store().await;
  s.insert(new_contact("Ann Lee", "ann@example.com"))
    .await
    .unwrap();
  let bob = s.insert(new_contact("Bob Ray", "bob@example.com")).await.unwrap();

  let stolen = Contact { email: "ann@example.com".into(), ..bob };
  let err = s.update(&stolen).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateEmail(_)));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_find_returns_none() {
  let s = store().await;
  let contact = s
    .insert(new_contact("Ann Lee", "ann@example.com"))
    .await
    .unwrap();

  s.delete_by_id(contact.id).await.unwrap();
  assert!(s.find_by_id(contact.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_fails_with_not_found() {
  let s = store().await;
  let err = s.delete_by_id(123).await.unwrap_err();
  assert!(matches!(err, Error::ContactNotFound(123)));
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() {
  let s = store().await;
  let first = s
    .insert(new_contact("Ann Lee", "ann@example.com"))
    .await
    .unwrap();
  s.delete_by_id(first.id).await.unwrap();

  let second = s
    .insert(new_contact("Bob Ray", "bob@example.com"))
    .await
    .unwrap();
  assert!(second.id > first.id);
}

// ─── Pagination ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_page_sorts_by_name_and_pages() {
  let s = store().await;

  // Seed 15 contacts with names in reverse order of insertion.
  for i in (0..15).rev() {
    s.insert(new_contact(
      &format!("Contact {i:02}"),
      &format!("contact{i:02}@example.com"),
    ))
    .await
    .unwrap();
  }

  let first = s.list_page(0, 10).await.unwrap();
  assert_eq!(first.content.len(), 10);
  assert_eq!(first.total_elements, 15);
  assert_eq!(first.total_pages, 2);
  assert_eq!(first.content[0].name, "Contact 00");
  assert_eq!(first.content[9].name, "Contact 09");

  let second = s.list_page(1, 10).await.unwrap();
  assert_eq!(second.content.len(), 5);
  assert_eq!(second.content[0].name, "Contact 10");
  assert_eq!(second.content[4].name, "Contact 14");
}

#[tokio::test]
async fn list_page_beyond_end_is_empty() {
  let s = store().await;
  s.insert(new_contact("Ann Lee", "ann@example.com"))
    .await
    .unwrap();

  let page = s.list_page(5, 10).await.unwrap();
  assert!(page.content.is_empty());
  assert_eq!(page.total_elements, 1);
}
