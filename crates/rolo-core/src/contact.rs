//! Contact — the sole domain entity.
//!
//! The wire form is camelCase JSON (`photoUrl`) with upper-case status
//! strings, matching what existing clients of the API already send.

use serde::{Deserialize, Serialize};

/// Whether a contact is currently active.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
  #[default]
  Active,
  Inactive,
}

/// A persisted contact row. The `id` is assigned once by the store at
/// creation and never changes; `photo_url` is only ever set by the photo
/// upload flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:        i64,
  pub name:      String,
  pub title:     Option<String>,
  pub phone:     Option<String>,
  pub email:     String,
  pub address:   Option<String>,
  pub status:    Status,
  pub photo_url: Option<String>,
}

/// Creation payload — everything a caller may supply when adding a contact.
/// The id is assigned by the store; a missing status defaults to [`Status::Active`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
  pub name:    String,
  #[serde(default)]
  pub title:   Option<String>,
  #[serde(default)]
  pub phone:   Option<String>,
  pub email:   String,
  #[serde(default)]
  pub address: Option<String>,
  #[serde(default)]
  pub status:  Option<Status>,
}

/// Field-merge update payload.
///
/// Fields that are absent (or JSON `null`) leave the existing value
/// untouched. A consequence carried over from the original API: a field can
/// never be cleared back to empty through update, because "absent" and
/// "explicitly null" are indistinguishable here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactUpdate {
  pub name:    Option<String>,
  pub title:   Option<String>,
  pub phone:   Option<String>,
  pub email:   Option<String>,
  pub address: Option<String>,
  pub status:  Option<Status>,
}

impl ContactUpdate {
  /// Overwrite each field of `existing` for which `self` carries a value.
  pub fn apply_to(self, existing: &mut Contact) {
    if let Some(name) = self.name {
      existing.name = name;
    }
    if let Some(title) = self.title {
      existing.title = Some(title);
    }
    if let Some(phone) = self.phone {
      existing.phone = Some(phone);
    }
    if let Some(email) = self.email {
      existing.email = email;
    }
    if let Some(address) = self.address {
      existing.address = Some(address);
    }
    if let Some(status) = self.status {
      existing.status = status;
    }
  }

  /// `true` if the payload carries no fields at all.
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.title.is_none()
      && self.phone.is_none()
      && self.email.is_none()
      && self.address.is_none()
      && self.status.is_none()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Contact {
    Contact {
      id:        1,
      name:      "Ann Lee".into(),
      title:     Some("Engineer".into()),
      phone:     Some("+12025550143".into()),
      email:     "ann@example.com".into(),
      address:   None,
      status:    Status::Active,
      photo_url: None,
    }
  }

  #[test]
  fn apply_to_overwrites_only_present_fields() {
    let mut contact = sample();
    let updates = ContactUpdate {
      name: Some("Ann B. Lee".into()),
      ..Default::default()
    };

    updates.apply_to(&mut contact);

    assert_eq!(contact.name, "Ann B. Lee");
    assert_eq!(contact.title.as_deref(), Some("Engineer"));
    assert_eq!(contact.email, "ann@example.com");
    assert_eq!(contact.status, Status::Active);
  }

  #[test]
  fn apply_to_is_idempotent() {
    let mut once = sample();
    let mut twice = sample();
    let updates = ContactUpdate {
      title:  Some("Manager".into()),
      status: Some(Status::Inactive),
      ..Default::default()
    };

    updates.clone().apply_to(&mut once);
    updates.clone().apply_to(&mut twice);
    updates.apply_to(&mut twice);

    assert_eq!(once, twice);
  }

  #[test]
  fn empty_update_changes_nothing() {
    let mut contact = sample();
    let updates = ContactUpdate::default();
    assert!(updates.is_empty());

    updates.apply_to(&mut contact);
    assert_eq!(contact, sample());
  }

  #[test]
  fn status_serialises_upper_case() {
    let json = serde_json::to_string(&Status::Inactive).unwrap();
    assert_eq!(json, "\"INACTIVE\"");
  }

  #[test]
  fn contact_serialises_camel_case() {
    let mut contact = sample();
    contact.photo_url = Some("http://localhost/p.png".into());
    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["photoUrl"], "http://localhost/p.png");
    assert_eq!(json["status"], "ACTIVE");
  }
}
