//! Field-level validation for contact payloads.
//!
//! Every constraint the API enforces lives here, in one place, so the
//! service layer can validate a creation payload and a merged update row
//! with the same rules. Each violation surfaces as
//! [`Error::Validation`](crate::Error::Validation) carrying a
//! caller-facing message.

use crate::{Contact, Error, NewContact, Result};

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 50;
const PHONE_DIGITS_MIN: usize = 10;
const PHONE_DIGITS_MAX: usize = 15;
const TEXT_MAX: usize = 255;

/// Validate a creation payload.
pub fn validate_new(contact: &NewContact) -> Result<()> {
  check_name(&contact.name)?;
  check_title(contact.title.as_deref())?;
  check_phone(contact.phone.as_deref())?;
  check_email(&contact.email)?;
  check_address(contact.address.as_deref())?;
  Ok(())
}

/// Validate a full contact row, e.g. after a field-merge update.
pub fn validate_contact(contact: &Contact) -> Result<()> {
  check_name(&contact.name)?;
  check_title(contact.title.as_deref())?;
  check_phone(contact.phone.as_deref())?;
  check_email(&contact.email)?;
  check_address(contact.address.as_deref())?;
  check_photo_url(contact.photo_url.as_deref())?;
  Ok(())
}

fn invalid(message: &str) -> Error {
  Error::Validation(message.to_owned())
}

fn check_name(name: &str) -> Result<()> {
  if name.trim().is_empty() {
    return Err(invalid("Name cannot be blank"));
  }
  let len = name.chars().count();
  if !(NAME_MIN..=NAME_MAX).contains(&len) {
    return Err(invalid("Name must be between 3 and 50 characters"));
  }
  Ok(())
}

fn check_title(title: Option<&str>) -> Result<()> {
  if let Some(title) = title {
    let len = title.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&len) {
      return Err(invalid("Title must be between 3 and 50 characters"));
    }
  }
  Ok(())
}

/// An empty phone string is allowed; a non-empty one must match
/// `+?[0-9]{10,15}`.
fn check_phone(phone: Option<&str>) -> Result<()> {
  let Some(phone) = phone else { return Ok(()) };
  if phone.is_empty() {
    return Ok(());
  }

  let digits = phone.strip_prefix('+').unwrap_or(phone);
  let digit_count = digits.chars().count();
  if !(PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digit_count)
    || !digits.chars().all(|c| c.is_ascii_digit())
  {
    return Err(invalid(
      "Phone number must be between 10 and 15 digits and can optionally start with a '+'",
    ));
  }
  Ok(())
}

fn check_email(email: &str) -> Result<()> {
  if email.trim().is_empty() {
    return Err(invalid("Email cannot be blank"));
  }
  if email.chars().count() > TEXT_MAX {
    return Err(invalid("Email must be at most 255 characters"));
  }

  // Lenient syntax check: one '@' with non-empty local part and domain,
  // no whitespace anywhere.
  let mut parts = email.split('@');
  let valid = matches!(
    (parts.next(), parts.next(), parts.next()),
    (Some(local), Some(domain), None)
      if !local.is_empty() && !domain.is_empty()
  ) && !email.chars().any(char::is_whitespace);
  if !valid {
    return Err(invalid("Email should be valid"));
  }
  Ok(())
}

fn check_address(address: Option<&str>) -> Result<()> {
  if let Some(address) = address
    && address.chars().count() > TEXT_MAX
  {
    return Err(invalid("Address must be at most 255 characters"));
  }
  Ok(())
}

fn check_photo_url(photo_url: Option<&str>) -> Result<()> {
  if let Some(photo_url) = photo_url
    && photo_url.chars().count() > TEXT_MAX
  {
    return Err(invalid("Photo URL must be at most 255 characters"));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Status;

  fn new_contact(name: &str, email: &str) -> NewContact {
    NewContact {
      name:    name.to_owned(),
      title:   None,
      phone:   None,
      email:   email.to_owned(),
      address: None,
      status:  Some(Status::Active),
    }
  }

  #[test]
  fn accepts_minimal_valid_payload() {
    let contact = new_contact("Ann Lee", "ann@example.com");
    assert!(validate_new(&contact).is_ok());
  }

  #[test]
  fn rejects_blank_name() {
    let contact = new_contact("   ", "ann@example.com");
    assert!(validate_new(&contact).is_err());
  }

  #[test]
  fn rejects_short_and_long_names() {
    assert!(validate_new(&new_contact("Al", "a@b.com")).is_err());
    assert!(validate_new(&new_contact(&"x".repeat(51), "a@b.com")).is_err());
    assert!(validate_new(&new_contact(&"x".repeat(50), "a@b.com")).is_ok());
  }

  #[test]
  fn rejects_short_title() {
    let mut contact = new_contact("Ann Lee", "ann@example.com");
    contact.title = Some("Dr".into());
    assert!(validate_new(&contact).is_err());
    contact.title = Some("Doctor".into());
    assert!(validate_new(&contact).is_ok());
  }

  #[test]
  fn phone_rules() {
    let mut contact = new_contact("Ann Lee", "ann@example.com");

    // Empty and absent are both fine.
    assert!(validate_new(&contact).is_ok());
    contact.phone = Some(String::new());
    assert!(validate_new(&contact).is_ok());

    contact.phone = Some("+12025550143".into());
    assert!(validate_new(&contact).is_ok());
    contact.phone = Some("2025550143".into());
    assert!(validate_new(&contact).is_ok());

    // Too short, too long, non-digit.
    contact.phone = Some("12345".into());
    assert!(validate_new(&contact).is_err());
    contact.phone = Some("1234567890123456".into());
    assert!(validate_new(&contact).is_err());
    contact.phone = Some("+1202555O143".into());
    assert!(validate_new(&contact).is_err());
  }

  #[test]
  fn email_rules() {
    assert!(validate_new(&new_contact("Ann Lee", "")).is_err());
    assert!(validate_new(&new_contact("Ann Lee", "not-an-email")).is_err());
    assert!(validate_new(&new_contact("Ann Lee", "a@@b.com")).is_err());
    assert!(validate_new(&new_contact("Ann Lee", "a b@c.com")).is_err());
    assert!(validate_new(&new_contact("Ann Lee", "@example.com")).is_err());
    assert!(validate_new(&new_contact("Ann Lee", "ann@")).is_err());

    let long = format!("{}@example.com", "x".repeat(250));
    assert!(validate_new(&new_contact("Ann Lee", &long)).is_err());
  }

  #[test]
  fn rejects_overlong_address() {
    let mut contact = new_contact("Ann Lee", "ann@example.com");
    contact.address = Some("x".repeat(256));
    assert!(validate_new(&contact).is_err());
    contact.address = Some("x".repeat(255));
    assert!(validate_new(&contact).is_ok());
  }

  #[test]
  fn validates_merged_contact_row() {
    let contact = Contact {
      id:        7,
      name:      "Ann Lee".into(),
      title:     None,
      phone:     None,
      email:     "ann@example.com".into(),
      address:   None,
      status:    Status::Inactive,
      photo_url: Some("http://localhost:8080/contacts/uploads/photos/a.png".into()),
    };
    assert!(validate_contact(&contact).is_ok());
  }
}
