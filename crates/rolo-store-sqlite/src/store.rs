//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rolo_core::{
  Contact, ContactPage, ContactStore, Error, NewContact, Result, Status,
};
use rusqlite::OptionalExtension as _;

use crate::schema::SCHEMA;

const CONTACT_COLUMNS: &str =
  "id, name, title, phone, email, address, status, photo_url";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(storage)
  }
}

// ─── Error mapping ───────────────────────────────────────────────────────────

fn storage(e: tokio_rusqlite::Error) -> Error {
  Error::Storage(Box::new(e))
}

/// Map a write failure, surfacing the `contacts.email` unique-constraint
/// violation as the distinct conflict kind.
fn write_err(e: tokio_rusqlite::Error, email: &str) -> Error {
  if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
    ffi_err,
    Some(msg),
  )) = &e
    && ffi_err.code == rusqlite::ErrorCode::ConstraintViolation
    && msg.contains("contacts.email")
  {
    return Error::DuplicateEmail(email.to_owned());
  }
  storage(e)
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

fn encode_status(status: Status) -> &'static str {
  match status {
    Status::Active => "ACTIVE",
    Status::Inactive => "INACTIVE",
  }
}

fn decode_status(s: &str) -> Result<Status> {
  match s {
    "ACTIVE" => Ok(Status::Active),
    "INACTIVE" => Ok(Status::Inactive),
    other => Err(Error::Storage(
      format!("unknown status value in contacts row: {other:?}").into(),
    )),
  }
}

/// Raw strings read directly from a `contacts` row; converted to a domain
/// [`Contact`] outside the connection closure.
struct RawContact {
  id:        i64,
  name:      String,
  title:     Option<String>,
  phone:     Option<String>,
  email:     String,
  address:   Option<String>,
  status:    String,
  photo_url: Option<String>,
}

impl RawContact {
  fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:        row.get(0)?,
      name:      row.get(1)?,
      title:     row.get(2)?,
      phone:     row.get(3)?,
      email:     row.get(4)?,
      address:   row.get(5)?,
      status:    row.get(6)?,
      photo_url: row.get(7)?,
    })
  }

  fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:        self.id,
      name:      self.name,
      title:     self.title,
      phone:     self.phone,
      email:     self.email,
      address:   self.address,
      status:    decode_status(&self.status)?,
      photo_url: self.photo_url,
    })
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  async fn list_page(&self, page: u32, size: u32) -> Result<ContactPage> {
    let limit = i64::from(size);
    let offset = i64::from(page) * i64::from(size);

    let (raws, total): (Vec<RawContact>, i64) = self
      .conn
      .call(move |conn| {
        let total: i64 =
          conn.query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))?;

        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS} FROM contacts
           ORDER BY name ASC
           LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((rows, total))
      })
      .await
      .map_err(storage)?;

    let content = raws
      .into_iter()
      .map(RawContact::into_contact)
      .collect::<Result<Vec<_>>>()?;

    Ok(ContactPage::new(content, page, size, total as u64))
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
              rusqlite::params![id],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await
      .map_err(storage)?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn insert(&self, contact: NewContact) -> Result<Contact> {
    let status = contact.status.unwrap_or_default();
    // Placeholder id; replaced with the rowid SQLite assigns.
    let inserted = Contact {
      id:        0,
      name:      contact.name,
      title:     contact.title,
      phone:     contact.phone,
      email:     contact.email,
      address:   contact.address,
      status,
      photo_url: None,
    };

    let row = inserted.clone();
    let status_str = encode_status(status).to_owned();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (name, title, phone, email, address, status)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.name, row.title, row.phone, row.email, row.address, status_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, &inserted.email))?;

    Ok(Contact { id, ..inserted })
  }

  async fn update(&self, contact: &Contact) -> Result<Contact> {
    let updated = contact.clone();
    let row = updated.clone();
    let status_str = encode_status(row.status).to_owned();

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts
           SET name = ?1, title = ?2, phone = ?3, email = ?4,
               address = ?5, status = ?6, photo_url = ?7
           WHERE id = ?8",
          rusqlite::params![
            row.name,
            row.title,
            row.phone,
            row.email,
            row.address,
            status_str,
            row.photo_url,
            row.id,
          ],
        )?)
      })
      .await
      .map_err(|e| write_err(e, &updated.email))?;

    if affected == 0 {
      return Err(Error::ContactNotFound(updated.id));
    }
    Ok(updated)
  }

  async fn delete_by_id(&self, id: i64) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await
      .map_err(storage)?;

    if affected == 0 {
      return Err(Error::ContactNotFound(id));
    }
    Ok(())
  }
}
