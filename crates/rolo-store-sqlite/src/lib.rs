//! SQLite backend for the Rolo contact store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod schema;
mod store;

pub use store::SqliteStore;

#[cfg(test)]
mod tests;
