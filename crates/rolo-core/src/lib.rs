//! Core types and trait definitions for the Rolo contact API.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing heavier than serde.

pub mod contact;
pub mod error;
pub mod store;
pub mod validate;

pub use contact::{Contact, ContactUpdate, NewContact, Status};
pub use error::{Error, Result};
pub use store::{ContactPage, ContactStore};
