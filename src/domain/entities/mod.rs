//! Core domain entities.
//!
//! Follows the "new type" split used across the crate: [`UrlRecord`] is what
//! the store returns, [`NewUrlRecord`] is what the service hands it to insert.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
