//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are validated with `validator` before any store access.

pub mod health;
pub mod shorten;
pub mod stats;
pub mod urls;
