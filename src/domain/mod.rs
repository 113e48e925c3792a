//! Domain layer: the URL record and the storage contracts around it.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Relational store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP, Postgres or Redis.

pub mod entities;
pub mod repositories;
