//! Relational store implementations.
//!
//! - [`PgUrlRepository`] - PostgreSQL via SQLx
//! - [`MemoryUrlRepository`] - In-memory fake with the same uniqueness rules

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
