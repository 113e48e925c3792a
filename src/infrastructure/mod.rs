//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the storage contracts: the relational store in
//! [`persistence`] and the key-value cache in [`cache`].

pub mod cache;
pub mod persistence;
