//! Application layer services implementing business logic.
//!
//! Services consume the repository and cache traits and give HTTP handlers a
//! single entry point per operation.
//!
//! - [`services::link_service::LinkService`] - Cache-aside access to short links

pub mod services;
