//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - One handler per endpoint
//! - [`middleware`] - Request tracing
//! - [`routes`] - `/api` route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
