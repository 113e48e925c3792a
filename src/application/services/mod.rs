//! Business logic services for the application layer.

pub mod link_service;

pub use link_service::{
    INVALID_EXPIRES_IN_MESSAGE, LIST_LIMIT, LinkService, MAX_EXPIRES_IN_SECONDS,
    is_valid_expires_in,
};
