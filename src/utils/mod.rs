//! Helpers shared across layers.
//!
//! - [`validation`] - Syntactic checks for destination URLs and short codes
//! - [`code_generator`] - Random short code generation
//! - [`db_error`] - Classification of database errors

pub mod code_generator;
pub mod db_error;
pub mod validation;
