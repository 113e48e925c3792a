//! DTO for the health endpoint.

use serde::Serialize;

/// Static liveness payload. Store connectivity is not probed.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
