//! Liveness probe endpoint (liveness variant only).

use crate::config::HEALTHY;

/// `GET /health`: always 200 with a fixed plain-text body.
///
/// No dependencies and never blocks, so a failing probe means the process
/// itself is wedged or gone.
pub async fn health() -> &'static str {
    HEALTHY
}
