//! Minimal HTTP targets for exercising orchestrator failure recovery.
//!
//! Two binaries share this library:
//!
//! - `liveness-app` ([`Variant::Liveness`]) serves `GET /hello` and `GET /health`.
//! - `crashloop-app` ([`Variant::Crashloop`]) serves `GET /hello` only.
//!
//! Both bind `0.0.0.0:8000`. Startup is deterministic: either the socket binds
//! and the routes answer with fixed bodies, or the process exits non-zero with
//! the bind error on stderr.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;

pub use config::Variant;
pub use error::ServerError;
