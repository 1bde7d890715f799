//! HTTP surface probed by orchestration tooling.
//!
//! | Route | Variant | Body |
//! |---|---|---|
//! | `GET /hello` | both | [`Variant::hello_message`] |
//! | `GET /health` | liveness only | [`crate::config::HEALTHY`] |
//!
//! Anything else (unknown paths, other methods) gets axum's default 404/405.

use axum::{routing::get, Router};

use crate::config::Variant;

pub mod health;
pub mod hello;

/// Build the router for one variant. Request tracing is layered on in
/// [`crate::server::app`].
pub fn router(variant: Variant) -> Router {
    let mut router = Router::new().route("/hello", get(hello::hello));

    if variant.serves_health() {
        router = router.route("/health", get(health::health));
    }

    router.with_state(variant)
}
