//! Identification endpoint served by both variants.

use axum::extract::State;

use crate::config::Variant;

/// `GET /hello`: the variant's fixed identification string.
///
/// Query parameters and headers are ignored.
pub async fn hello(State(variant): State<Variant>) -> &'static str {
    variant.hello_message()
}
