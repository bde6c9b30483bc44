//! HTTP route handlers for the content server.

pub mod post;
pub mod sentiment;

use axum::extract::Path;
use axum::Json;

use crate::dto::HelloResponse;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Greeting endpoint. Pure and side-effect-free; useful as a sanity check.
pub async fn hello(Path(name): Path<String>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: format!("Hello {}", name),
    })
}
