//! HTTP facade for LLM-generated social content.
//!
//! Exposes three endpoints: sentiment analysis of a text, Instagram post
//! generation from a topic, and a greeting used as a liveness check. All
//! intelligence lives with the external provider; the handlers validate
//! the request shape, call the matching service, and hand the provider's
//! raw output back unmodified.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::services::post::PostService;
use crate::services::sentiment::SentimentService;

/// Shared server state accessible from all handlers.
///
/// Services are constructed once at startup and hold only the provider
/// handle, so concurrent requests share nothing mutable.
pub struct ServerState {
    pub posts: PostService,
    pub sentiments: SentimentService,
}

/// Builds the application router with all routes attached.
pub fn app(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/sentiment", post(handlers::sentiment::analyze))
        .route("/instagram_post", post(handlers::post::generate))
        .route("/hello/{name}", get(handlers::hello))
        .route("/health", get(handlers::health))
        .with_state(state)
}
