//! Sentiment analysis endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::SentimentRequest;
use crate::error::AppError;
use crate::ServerState;

/// Analyzes the sentiment of a text.
///
/// The provider's verdict is returned as the response body, unmodified.
pub async fn analyze(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<SentimentRequest>,
) -> Result<String, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest("text must not be empty".into()));
    }

    info!("sentiment request ({} chars, lang: {})", req.text.len(), req.lang);
    let verdict = state.sentiments.analyze(&req.text, &req.lang).await?;
    Ok(verdict)
}
