//! Instagram post generation endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::PostRequest;
use crate::error::AppError;
use crate::ServerState;

/// Generates Instagram post content for a topic.
///
/// The raw pipeline output is returned as the response body. It is
/// nominally a JSON blob with `description` and `image_prompt` fields,
/// but nothing here validates that.
pub async fn generate(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<PostRequest>,
) -> Result<String, AppError> {
    if req.topic.trim().is_empty() {
        return Err(AppError::BadRequest("topic must not be empty".into()));
    }

    info!("post request (topic: {}, lang: {})", req.topic, req.lang);
    let raw = state.posts.generate_post(&req.topic, &req.lang).await?;
    Ok(raw)
}
