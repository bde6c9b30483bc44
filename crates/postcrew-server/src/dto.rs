//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};

fn default_lang() -> String {
    "pt-br".to_string()
}

/// Body of `POST /sentiment`.
#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

/// Body of `POST /instagram_post`.
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub topic: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

/// Response of `GET /hello/{name}`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
}
