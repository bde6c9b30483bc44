//! Core types shared across the postcrew workspace.
//!
//! This crate provides the fundamental types the other crates build on:
//!
//! - [`AgentError`] — Error type for provider and crew operations
//! - [`ModelConfig`] — LLM provider configuration
//! - [`LlmResponse`] and [`LlmMetrics`] — Completion results
//!
//! # Example
//!
//! ```rust
//! use postcrew_core::ModelConfig;
//!
//! let model = ModelConfig {
//!     model: "gemini-2.0-flash".to_string(),
//!     api_key: "secret".to_string(),
//!     api_base: None,
//! };
//! assert_eq!(model.model, "gemini-2.0-flash");
//! ```

use std::fmt;

use thiserror::Error;

/// Errors that can occur while delegating work to the LLM provider.
#[derive(Error, Debug)]
pub enum AgentError {
    /// LLM API request failed (network, authentication, quota, or a
    /// provider-side error response).
    #[error("LLM request failed: {0}")]
    LlmError(String),

    /// The provider answered successfully but produced no content.
    #[error("LLM provider returned no content")]
    EmptyContent,

    /// A crew was kicked off without the pieces it needs to run.
    #[error("invalid crew: {0}")]
    InvalidCrew(String),
}

/// Configuration for the LLM provider.
///
/// Holds the model identifier and the credential handle. Populated from
/// the environment at process start and shared by value; never mutated
/// afterwards.
#[derive(Clone)]
pub struct ModelConfig {
    /// The provider model identifier (e.g., "gemini-2.0-flash").
    pub model: String,
    /// API key for the provider.
    pub api_key: String,
    /// Optional API base URL for alternative endpoints.
    pub api_base: Option<String>,
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Token usage and timing metrics from an LLM call.
#[derive(Debug, Clone, Default)]
pub struct LlmMetrics {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

/// Complete response from an LLM call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub metrics: LlmMetrics,
}
