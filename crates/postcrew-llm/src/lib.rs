//! LLM provider access for postcrew.
//!
//! Everything the service needs from a provider fits one seam:
//! [`CompletionClient::complete`] takes a persona and an instruction and
//! returns raw text. Two implementations ship here:
//!
//! - [`GeminiClient`] — Google Gemini REST API
//! - [`ScriptedClient`] — canned replies for tests
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use postcrew_core::ModelConfig;
//! use postcrew_llm::{CompletionClient, GeminiClient};
//!
//! let client = GeminiClient::new(config);
//! let response = client.complete("You are helpful.", "Hello!").await?;
//! println!("{}", response.content);
//! ```

mod gemini;
mod scripted;

pub use gemini::GeminiClient;
pub use scripted::ScriptedClient;

use async_trait::async_trait;
use postcrew_core::{AgentError, LlmResponse};

/// A text-completion capability: persona plus instruction in, raw text out.
///
/// `persona` becomes the provider's system instruction; `instruction` is the
/// single user message. Implementations make exactly one provider call and
/// never retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, persona: &str, instruction: &str) -> Result<LlmResponse, AgentError>;
}
