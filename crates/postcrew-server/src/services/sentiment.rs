//! Sentiment analysis via the external completion capability.

use std::sync::Arc;

use postcrew_core::AgentError;
use postcrew_llm::CompletionClient;

const SENTIMENT_PERSONA: &str = "\
You are a sentiment analyst. Classify the overall sentiment of the text you
receive and answer with the verdict only.";

/// Forwards texts to the sentiment capability and passes verdicts through.
pub struct SentimentService {
    client: Arc<dyn CompletionClient>,
}

impl SentimentService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Returns the provider's verdict for `text`, unmodified.
    pub async fn analyze(&self, text: &str, lang: &str) -> Result<String, AgentError> {
        let instruction = format!("Text ({lang}):\n{text}");
        let response = self.client.complete(SENTIMENT_PERSONA, &instruction).await?;
        Ok(response.content)
    }
}
