//! Canned-reply completion client for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use postcrew_core::{AgentError, LlmMetrics, LlmResponse};

use crate::CompletionClient;

/// A scripted client for tests. Replays pre-defined replies in order and
/// records every request it receives.
pub struct ScriptedClient {
    replies: Vec<String>,
    index: AtomicUsize,
    requests: Mutex<Vec<(String, String)>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// The `(persona, instruction)` pairs received so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, persona: &str, instruction: &str) -> Result<LlmResponse, AgentError> {
        self.requests
            .lock()
            .unwrap()
            .push((persona.to_string(), instruction.to_string()));

        let i = self.index.fetch_add(1, Ordering::SeqCst);
        let content = self.replies.get(i).cloned().ok_or_else(|| {
            AgentError::LlmError(format!("scripted client: no more replies (called {} times)", i + 1))
        })?;

        Ok(LlmResponse {
            content,
            metrics: LlmMetrics::default(),
        })
    }
}
