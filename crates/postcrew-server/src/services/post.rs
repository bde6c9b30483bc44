//! Instagram post generation via a single-agent, single-task crew.

use std::sync::Arc;

use postcrew_agent::{Agent, Crew, Task};
use postcrew_core::AgentError;
use postcrew_llm::CompletionClient;

const AGENT_ROLE: &str = "Instagram Content Creator";

const AGENT_GOAL: &str =
    "Generate Instagram post content: a short description and a concise, realistic image prompt.";

const AGENT_BACKSTORY: &str = "\
The agent creates Instagram content. The description should be short, current, and engaging.
The image prompt should be concise, realistic, and easy for AI image generators like Stable Diffusion to create.
The image prompt must not exceed 10 words and must be written in english.";

const EXPECTED_OUTPUT: &str = r#"{
    "description": "A cozy morning coffee moment at home, perfect to start the day.",
    "image_prompt": "person drinking coffee at a table, morning light"
}"#;

/// Generates post content by delegating to the agent pipeline.
pub struct PostService {
    client: Arc<dyn CompletionClient>,
}

impl PostService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Builds a one-agent, one-task crew for `topic` and runs it.
    ///
    /// The output is whatever the provider produced; nothing parses it
    /// or checks that the ten-word and english-language constraints were
    /// honored.
    pub async fn generate_post(&self, topic: &str, lang: &str) -> Result<String, AgentError> {
        let agent = Agent::new(AGENT_ROLE, AGENT_GOAL).backstory(AGENT_BACKSTORY);

        let description = format!(
            "Create Instagram content for the topic: \"{topic}\".\n\
             1. Write a short, engaging description (1-2 sentences) that is relevant to current events or everyday life.\n\
             2. Generate a short, realistic image prompt (max 10 words) that an AI model like runwayml/stable-diffusion-v1-5 can generate accurately.\n\
             \n\
             IMPORTANT:\n\
             - description: Write in {lang}.\n\
             - image_prompt: Write in english.\n\
             - Output must be in JSON format like this:\n\
             \n\
             {{\n\
                 \"description\": \"Short Instagram description\",\n\
                 \"image_prompt\": \"Short realistic prompt for AI image generation\"\n\
             }}"
        );
        let task = Task::new(description).expected_output(EXPECTED_OUTPUT);

        let crew = Crew::new().agent(agent).task(task);
        let output = crew.kickoff(self.client.as_ref()).await?;

        Ok(output.raw)
    }
}
