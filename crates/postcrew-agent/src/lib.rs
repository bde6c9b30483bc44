//! Agent, task, and crew descriptors for LLM delegation.
//!
//! The crew abstraction here is deliberately thin. An [`Agent`] is a
//! persona, a [`Task`] is an instruction with an example of the desired
//! output shape, and [`Crew::kickoff`] turns each task into exactly one
//! [`CompletionClient::complete`] call. Nothing is scheduled or retried,
//! and the raw provider text is handed back untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use postcrew_agent::{Agent, Crew, Task};
//!
//! let crew = Crew::new()
//!     .agent(Agent::new("Writer", "Write short copy.").backstory("Keep it punchy."))
//!     .task(Task::new("Write a tagline for a coffee shop."));
//!
//! let output = crew.kickoff(&client).await?;
//! println!("{}", output.raw);
//! ```

use postcrew_core::AgentError;
use postcrew_llm::CompletionClient;
use tracing::info;

/// A configured persona presented to the LLM as a role-play instruction.
#[derive(Debug, Clone)]
pub struct Agent {
    role: String,
    goal: String,
    backstory: String,
}

impl Agent {
    /// Creates an agent with a role and a goal.
    pub fn new(role: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: String::new(),
        }
    }

    /// Sets the behavioral instructions for this agent.
    pub fn backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    /// Composes the system persona handed to the provider.
    pub fn persona(&self) -> String {
        let mut persona = format!("You are {}. Your goal: {}", self.role, self.goal);
        if !self.backstory.is_empty() {
            persona.push('\n');
            persona.push_str(&self.backstory);
        }
        persona
    }
}

/// A natural-language instruction plus an example of the desired output shape.
#[derive(Debug, Clone)]
pub struct Task {
    description: String,
    expected_output: Option<String>,
}

impl Task {
    /// Creates a task from its instruction text.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            expected_output: None,
        }
    }

    /// Sets an example of the output shape the task should produce.
    pub fn expected_output(mut self, example: impl Into<String>) -> Self {
        self.expected_output = Some(example.into());
        self
    }

    /// Composes the instruction sent to the provider.
    pub fn instruction(&self) -> String {
        match &self.expected_output {
            Some(example) => format!("{}\n\nExpected output:\n{}", self.description, example),
            None => self.description.clone(),
        }
    }
}

/// Raw result of a crew run.
#[derive(Debug, Clone)]
pub struct CrewOutput {
    /// Text produced by the final task, exactly as the provider returned it.
    pub raw: String,
}

/// Runs agents against tasks and returns the raw result.
///
/// Tasks execute in order. Task `i` runs under agent `i`; when there are
/// fewer agents than tasks the first agent takes the remainder.
#[derive(Debug, Default)]
pub struct Crew {
    agents: Vec<Agent>,
    tasks: Vec<Task>,
}

impl Crew {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an agent to the crew.
    pub fn agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    /// Adds a task to the crew.
    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Executes every task and returns the final task's raw output.
    ///
    /// Each execution is a single completion call; any provider failure
    /// aborts the run and propagates unchanged.
    pub async fn kickoff(&self, client: &dyn CompletionClient) -> Result<CrewOutput, AgentError> {
        if self.agents.is_empty() {
            return Err(AgentError::InvalidCrew("crew has no agents".into()));
        }
        if self.tasks.is_empty() {
            return Err(AgentError::InvalidCrew("crew has no tasks".into()));
        }

        let mut raw = String::new();
        for (i, task) in self.tasks.iter().enumerate() {
            let agent = self.agents.get(i).unwrap_or(&self.agents[0]);
            info!("crew: task {}/{} ({})", i + 1, self.tasks.len(), agent.role);

            let response = client.complete(&agent.persona(), &task.instruction()).await?;
            info!("crew: task {} done, {} chars", i + 1, response.content.len());
            raw = response.content;
        }

        Ok(CrewOutput { raw })
    }
}
