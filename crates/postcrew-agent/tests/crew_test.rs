use postcrew_agent::{Agent, Crew, Task};
use postcrew_core::AgentError;
use postcrew_llm::ScriptedClient;

fn scripted(replies: &[&str]) -> ScriptedClient {
    ScriptedClient::new(replies.iter().map(|r| r.to_string()).collect())
}

#[tokio::test]
async fn kickoff_returns_raw_output() {
    let client = scripted(&[r#"{"description": "x", "image_prompt": "y"}"#]);
    let crew = Crew::new()
        .agent(Agent::new("Writer", "Write things."))
        .task(Task::new("Write about coffee."));

    let output = crew.kickoff(&client).await.unwrap();
    assert_eq!(output.raw, r#"{"description": "x", "image_prompt": "y"}"#);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn kickoff_composes_persona_and_instruction() {
    let client = scripted(&["ok"]);
    let crew = Crew::new()
        .agent(
            Agent::new("Instagram Content Creator", "Generate post content.")
                .backstory("Keep image prompts short."),
        )
        .task(Task::new(r#"Create content for the topic: "coffee"."#).expected_output("{...}"));

    crew.kickoff(&client).await.unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    let (persona, instruction) = &requests[0];
    assert!(persona.contains("You are Instagram Content Creator"));
    assert!(persona.contains("Generate post content."));
    assert!(persona.contains("Keep image prompts short."));
    assert!(instruction.contains(r#""coffee""#));
    assert!(instruction.contains("Expected output:"));
}

#[tokio::test]
async fn task_without_expected_output_sends_description_only() {
    let client = scripted(&["ok"]);
    let crew = Crew::new()
        .agent(Agent::new("Writer", "Write."))
        .task(Task::new("Just the description."));

    crew.kickoff(&client).await.unwrap();

    let (_, instruction) = client.requests().remove(0);
    assert_eq!(instruction, "Just the description.");
}

#[tokio::test]
async fn extra_tasks_fall_back_to_the_first_agent() {
    let client = scripted(&["first", "second"]);
    let crew = Crew::new()
        .agent(Agent::new("Solo", "Do everything."))
        .task(Task::new("one"))
        .task(Task::new("two"));

    let output = crew.kickoff(&client).await.unwrap();
    assert_eq!(output.raw, "second");
    assert_eq!(client.calls(), 2);

    for (persona, _) in client.requests() {
        assert!(persona.contains("Solo"));
    }
}

#[tokio::test]
async fn empty_crew_is_rejected_without_calling_the_provider() {
    let client = scripted(&[]);

    let err = Crew::new().kickoff(&client).await.unwrap_err();
    assert!(matches!(err, AgentError::InvalidCrew(_)));

    let err = Crew::new()
        .agent(Agent::new("Idle", "Nothing to do."))
        .kickoff(&client)
        .await
        .unwrap_err();
    assert!(matches!(err, AgentError::InvalidCrew(_)));

    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn provider_failure_propagates() {
    let client = scripted(&[]);
    let crew = Crew::new()
        .agent(Agent::new("Writer", "Write."))
        .task(Task::new("doomed"));

    let err = crew.kickoff(&client).await.unwrap_err();
    assert!(matches!(err, AgentError::LlmError(_)));
}
