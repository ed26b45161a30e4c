//! Shared test doubles: a scripted agent client and a scripted toy domain.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use sofai::domain::models::{Conversation, DeliberateMetadata, FeedbackSignal, MemoryEntry};
use sofai::domain::ports::{AgentClient, AgentError, ProblemDomain, Verdict};
use sofai::SolverResult;

/// Agent client that replays a fixed queue of responses.
///
/// When the queue runs dry the last default response repeats, so tests only
/// script the turns they care about.
pub struct ScriptedAgent {
    model: String,
    responses: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
    prompts_seen: Mutex<Vec<String>>,
}

impl ScriptedAgent {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            responses: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            prompts_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: &str) {
        self.responses.lock().unwrap().push_back(response.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// First-turn prompts of every conversation this agent received.
    pub fn prompts_seen(&self) -> Vec<String> {
        self.prompts_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentClient for ScriptedAgent {
    fn model(&self) -> &str {
        &self.model
    }

    async fn respond(&self, conversation: &Conversation) -> Result<String, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(first) = conversation.turns().first() {
            self.prompts_seen.lock().unwrap().push(first.content.clone());
        }
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "scripted response".to_string());
        Ok(response)
    }
}

/// Agent client whose transport always fails.
pub struct FailingAgent;

#[async_trait]
impl AgentClient for FailingAgent {
    fn model(&self) -> &str {
        "failing"
    }

    async fn respond(&self, _conversation: &Conversation) -> Result<String, AgentError> {
        Err(AgentError::Unreachable("connection refused".to_string()))
    }
}

/// One scripted validation round for the toy domain.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    Valid,
    Invalid(FeedbackSignal),
}

/// Minimal domain whose validator replays a script.
///
/// Once the script is exhausted every further candidate is rejected with the
/// fallback signal, so tests only spell out the rounds they care about.
pub struct ToyDomain {
    script: Mutex<VecDeque<ScriptStep>>,
    fallback: FeedbackSignal,
    deliberate_calls: AtomicUsize,
}

impl ToyDomain {
    pub fn new(script: Vec<ScriptStep>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: FeedbackSignal::Violations(1),
            deliberate_calls: AtomicUsize::new(0),
        }
    }

    /// A domain that rejects every candidate with the given signal.
    pub fn always_invalid(signal: FeedbackSignal) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: signal,
            deliberate_calls: AtomicUsize::new(0),
        }
    }

    pub fn deliberate_calls(&self) -> usize {
        self.deliberate_calls.load(Ordering::SeqCst)
    }

    fn next_step(&self) -> ScriptStep {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ScriptStep::Invalid(self.fallback.clone()))
    }
}

#[async_trait]
impl ProblemDomain for ToyDomain {
    type Problem = String;
    type Solution = String;
    type Feedback = FeedbackSignal;
    type GenerateParams = ();

    fn name(&self) -> &'static str {
        "toy"
    }

    fn generate_problem(&self, _params: &()) -> SolverResult<String> {
        Ok("toy problem".to_string())
    }

    fn build_prompt(&self, problem: &String, examples: &[MemoryEntry]) -> String {
        if examples.is_empty() {
            format!("solve: {problem}")
        } else {
            format!("examples[{}] solve: {problem}", examples.len())
        }
    }

    fn parse_solution(&self, response: &str) -> String {
        response.to_string()
    }

    async fn validate_solution(&self, _problem: &String, _solution: &String) -> Verdict<FeedbackSignal> {
        match self.next_step() {
            ScriptStep::Valid => Verdict::Valid,
            ScriptStep::Invalid(signal) => Verdict::Invalid(signal),
        }
    }

    async fn run_deliberate_solver(
        &self,
        problem: &String,
        client: &dyn AgentClient,
    ) -> Result<(String, DeliberateMetadata), AgentError> {
        self.deliberate_calls.fetch_add(1, Ordering::SeqCst);
        let response = client
            .respond(&Conversation::with_prompt(format!("deliberate: {problem}")))
            .await?;
        Ok((
            response,
            DeliberateMetadata {
                solver: "toy_s2".to_string(),
                raw_response: None,
            },
        ))
    }

    fn problem_representation(&self, problem: &String) -> String {
        problem.clone()
    }

    fn solution_representation(&self, solution: &String) -> String {
        solution.clone()
    }

    fn render_feedback(&self, feedback: &FeedbackSignal) -> String {
        match feedback {
            FeedbackSignal::Violations(count) => format!("{count} violations"),
            FeedbackSignal::Text(text) => text.clone(),
        }
    }

    fn feedback_signal(&self, feedback: &FeedbackSignal) -> FeedbackSignal {
        feedback.clone()
    }
}
