//! Problem Domain Port
//!
//! The capability contract a problem family must satisfy to plug into the
//! metacognitive controller: generate a problem, build prompts (optionally
//! seeded with remembered examples), parse agent responses, validate
//! candidates, run an escalated deliberate solver, and render everything as
//! text. Selection between families is an explicit tagged choice at startup.

use async_trait::async_trait;

use crate::domain::errors::SolverResult;
use crate::domain::models::{DeliberateMetadata, FeedbackSignal, MemoryEntry};
use crate::domain::ports::{AgentClient, AgentError};

/// Result of validating one candidate solution.
#[derive(Debug, Clone)]
pub enum Verdict<F> {
    /// The candidate satisfies the problem's constraints.
    Valid,
    /// The candidate failed; feedback describes why.
    Invalid(F),
}

impl<F> Verdict<F> {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Capability contract for a problem family.
///
/// Contract notes the controller relies on:
///
/// - `parse_solution` must return a sentinel value (empty assignment, empty
///   string) when no solution can be extracted, never an error. The domain's
///   validator then reports it as invalid with "no solution found" feedback,
///   keeping parse faults inside the refinement loop.
/// - `validate_solution` must map collaborator outages (an unreachable judge,
///   rate limiting) to `Verdict::Invalid` with diagnostic feedback rather
///   than failing, so the loop can continue or escalate.
/// - `run_deliberate_solver` receives only the problem and an agent client —
///   no seeded examples; the deliberate tier reasons from scratch.
#[async_trait]
pub trait ProblemDomain: Send + Sync {
    /// Problem instance in family-specific form.
    type Problem: Send + Sync;
    /// Candidate solution in family-specific form.
    type Solution: Clone + Send + Sync;
    /// Opaque validation feedback.
    type Feedback: Send + Sync;
    /// Parameters for problem generation.
    type GenerateParams: Send + Sync;

    /// Short identifier for logs and reports.
    fn name(&self) -> &'static str;

    /// Generate a problem instance.
    fn generate_problem(&self, params: &Self::GenerateParams) -> SolverResult<Self::Problem>;

    /// Build the initial prompt, optionally seeded with remembered examples.
    fn build_prompt(&self, problem: &Self::Problem, examples: &[MemoryEntry]) -> String;

    /// Extract a candidate solution from raw agent text.
    fn parse_solution(&self, response: &str) -> Self::Solution;

    /// Check a candidate against the problem's constraints.
    async fn validate_solution(
        &self,
        problem: &Self::Problem,
        solution: &Self::Solution,
    ) -> Verdict<Self::Feedback>;

    /// Run the escalated deliberate solving procedure.
    async fn run_deliberate_solver(
        &self,
        problem: &Self::Problem,
        client: &dyn AgentClient,
    ) -> Result<(Self::Solution, DeliberateMetadata), AgentError>;

    /// Canonical text form of the problem, used for prompting and memory
    /// indexing.
    fn problem_representation(&self, problem: &Self::Problem) -> String;

    /// Text form of a solution for memory storage and prompt seeding.
    fn solution_representation(&self, solution: &Self::Solution) -> String;

    /// Human-readable feedback text fed back to the agent.
    fn render_feedback(&self, feedback: &Self::Feedback) -> String;

    /// Normalize feedback into the shape the trend evaluator compares.
    fn feedback_signal(&self, feedback: &Self::Feedback) -> FeedbackSignal;
}
