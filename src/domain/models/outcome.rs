//! Value types produced and consumed by the metacognitive controller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which reasoning tier produced the final solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverTier {
    /// Fast tier: iterative refinement with feedback.
    S1,
    /// Deliberate tier: single-shot escalation.
    S2,
    /// Neither tier produced a result.
    None,
}

impl SolverTier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::None => "none",
        }
    }
}

/// Result of one `solve` call.
///
/// Created once per call and immutable afterwards.
#[derive(Debug, Clone)]
pub struct SolveOutcome<S> {
    /// Whether either tier produced a solution that was accepted.
    pub solved: bool,
    /// The final solution, if any.
    pub solution: Option<S>,
    /// Tier that produced the accepted solution.
    pub tier: SolverTier,
    /// Number of fast-tier refinement iterations performed.
    pub iterations: u32,
    /// Wall-clock time spent inside fast-tier agent calls, summed.
    pub s1_time: Duration,
    /// Wall-clock time spent in the single deliberate-tier invocation.
    pub s2_time: Duration,
    /// Total wall-clock time for the whole call.
    pub total_time: Duration,
}

/// One remembered (problem, solution) pair.
///
/// Entries are immutable once created and live for the process lifetime
/// inside the episodic memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Canonical text form of the problem, used for retrieval ranking.
    pub problem_repr: String,
    /// Text form of the accepted solution, used for prompt seeding.
    pub solution_repr: String,
}

impl MemoryEntry {
    pub fn new(problem_repr: impl Into<String>, solution_repr: impl Into<String>) -> Self {
        Self {
            problem_repr: problem_repr.into(),
            solution_repr: solution_repr.into(),
        }
    }
}

/// Domain-normalized view of one round of validation feedback.
///
/// Domains reduce their opaque feedback shapes to one of these so the trend
/// evaluator never has to decode domain specifics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackSignal {
    /// Countable violations (failed constraints, failed test cases).
    Violations(usize),
    /// Free-form diagnostic text.
    Text(String),
}

/// Extra information returned by a deliberate-tier solver.
#[derive(Debug, Clone, Default)]
pub struct DeliberateMetadata {
    /// Identifier of the solver that produced the result.
    pub solver: String,
    /// Raw agent response, kept for reporting.
    pub raw_response: Option<String>,
}
