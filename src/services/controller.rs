//! The metacognitive controller: decides, turn by turn, whether to keep
//! refining with the fast tier, escalate to the deliberate tier, or stop.
//!
//! One `solve` call drives a single problem through
//! `INIT -> REFINING -> {SOLVED_S1 | ESCALATING} -> {SOLVED_S2 | FAILED}`.
//! The only state that outlives a call is what gets written into episodic
//! memory on success.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::errors::SolverResult;
use crate::domain::models::{Conversation, SolveOutcome, SolverTier};
use crate::domain::ports::{AgentClient, ProblemDomain, Verdict};
use crate::services::episodic_memory::EpisodicMemory;
use crate::services::trend::TrendEvaluator;

const DEFAULT_MAX_ITERATIONS: u32 = 5;
const DEFAULT_MEMORY_EXAMPLES: usize = 3;

/// Orchestrates one problem domain, two agent clients, and the episodic
/// memory. Strictly sequential: one problem per `solve` call, no overlapping
/// agent requests.
pub struct MetacognitiveController<D: ProblemDomain> {
    domain: D,
    s1_client: Arc<dyn AgentClient>,
    s2_client: Arc<dyn AgentClient>,
    memory: EpisodicMemory,
    max_iterations: u32,
    memory_examples: usize,
}

impl<D: ProblemDomain> MetacognitiveController<D> {
    pub fn new(domain: D, s1_client: Arc<dyn AgentClient>, s2_client: Arc<dyn AgentClient>) -> Self {
        Self {
            domain,
            s1_client,
            s2_client,
            memory: EpisodicMemory::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            memory_examples: DEFAULT_MEMORY_EXAMPLES,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_memory_examples(mut self, memory_examples: usize) -> Self {
        self.memory_examples = memory_examples;
        self
    }

    pub fn domain(&self) -> &D {
        &self.domain
    }

    pub fn memory(&self) -> &EpisodicMemory {
        &self.memory
    }

    /// Solve one problem instance.
    ///
    /// Parse faults and validation-collaborator outages are folded into the
    /// refinement loop as feedback. Agent transport errors abort the call and
    /// propagate unchanged.
    pub async fn solve(&mut self, problem: &D::Problem) -> SolverResult<SolveOutcome<D::Solution>> {
        let start = Instant::now();
        let mut s1_time = Duration::ZERO;
        let mut iteration = 0u32;

        // Fresh per attempt; never shared across problems.
        let mut trend = TrendEvaluator::new();

        let problem_repr = self.domain.problem_representation(problem);

        let examples = if self.memory.is_empty() {
            Vec::new()
        } else {
            debug!(entries = self.memory.len(), "retrieving similar examples from episodic memory");
            self.memory.retrieve_similar(&problem_repr, self.memory_examples)
        };

        info!(
            domain = self.domain.name(),
            s1_model = self.s1_client.model(),
            seeded_examples = examples.len(),
            "starting solve"
        );

        let mut conversation =
            Conversation::with_prompt(self.domain.build_prompt(problem, &examples));

        while iteration < self.max_iterations {
            iteration += 1;
            debug!(iteration, max = self.max_iterations, "refinement iteration");

            let iter_start = Instant::now();
            let response = self.s1_client.respond(&conversation).await?;
            s1_time += iter_start.elapsed();

            let solution = self.domain.parse_solution(&response);

            match self.domain.validate_solution(problem, &solution).await {
                Verdict::Valid => {
                    info!(iteration, "valid solution found by S1");
                    self.memory
                        .add(problem_repr, self.domain.solution_representation(&solution));
                    return Ok(SolveOutcome {
                        solved: true,
                        solution: Some(solution),
                        tier: SolverTier::S1,
                        iterations: iteration,
                        s1_time,
                        s2_time: Duration::ZERO,
                        total_time: start.elapsed(),
                    });
                }
                Verdict::Invalid(feedback) => {
                    trend.update(self.domain.feedback_signal(&feedback));

                    let out_of_iterations = iteration == self.max_iterations;
                    let stagnated = trend.no_improvement();

                    if out_of_iterations || stagnated {
                        if out_of_iterations {
                            info!(iteration, "reached maximum iterations, escalating to S2");
                        } else {
                            info!(iteration, "no improvement in feedback, escalating to S2");
                        }

                        let s2_start = Instant::now();
                        let (solution, metadata) = self
                            .domain
                            .run_deliberate_solver(problem, self.s2_client.as_ref())
                            .await?;
                        let s2_time = s2_start.elapsed();

                        debug!(solver = %metadata.solver, "deliberate solver finished");

                        // The escalated result is terminal: it is not
                        // re-validated against the problem here.
                        self.memory
                            .add(problem_repr, self.domain.solution_representation(&solution));
                        return Ok(SolveOutcome {
                            solved: true,
                            solution: Some(solution),
                            tier: SolverTier::S2,
                            iterations: iteration,
                            s1_time,
                            s2_time,
                            total_time: start.elapsed(),
                        });
                    }

                    let rendered = self.domain.render_feedback(&feedback);
                    debug!(iteration, feedback = %rendered, "invalid solution, refining");
                    conversation.push_assistant(response);
                    conversation.push_user(format!("Feedback: {rendered}"));
                }
            }
        }

        // Reachable only with max_iterations == 0: escalation is
        // unconditional once the loop runs at all.
        Ok(SolveOutcome {
            solved: false,
            solution: None,
            tier: SolverTier::None,
            iterations: iteration,
            s1_time,
            s2_time: Duration::ZERO,
            total_time: start.elapsed(),
        })
    }
}
