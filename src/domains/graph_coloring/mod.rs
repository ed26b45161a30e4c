//! Graph coloring problem family.
//!
//! Problems are generated Erdős–Rényi graphs with a DSATUR-derived color
//! budget; validation is local and exhaustive.

pub mod generator;
pub mod parser;
pub mod prompt;
pub mod validator;

use std::collections::BTreeMap;

use async_trait::async_trait;
use rand::thread_rng;

use crate::domain::errors::{SolverError, SolverResult};
use crate::domain::models::{Conversation, DeliberateMetadata, FeedbackSignal, MemoryEntry};
use crate::domain::ports::{AgentClient, AgentError, ProblemDomain, Verdict};
use generator::{dsatur_color_count, erdos_renyi, Graph};
use validator::{validate_coloring, ColoringViolation};

/// A generated coloring instance.
#[derive(Debug, Clone)]
pub struct GraphColoringProblem {
    pub graph: Graph,
    /// Color budget handed to the solver (DSATUR upper bound).
    pub color_budget: u32,
    dimacs: String,
}

impl GraphColoringProblem {
    pub fn new(graph: Graph, color_budget: u32) -> Self {
        let dimacs = graph.to_dimacs();
        Self {
            graph,
            color_budget,
            dimacs,
        }
    }

    pub fn dimacs(&self) -> &str {
        &self.dimacs
    }
}

/// Parameters for random instance generation.
#[derive(Debug, Clone)]
pub struct GraphParams {
    pub num_nodes: u32,
    pub edge_prob: f64,
}

/// Why a proposed coloring was rejected.
#[derive(Debug, Clone)]
pub enum GraphFeedback {
    /// The response contained no parseable assignment.
    NoSolution,
    /// Constraint violations found by the validator.
    Violations(Vec<ColoringViolation>),
}

/// Graph coloring implementation of the domain capability contract.
#[derive(Debug, Default)]
pub struct GraphColoringDomain;

impl GraphColoringDomain {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProblemDomain for GraphColoringDomain {
    type Problem = GraphColoringProblem;
    type Solution = BTreeMap<String, u32>;
    type Feedback = GraphFeedback;
    type GenerateParams = GraphParams;

    fn name(&self) -> &'static str {
        "graph_coloring"
    }

    fn generate_problem(&self, params: &GraphParams) -> SolverResult<GraphColoringProblem> {
        if params.num_nodes == 0 {
            return Err(SolverError::InvalidParams(
                "num_nodes must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&params.edge_prob) {
            return Err(SolverError::InvalidParams(format!(
                "edge_prob {} is not in [0, 1]",
                params.edge_prob
            )));
        }

        let graph = erdos_renyi(params.num_nodes, params.edge_prob, &mut thread_rng());
        let budget = dsatur_color_count(&graph);
        Ok(GraphColoringProblem::new(graph, budget))
    }

    fn build_prompt(&self, problem: &GraphColoringProblem, examples: &[MemoryEntry]) -> String {
        prompt::coloring_prompt(problem.dimacs(), problem.color_budget, examples)
    }

    fn parse_solution(&self, response: &str) -> Self::Solution {
        parser::parse_coloring(response)
    }

    async fn validate_solution(
        &self,
        problem: &GraphColoringProblem,
        solution: &Self::Solution,
    ) -> Verdict<GraphFeedback> {
        if solution.is_empty() {
            return Verdict::Invalid(GraphFeedback::NoSolution);
        }

        let violations = validate_coloring(&problem.graph, problem.color_budget, solution);
        if violations.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Invalid(GraphFeedback::Violations(violations))
        }
    }

    async fn run_deliberate_solver(
        &self,
        problem: &GraphColoringProblem,
        client: &dyn AgentClient,
    ) -> Result<(Self::Solution, DeliberateMetadata), AgentError> {
        // Same prompt as the fast tier, but no seeded examples: the
        // deliberate tier reasons from scratch.
        let conversation =
            Conversation::with_prompt(prompt::coloring_prompt(problem.dimacs(), problem.color_budget, &[]));
        let response = client.respond(&conversation).await?;
        let solution = parser::parse_coloring(&response);

        Ok((
            solution,
            DeliberateMetadata {
                solver: "s2_agent".to_string(),
                raw_response: Some(response),
            },
        ))
    }

    fn problem_representation(&self, problem: &GraphColoringProblem) -> String {
        problem.dimacs().to_string()
    }

    fn solution_representation(&self, solution: &Self::Solution) -> String {
        solution
            .iter()
            .map(|(vertex, color)| format!("({vertex} {color})"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_feedback(&self, feedback: &GraphFeedback) -> String {
        match feedback {
            GraphFeedback::NoSolution => {
                "No solution found in the response. Reply with one (vertex color) line per vertex."
                    .to_string()
            }
            GraphFeedback::Violations(violations) => {
                let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
                format!("The coloring is invalid:\n{}", lines.join("\n"))
            }
        }
    }

    fn feedback_signal(&self, feedback: &GraphFeedback) -> FeedbackSignal {
        match feedback {
            GraphFeedback::NoSolution => FeedbackSignal::Text("no solution found".to_string()),
            GraphFeedback::Violations(violations) => FeedbackSignal::Violations(violations.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_problem() -> GraphColoringProblem {
        GraphColoringProblem::new(
            Graph {
                num_vertices: 3,
                edges: vec![(1, 2), (2, 3), (1, 3)],
            },
            3,
        )
    }

    #[test]
    fn generate_rejects_bad_params() {
        let domain = GraphColoringDomain::new();
        assert!(domain
            .generate_problem(&GraphParams { num_nodes: 0, edge_prob: 0.5 })
            .is_err());
        assert!(domain
            .generate_problem(&GraphParams { num_nodes: 5, edge_prob: 1.5 })
            .is_err());
    }

    #[test]
    fn generated_budget_is_positive() {
        let domain = GraphColoringDomain::new();
        let problem = domain
            .generate_problem(&GraphParams { num_nodes: 8, edge_prob: 0.4 })
            .unwrap();
        assert!(problem.color_budget >= 1);
        assert!(problem.dimacs().starts_with("p edge 8 "));
    }

    #[tokio::test]
    async fn validate_maps_empty_solution_to_no_solution() {
        let domain = GraphColoringDomain::new();
        let verdict = domain
            .validate_solution(&triangle_problem(), &BTreeMap::new())
            .await;
        assert!(matches!(
            verdict,
            Verdict::Invalid(GraphFeedback::NoSolution)
        ));
    }

    #[tokio::test]
    async fn validate_accepts_proper_coloring() {
        let domain = GraphColoringDomain::new();
        let solution: BTreeMap<String, u32> = [("1", 1u32), ("2", 2), ("3", 3)]
            .into_iter()
            .map(|(v, c)| (v.to_string(), c))
            .collect();
        assert!(domain
            .validate_solution(&triangle_problem(), &solution)
            .await
            .is_valid());
    }

    #[test]
    fn feedback_signal_counts_violations() {
        let domain = GraphColoringDomain::new();
        let feedback = GraphFeedback::Violations(vec![
            ColoringViolation::Missing { vertex: 1 },
            ColoringViolation::Missing { vertex: 2 },
        ]);
        assert_eq!(domain.feedback_signal(&feedback), FeedbackSignal::Violations(2));
    }

    #[test]
    fn solution_representation_round_trips_through_parser() {
        let domain = GraphColoringDomain::new();
        let solution: BTreeMap<String, u32> = [("1", 2u32), ("2", 1)]
            .into_iter()
            .map(|(v, c)| (v.to_string(), c))
            .collect();
        let rendered = domain.solution_representation(&solution);
        assert_eq!(domain.parse_solution(&rendered), solution);
    }
}
