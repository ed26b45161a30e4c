//! Code debugging problem family.
//!
//! Problems come from a DebugBench-style dataset of buggy LeetCode
//! submissions; validation submits the candidate fix to the remote judge.

pub mod loader;
pub mod parser;
pub mod prompt;

use std::path::PathBuf;

use async_trait::async_trait;
use rand::thread_rng;
use tracing::warn;

use crate::domain::errors::{SolverError, SolverResult};
use crate::domain::models::{Conversation, DeliberateMetadata, FeedbackSignal, MemoryEntry};
use crate::domain::ports::{AgentClient, AgentError, ProblemDomain, Verdict};
use crate::infrastructure::leetcode::{JudgeResult, LeetCodeClient};

const JUDGE_LANG: &str = "python3";

/// A buggy-code instance to repair.
#[derive(Debug, Clone)]
pub struct DebuggingProblem {
    pub slug: String,
    pub question_id: String,
    pub description: String,
    pub examples: Vec<String>,
    pub constraints: String,
    pub level: String,
    pub buggy_code: String,
    pub oracle_code: String,
    pub bug_type: String,
}

/// Parameters for problem selection.
#[derive(Debug, Clone, Default)]
pub struct DebuggingParams {
    /// Restrict to one bug type; random over all types when unset.
    pub bug_type: Option<String>,
    /// Pick a fixed index in the bug type's file; random when unset.
    pub problem_index: Option<usize>,
}

/// Why a candidate fix was rejected.
#[derive(Debug, Clone)]
pub enum DebuggingFeedback {
    /// The response contained no extractable code.
    NoSolution,
    /// The judge ran the code and rejected it.
    Judge(JudgeResult),
    /// The judge could not be reached; the loop continues on this diagnostic.
    JudgeUnavailable(String),
}

/// Code debugging implementation of the domain capability contract.
pub struct CodeDebuggingDomain {
    dataset_dir: PathBuf,
    judge: LeetCodeClient,
}

impl CodeDebuggingDomain {
    /// Build the domain with an explicit judge client.
    pub fn new(dataset_dir: impl Into<PathBuf>, judge: LeetCodeClient) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            judge,
        }
    }

    /// Build the domain from the `LEETCODE_SESSION` environment variable.
    ///
    /// A missing credential is a configuration fault, raised here — before
    /// any solve call begins.
    pub fn from_env(dataset_dir: impl Into<PathBuf>) -> SolverResult<Self> {
        let session = std::env::var("LEETCODE_SESSION").map_err(|_| {
            SolverError::Configuration(
                "LEETCODE_SESSION environment variable not set. \
Set it to your LeetCode session cookie value."
                    .into(),
            )
        })?;
        Ok(Self::new(dataset_dir, LeetCodeClient::new(session)))
    }
}

#[async_trait]
impl ProblemDomain for CodeDebuggingDomain {
    type Problem = DebuggingProblem;
    type Solution = String;
    type Feedback = DebuggingFeedback;
    type GenerateParams = DebuggingParams;

    fn name(&self) -> &'static str {
        "code_debugging"
    }

    fn generate_problem(&self, params: &DebuggingParams) -> SolverResult<DebuggingProblem> {
        loader::load_problem(
            &self.dataset_dir,
            params.bug_type.as_deref(),
            params.problem_index,
            &mut thread_rng(),
        )
    }

    fn build_prompt(&self, problem: &DebuggingProblem, examples: &[MemoryEntry]) -> String {
        prompt::debugging_prompt(problem, examples)
    }

    fn parse_solution(&self, response: &str) -> String {
        parser::parse_fixed_code(response)
    }

    async fn validate_solution(
        &self,
        problem: &DebuggingProblem,
        solution: &String,
    ) -> Verdict<DebuggingFeedback> {
        if solution.is_empty() {
            return Verdict::Invalid(DebuggingFeedback::NoSolution);
        }

        match self
            .judge
            .submit(&problem.slug, &problem.question_id, JUDGE_LANG, solution)
            .await
        {
            Ok(result) if result.accepted() => Verdict::Valid,
            Ok(result) => Verdict::Invalid(DebuggingFeedback::Judge(result)),
            Err(err) => {
                // A judge outage must not abort the solve call.
                warn!(error = %err, "judge unavailable, continuing with diagnostic feedback");
                Verdict::Invalid(DebuggingFeedback::JudgeUnavailable(err.to_string()))
            }
        }
    }

    async fn run_deliberate_solver(
        &self,
        problem: &DebuggingProblem,
        client: &dyn AgentClient,
    ) -> Result<(String, DeliberateMetadata), AgentError> {
        let conversation = Conversation::with_prompt(prompt::debugging_prompt(problem, &[]));
        let response = client.respond(&conversation).await?;
        let fixed_code = parser::parse_fixed_code(&response);

        Ok((
            fixed_code,
            DeliberateMetadata {
                solver: "s2_agent".to_string(),
                raw_response: Some(response),
            },
        ))
    }

    fn problem_representation(&self, problem: &DebuggingProblem) -> String {
        let description: String = problem.description.chars().take(200).collect();
        format!(
            "Problem: {}\nBug Type: {}\nDescription: {}...",
            problem.slug, problem.bug_type, description
        )
    }

    fn solution_representation(&self, solution: &String) -> String {
        format!("Fixed Code:\n{solution}")
    }

    fn render_feedback(&self, feedback: &DebuggingFeedback) -> String {
        match feedback {
            DebuggingFeedback::NoSolution => {
                "No solution found in the response. Put the fixed code between <code></code> tags."
                    .to_string()
            }
            DebuggingFeedback::Judge(result) => {
                let mut out = format!("Status: {}\n", result.status_msg);
                if let Some(error) = result
                    .full_runtime_error
                    .as_deref()
                    .or(result.compile_error.as_deref())
                {
                    out.push_str(&format!("Error: {error}\n"));
                }
                if let Some(case) = &result.last_testcase {
                    out.push_str(&format!("Failed Test Case: {case}\n"));
                }
                if let (Some(expected), Some(actual)) =
                    (&result.expected_output, &result.code_output)
                {
                    out.push_str(&format!("Expected: {expected}\nActual: {actual}\n"));
                }
                out
            }
            DebuggingFeedback::JudgeUnavailable(detail) => {
                format!("Validation service unavailable: {detail}")
            }
        }
    }

    fn feedback_signal(&self, feedback: &DebuggingFeedback) -> FeedbackSignal {
        match feedback {
            DebuggingFeedback::NoSolution => FeedbackSignal::Text("no solution found".to_string()),
            DebuggingFeedback::Judge(result) => match result.failed_testcases() {
                Some(failed) => FeedbackSignal::Violations(failed as usize),
                None => FeedbackSignal::Text(format!(
                    "{} {}",
                    result.status_msg,
                    result
                        .full_runtime_error
                        .as_deref()
                        .or(result.compile_error.as_deref())
                        .unwrap_or_default()
                )),
            },
            DebuggingFeedback::JudgeUnavailable(detail) => {
                FeedbackSignal::Text(format!("judge unavailable: {detail}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> CodeDebuggingDomain {
        CodeDebuggingDomain::new("/tmp/dataset", LeetCodeClient::new("test-session"))
    }

    #[test]
    fn missing_credential_is_a_configuration_fault() {
        std::env::remove_var("LEETCODE_SESSION");
        assert!(matches!(
            CodeDebuggingDomain::from_env("/tmp/dataset"),
            Err(SolverError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn empty_code_is_no_solution() {
        let verdict = domain()
            .validate_solution(
                &DebuggingProblem {
                    slug: "two-sum".into(),
                    question_id: "1".into(),
                    description: String::new(),
                    examples: vec![],
                    constraints: String::new(),
                    level: "easy".into(),
                    buggy_code: String::new(),
                    oracle_code: String::new(),
                    bug_type: "double".into(),
                },
                &String::new(),
            )
            .await;
        assert!(matches!(
            verdict,
            Verdict::Invalid(DebuggingFeedback::NoSolution)
        ));
    }

    #[test]
    fn judge_counts_become_violation_signals() {
        let result = JudgeResult {
            status_msg: "Wrong Answer".into(),
            total_correct: Some(7),
            total_testcases: Some(10),
            ..JudgeResult::default()
        };
        assert_eq!(
            domain().feedback_signal(&DebuggingFeedback::Judge(result)),
            FeedbackSignal::Violations(3)
        );
    }

    #[test]
    fn judge_without_counts_becomes_text_signal() {
        let result = JudgeResult {
            status_msg: "Compile Error".into(),
            compile_error: Some("SyntaxError: invalid syntax".into()),
            ..JudgeResult::default()
        };
        match domain().feedback_signal(&DebuggingFeedback::Judge(result)) {
            FeedbackSignal::Text(text) => assert!(text.contains("Compile Error")),
            FeedbackSignal::Violations(_) => panic!("expected text signal"),
        }
    }
}
