//! Wire types for the LeetCode submission API.

use serde::{Deserialize, Serialize};

/// Body for `POST /problems/{slug}/submit/`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    pub lang: String,
    pub question_id: String,
    pub typed_code: String,
}

/// Response to a submission request.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub submission_id: u64,
}

/// Result of polling `GET /submissions/detail/{id}/check/`.
///
/// Fields are sparse: the judge omits most of them depending on the verdict.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JudgeResult {
    /// Polling state: "PENDING", "STARTED", or "SUCCESS".
    #[serde(default)]
    pub state: String,

    /// Verdict, e.g. "Accepted", "Wrong Answer", "Runtime Error".
    #[serde(default)]
    pub status_msg: String,

    #[serde(default)]
    pub total_correct: Option<u32>,

    #[serde(default)]
    pub total_testcases: Option<u32>,

    #[serde(default)]
    pub full_runtime_error: Option<String>,

    #[serde(default)]
    pub compile_error: Option<String>,

    #[serde(default)]
    pub last_testcase: Option<String>,

    #[serde(default)]
    pub expected_output: Option<String>,

    #[serde(default)]
    pub code_output: Option<String>,

    #[serde(default)]
    pub status_runtime: Option<String>,

    #[serde(default)]
    pub status_memory: Option<String>,
}

impl JudgeResult {
    pub fn accepted(&self) -> bool {
        self.status_msg == "Accepted"
    }

    /// Number of failed test cases, when the judge reports counts.
    pub fn failed_testcases(&self) -> Option<u32> {
        match (self.total_testcases, self.total_correct) {
            (Some(total), Some(correct)) => Some(total.saturating_sub(correct)),
            _ => None,
        }
    }
}
