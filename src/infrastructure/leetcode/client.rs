//! Remote judge client with enforced submission spacing.
//!
//! The client owns its own cooldown timer instead of relying on any
//! process-wide state: one instance per session credential, constructor
//! injected into the domain that needs it.

use std::time::{Duration, Instant};

use reqwest::Client as ReqwestClient;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::types::{JudgeResult, SubmitRequest, SubmitResponse};

const DEFAULT_BASE_URL: &str = "https://leetcode.com";
/// Minimum spacing between submissions to stay under the judge's rate limit.
const SUBMISSION_COOLDOWN: Duration = Duration::from_secs(15);
const POLL_INTERVAL: Duration = Duration::from_secs(2);
const MAX_POLLS: u32 = 60;

/// Errors from the judging service.
///
/// These never abort a solve call: the domain folds them into validation
/// feedback so the refinement loop keeps moving while the judge is down.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("Judge unreachable: {0}")]
    Unreachable(String),

    #[error("Judge rejected submission: {0}")]
    Rejected(String),

    #[error("Judge returned malformed output: {0}")]
    MalformedResponse(String),

    #[error("Verdict not ready after {0} polls")]
    VerdictTimeout(u32),
}

/// HTTP client for the LeetCode submission API.
pub struct LeetCodeClient {
    http_client: ReqwestClient,
    base_url: String,
    session_cookie: String,
    cooldown: Duration,
    last_submission: Mutex<Option<Instant>>,
}

impl LeetCodeClient {
    /// Create a client authenticated by a session cookie value.
    pub fn new(session_cookie: impl Into<String>) -> Self {
        Self::with_base_url(session_cookie, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(session_cookie: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: ReqwestClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_cookie: session_cookie.into(),
            cooldown: SUBMISSION_COOLDOWN,
            last_submission: Mutex::new(None),
        }
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Submit code for a problem and wait for the verdict.
    pub async fn submit(
        &self,
        slug: &str,
        question_id: &str,
        lang: &str,
        code: &str,
    ) -> Result<JudgeResult, JudgeError> {
        self.pace().await;

        let url = format!("{}/problems/{}/submit/", self.base_url, slug);
        let request = SubmitRequest {
            lang: lang.to_string(),
            question_id: question_id.to_string(),
            typed_code: code.to_string(),
        };

        debug!(slug, lang, "submitting to judge");

        let response = self
            .http_client
            .post(&url)
            .header("Cookie", format!("LEETCODE_SESSION={}", self.session_cookie))
            .header("Referer", format!("{}/problems/{}/", self.base_url, slug))
            .json(&request)
            .send()
            .await
            .map_err(|e| JudgeError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "judge rejected submission");
            return Err(JudgeError::Rejected(format!("{status}: {body}")));
        }

        let submitted: SubmitResponse = response
            .json()
            .await
            .map_err(|e| JudgeError::MalformedResponse(e.to_string()))?;

        self.poll_verdict(submitted.submission_id).await
    }

    /// Wait out the configured minimum spacing since the previous submission.
    async fn pace(&self) {
        let mut last = self.last_submission.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.cooldown {
                let wait = self.cooldown - elapsed;
                debug!(wait_secs = wait.as_secs_f32(), "waiting before next submission");
                sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    async fn poll_verdict(&self, submission_id: u64) -> Result<JudgeResult, JudgeError> {
        let url = format!("{}/submissions/detail/{}/check/", self.base_url, submission_id);

        for _ in 0..MAX_POLLS {
            let response = self
                .http_client
                .get(&url)
                .header("Cookie", format!("LEETCODE_SESSION={}", self.session_cookie))
                .send()
                .await
                .map_err(|e| JudgeError::Unreachable(e.to_string()))?;

            let result: JudgeResult = response
                .json()
                .await
                .map_err(|e| JudgeError::MalformedResponse(e.to_string()))?;

            if result.state == "SUCCESS" {
                debug!(status = %result.status_msg, "verdict received");
                return Ok(result);
            }

            sleep(POLL_INTERVAL).await;
        }

        Err(JudgeError::VerdictTimeout(MAX_POLLS))
    }
}
