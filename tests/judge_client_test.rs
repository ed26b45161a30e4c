//! Tests for the judge client: submission, verdict polling, and cooldown
//! spacing, against a mock HTTP server.

use std::time::{Duration, Instant};

use mockito::Server;
use sofai::infrastructure::leetcode::{JudgeError, LeetCodeClient};

#[tokio::test]
async fn submit_polls_until_the_verdict_is_ready() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/problems/two-sum/submit/")
        .match_header("cookie", mockito::Matcher::Regex("LEETCODE_SESSION=abc".into()))
        .with_status(200)
        .with_body(r#"{"submission_id": 42}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/submissions/detail/42/check/")
        .with_status(200)
        .with_body(r#"{"state": "SUCCESS", "status_msg": "Accepted", "total_correct": 57, "total_testcases": 57}"#)
        .create_async()
        .await;

    let client = LeetCodeClient::with_base_url("abc", server.url())
        .with_cooldown(Duration::from_millis(0));

    let verdict = client
        .submit("two-sum", "1", "python3", "class Solution: ...")
        .await
        .unwrap();

    assert!(verdict.accepted());
    assert_eq!(verdict.total_correct, Some(57));
    assert_eq!(verdict.total_testcases, Some(57));
}

#[tokio::test]
async fn submit_reports_rejection_with_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/problems/two-sum/submit/")
        .with_status(403)
        .with_body("expired session")
        .create_async()
        .await;

    let client = LeetCodeClient::with_base_url("abc", server.url())
        .with_cooldown(Duration::from_millis(0));

    let err = client
        .submit("two-sum", "1", "python3", "code")
        .await
        .unwrap_err();

    match err {
        JudgeError::Rejected(detail) => {
            assert!(detail.contains("403"), "{detail}");
            assert!(detail.contains("expired session"), "{detail}");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn consecutive_submissions_are_spaced_by_the_cooldown() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/problems/two-sum/submit/")
        .with_status(200)
        .with_body(r#"{"submission_id": 7}"#)
        .expect(2)
        .create_async()
        .await;
    server
        .mock("GET", "/submissions/detail/7/check/")
        .with_status(200)
        .with_body(r#"{"state": "SUCCESS", "status_msg": "Accepted"}"#)
        .expect(2)
        .create_async()
        .await;

    let cooldown = Duration::from_millis(200);
    let client = LeetCodeClient::with_base_url("abc", server.url()).with_cooldown(cooldown);

    let start = Instant::now();
    client.submit("two-sum", "1", "python3", "code").await.unwrap();
    client.submit("two-sum", "1", "python3", "code").await.unwrap();

    assert!(start.elapsed() >= cooldown);
}
