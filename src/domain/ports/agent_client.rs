//! Agent Client Port
//!
//! Abstraction over a reasoning agent: given the conversation so far, return
//! one complete text response. Implementations must be stateless between
//! calls — the controller re-sends the full history every time.

use async_trait::async_trait;

use crate::domain::models::Conversation;

/// Error types for agent transport operations.
///
/// Any of these is fatal to the solve call in progress; retry policy, if any,
/// lives above the controller.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Agent unreachable: {0}")]
    Unreachable(String),

    #[error("Agent request timed out after {0}s")]
    Timeout(u64),

    #[error("Agent returned malformed output: {0}")]
    MalformedResponse(String),

    #[error("Agent request failed: {0}")]
    RequestFailed(String),
}

/// Port trait for reasoning-agent clients.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for use across tokio tasks.
#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Model identifier this client talks to (e.g., "gemma3:1b").
    fn model(&self) -> &str;

    /// Generate one complete response for the given conversation.
    ///
    /// Blocking round-trip: the call returns only once the full response text
    /// is available. No retry is performed here.
    async fn respond(&self, conversation: &Conversation) -> Result<String, AgentError>;
}
