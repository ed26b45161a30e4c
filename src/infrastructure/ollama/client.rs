//! HTTP client for a local Ollama daemon, implementing the agent-client port.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::{debug, error};

use super::types::{ApiError, ChatRequest, ChatResponse, TagsResponse};
use crate::domain::models::{Conversation, OllamaConfig};
use crate::domain::ports::{AgentClient, AgentError};

/// Stateless chat client for one Ollama model.
///
/// Each `respond` call sends the full conversation; nothing is retained
/// between calls. No retry is performed here — a transport failure is fatal
/// to the solve call in progress.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http_client: ReqwestClient,
    base_url: String,
    model: String,
    timeout_secs: u64,
}

impl OllamaClient {
    /// Create a client for `model` using the given transport configuration.
    pub fn new(model: impl Into<String>, config: &OllamaConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// List the models the daemon serves locally.
    pub async fn list_models(&self) -> Result<Vec<String>, AgentError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(&e))?;

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| AgentError::MalformedResponse(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    fn classify_transport_error(&self, err: &reqwest::Error) -> AgentError {
        if err.is_connect() {
            error!(base_url = %self.base_url, "failed to connect to Ollama");
            AgentError::Unreachable(format!(
                "Ollama not reachable at {}. Start it with 'ollama serve'.",
                self.base_url
            ))
        } else if err.is_timeout() {
            AgentError::Timeout(self.timeout_secs)
        } else {
            AgentError::RequestFailed(err.to_string())
        }
    }
}

#[async_trait]
impl AgentClient for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn respond(&self, conversation: &Conversation) -> Result<String, AgentError> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest::from_conversation(&self.model, conversation);

        debug!(model = %self.model, turns = conversation.len(), "sending chat request");

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            let detail = serde_json::from_str::<ApiError>(&body)
                .map_or(body, |api_error| api_error.error);
            return Err(AgentError::RequestFailed(format!("{status}: {detail}")));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::MalformedResponse(e.to_string()))?;

        let message = chat
            .message
            .ok_or_else(|| AgentError::MalformedResponse("response carried no message".into()))?;

        debug!(model = %self.model, chars = message.content.len(), "chat response received");
        Ok(message.content)
    }
}
