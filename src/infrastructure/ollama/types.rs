//! Request/response types for the Ollama HTTP API.

use serde::{Deserialize, Serialize};

use crate::domain::models::{Conversation, Turn};

/// One message in the chat wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            content: turn.content.clone(),
        }
    }
}

/// Body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

impl ChatRequest {
    pub fn from_conversation(model: &str, conversation: &Conversation) -> Self {
        Self {
            model: model.to_string(),
            messages: conversation.turns().iter().map(ChatMessage::from).collect(),
            stream: false,
        }
    }
}

/// Non-streaming response from `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: Option<ChatMessage>,
    #[serde(default)]
    pub done: bool,
}

/// Error body Ollama returns on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Response from `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// One locally available model.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    pub name: String,
}
