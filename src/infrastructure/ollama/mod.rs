//! Ollama transport adapter for the agent-client port.

pub mod client;
pub mod types;

pub use client::OllamaClient;
