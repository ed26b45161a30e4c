//! Infrastructure layer: adapters to external systems.

pub mod config;
pub mod leetcode;
pub mod ollama;
