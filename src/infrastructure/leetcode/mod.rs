//! LeetCode judge adapter for the code-debugging domain.

pub mod client;
pub mod types;

pub use client::{JudgeError, LeetCodeClient};
pub use types::JudgeResult;
