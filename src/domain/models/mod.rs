//! Domain models: pure data shared across the solver.

pub mod config;
pub mod conversation;
pub mod outcome;

pub use config::{Config, LoggingConfig, OllamaConfig};
pub use conversation::{Conversation, Role, Turn};
pub use outcome::{DeliberateMetadata, FeedbackSignal, MemoryEntry, SolveOutcome, SolverTier};
