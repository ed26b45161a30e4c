//! SOFAI - Metacognitive Dual-Process Solver
//!
//! SOFAI solves constraint-satisfaction-style problems by orchestrating two
//! reasoning tiers — a fast, iteratively refined "System 1" and a deliberate,
//! single-shot "System 2" — together with an episodic memory of past
//! successes.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure data models and boundary traits
//! - **Service Layer** (`services`): The metacognitive control loop, episodic
//!   memory, and trend evaluation
//! - **Infrastructure Layer** (`infrastructure`): Ollama and judge adapters,
//!   configuration loading
//! - **Problem Domains** (`domains`): Pluggable problem families
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sofai::domains::graph_coloring::{GraphColoringDomain, GraphParams};
//! use sofai::services::MetacognitiveController;
//!
//! # async fn run(s1: Arc<dyn sofai::domain::ports::AgentClient>, s2: Arc<dyn sofai::domain::ports::AgentClient>) -> anyhow::Result<()> {
//! let domain = GraphColoringDomain::new();
//! let problem = domain.generate_problem(&GraphParams { num_nodes: 10, edge_prob: 0.5 })?;
//! let mut controller = MetacognitiveController::new(domain, s1, s2);
//! let outcome = controller.solve(&problem).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod domains;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{SolverError, SolverResult};
pub use domain::models::{
    Config, Conversation, FeedbackSignal, MemoryEntry, Role, SolveOutcome, SolverTier,
};
pub use domain::ports::{AgentClient, AgentError, ProblemDomain, Verdict};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{EpisodicMemory, MetacognitiveController, TrendEvaluator};
