//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the boundary traits infrastructure adapters and
//! problem families must implement:
//! - `AgentClient`: transport to a reasoning agent
//! - `ProblemDomain`: the capability contract for a problem family

pub mod agent_client;
pub mod problem_domain;

pub use agent_client::{AgentClient, AgentError};
pub use problem_domain::{ProblemDomain, Verdict};
