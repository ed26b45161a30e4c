//! Domain layer for the metacognitive solver
//!
//! This module contains core business logic and domain models.

pub mod errors;
pub mod models;
pub mod ports;
