//! Service layer: the algorithmic core of the solver.

pub mod controller;
pub mod episodic_memory;
pub mod trend;

pub use controller::MetacognitiveController;
pub use episodic_memory::EpisodicMemory;
pub use trend::TrendEvaluator;
