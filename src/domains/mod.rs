//! Problem families pluggable into the metacognitive controller.
//!
//! Selection between families is an explicit tagged choice made by the CLI,
//! never runtime type inspection.

pub mod code_debugging;
pub mod graph_coloring;

pub use code_debugging::CodeDebuggingDomain;
pub use graph_coloring::GraphColoringDomain;
