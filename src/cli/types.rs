//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sofai")]
#[command(about = "SOFAI - Metacognitive dual-process solver", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Load configuration from a specific file instead of .sofai/
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Verbose progress output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a problem and solve it with the metacognitive loop
    Solve(SolveArgs),

    /// List models available on the Ollama daemon
    Models,
}

/// Problem family to solve. An explicit tagged choice, not runtime
/// inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DomainChoice {
    GraphColoring,
    CodeDebugging,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Domain to solve
    #[arg(long, value_enum)]
    pub domain: DomainChoice,

    /// Ollama model for the fast tier (overrides config)
    #[arg(long)]
    pub s1_model: Option<String>,

    /// Ollama model for the deliberate tier (overrides config)
    #[arg(long)]
    pub s2_model: Option<String>,

    /// Maximum fast-tier refinement iterations (overrides config)
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Number of episodic memory examples to seed prompts with
    #[arg(long)]
    pub memory_examples: Option<usize>,

    /// Number of nodes for graph coloring
    #[arg(long, default_value = "10")]
    pub nodes: u32,

    /// Edge probability for the Erdős–Rényi graph
    #[arg(long, default_value = "0.5")]
    pub edge_prob: f64,

    /// Directory holding the DebugBench-style dataset files
    #[arg(long, default_value = "data/debugbench")]
    pub dataset_dir: std::path::PathBuf,

    /// Specific bug type to solve (e.g. 'condition error'); random when unset
    #[arg(long)]
    pub bug_type: Option<String>,

    /// Specific problem index within the bug type file; random when unset
    #[arg(long)]
    pub problem_index: Option<usize>,
}
