//! Command-line interface layer.

pub mod commands;
pub mod report;
pub mod types;

pub use types::{Cli, Commands, DomainChoice, SolveArgs};

/// Print a top-level error and exit non-zero.
pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("{} {err:#}", console::style("error:").red().bold());
    std::process::exit(1);
}
