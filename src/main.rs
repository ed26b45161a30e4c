//! SOFAI CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sofai::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "sofai=debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Solve(args) => sofai::cli::commands::solve::execute(args, cli.config).await,
        Commands::Models => sofai::cli::commands::models::execute(cli.config).await,
    };

    if let Err(err) = result {
        sofai::cli::handle_error(err);
    }
}
