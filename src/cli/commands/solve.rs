//! The solve command: generate one problem and run the metacognitive loop.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use tracing::warn;

use crate::cli::report;
use crate::cli::types::{DomainChoice, SolveArgs};
use crate::domain::models::Config;
use crate::domain::ports::ProblemDomain;
use crate::domains::code_debugging::{CodeDebuggingDomain, DebuggingParams};
use crate::domains::graph_coloring::{GraphColoringDomain, GraphParams};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::ollama::OllamaClient;
use crate::services::MetacognitiveController;

pub async fn execute(args: SolveArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path, &args)?;

    let s1_client =
        Arc::new(OllamaClient::new(&config.s1_model, &config.ollama).context("building S1 client")?);
    let s2_client =
        Arc::new(OllamaClient::new(&config.s2_model, &config.ollama).context("building S2 client")?);

    warn_on_missing_models(&s1_client, &[&config.s1_model, &config.s2_model]).await;

    println!("{}", style("SOFAI solver").bold());
    println!("S1 model: {}", config.s1_model);
    println!("S2 model: {}", config.s2_model);

    match args.domain {
        DomainChoice::GraphColoring => {
            let domain = GraphColoringDomain::new();
            let problem = domain.generate_problem(&GraphParams {
                num_nodes: args.nodes,
                edge_prob: args.edge_prob,
            })?;
            println!(
                "Generated graph with {} vertices and {} edges (color budget: {})\n",
                problem.graph.num_vertices,
                problem.graph.edges.len(),
                problem.color_budget
            );

            let mut controller = MetacognitiveController::new(domain, s1_client, s2_client)
                .with_max_iterations(config.max_iterations)
                .with_memory_examples(config.memory_examples);
            let outcome = controller.solve(&problem).await?;

            report::print_outcome(&outcome, |coloring| {
                coloring
                    .iter()
                    .map(|(vertex, color)| format!("  {vertex}: {color}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            });
        }
        DomainChoice::CodeDebugging => {
            let domain = CodeDebuggingDomain::from_env(&args.dataset_dir)?;
            let problem = domain.generate_problem(&DebuggingParams {
                bug_type: args.bug_type.clone(),
                problem_index: args.problem_index,
            })?;
            println!(
                "Problem: {} (bug type: {}, level: {})\n",
                problem.slug, problem.bug_type, problem.level
            );

            let mut controller = MetacognitiveController::new(domain, s1_client, s2_client)
                .with_max_iterations(config.max_iterations)
                .with_memory_examples(config.memory_examples);
            let outcome = controller.solve(&problem).await?;

            report::print_outcome(&outcome, |code| report::truncate_for_display(code, 500));
        }
    }

    Ok(())
}

fn load_config(config_path: Option<PathBuf>, args: &SolveArgs) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    // CLI flags take priority over anything the loader produced.
    if let Some(model) = &args.s1_model {
        config.s1_model.clone_from(model);
    }
    if let Some(model) = &args.s2_model {
        config.s2_model.clone_from(model);
    }
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(memory_examples) = args.memory_examples {
        config.memory_examples = memory_examples;
    }

    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Best-effort check that the configured models exist on the daemon.
///
/// Failures here are warnings only; an unreachable daemon will surface as a
/// transport error once the solve begins.
async fn warn_on_missing_models(client: &OllamaClient, models: &[&str]) {
    match client.list_models().await {
        Ok(available) => {
            for model in models {
                if !available.iter().any(|m| m == model) {
                    warn!(model, "model not available locally; pull it with 'ollama pull'");
                }
            }
        }
        Err(err) => warn!(error = %err, "could not query Ollama for available models"),
    }
}
