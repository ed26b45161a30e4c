//! CLI argument parsing tests.

use clap::Parser;
use sofai::cli::{Cli, Commands, DomainChoice};

#[test]
fn solve_graph_coloring_with_defaults() {
    let cli = Cli::try_parse_from(["sofai", "solve", "--domain", "graph-coloring"]).unwrap();

    let Commands::Solve(args) = cli.command else {
        panic!("expected solve command");
    };
    assert_eq!(args.domain, DomainChoice::GraphColoring);
    assert_eq!(args.nodes, 10);
    assert!((args.edge_prob - 0.5).abs() < f64::EPSILON);
    assert!(args.s1_model.is_none());
    assert!(args.max_iterations.is_none());
}

#[test]
fn solve_accepts_model_and_iteration_overrides() {
    let cli = Cli::try_parse_from([
        "sofai",
        "solve",
        "--domain",
        "graph-coloring",
        "--s1-model",
        "llama3:8b",
        "--s2-model",
        "deepseek-r1:7b",
        "--max-iterations",
        "8",
        "--memory-examples",
        "5",
        "--nodes",
        "20",
        "--edge-prob",
        "0.3",
    ])
    .unwrap();

    let Commands::Solve(args) = cli.command else {
        panic!("expected solve command");
    };
    assert_eq!(args.s1_model.as_deref(), Some("llama3:8b"));
    assert_eq!(args.s2_model.as_deref(), Some("deepseek-r1:7b"));
    assert_eq!(args.max_iterations, Some(8));
    assert_eq!(args.memory_examples, Some(5));
    assert_eq!(args.nodes, 20);
    assert!((args.edge_prob - 0.3).abs() < f64::EPSILON);
}

#[test]
fn solve_code_debugging_accepts_dataset_selectors() {
    let cli = Cli::try_parse_from([
        "sofai",
        "solve",
        "--domain",
        "code-debugging",
        "--dataset-dir",
        "/tmp/debugbench",
        "--bug-type",
        "condition error",
        "--problem-index",
        "3",
    ])
    .unwrap();

    let Commands::Solve(args) = cli.command else {
        panic!("expected solve command");
    };
    assert_eq!(args.domain, DomainChoice::CodeDebugging);
    assert_eq!(args.dataset_dir.to_str(), Some("/tmp/debugbench"));
    assert_eq!(args.bug_type.as_deref(), Some("condition error"));
    assert_eq!(args.problem_index, Some(3));
}

#[test]
fn solve_requires_a_domain() {
    assert!(Cli::try_parse_from(["sofai", "solve"]).is_err());
}

#[test]
fn models_accepts_a_global_config_path() {
    let cli = Cli::try_parse_from(["sofai", "models", "--config", "custom.yaml"]).unwrap();

    assert!(matches!(cli.command, Commands::Models));
    assert_eq!(cli.config.as_ref().and_then(|p| p.to_str()), Some("custom.yaml"));
}

#[test]
fn verbose_flag_is_global() {
    let cli =
        Cli::try_parse_from(["sofai", "solve", "--domain", "graph-coloring", "-v"]).unwrap();
    assert!(cli.verbose);
}
