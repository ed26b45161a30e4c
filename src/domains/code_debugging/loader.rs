//! DebugBench-style dataset loading.
//!
//! Problems live in per-bug-type JSON files named `python3_<bug type>.json`,
//! each holding an array of problem records.

use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::domain::errors::{SolverError, SolverResult};
use super::DebuggingProblem;

/// Bug types available in the Python3 slice of DebugBench.
pub const BUG_TYPES: &[&str] = &[
    "condition error",
    "double",
    "faulty indexing",
    "illegal comment",
    "illegal indentation",
    "illegal keywords",
    "missing colons",
    "misused == or =",
    "operation error",
    "other error",
    "quadruple",
    "triple",
    "unclosed parentheses",
    "unclosed string",
    "undefined methods",
    "undefined objects",
    "variable error",
];

#[derive(Debug, Deserialize)]
struct RawProblem {
    #[serde(default = "unknown_slug")]
    slug: String,
    #[serde(default)]
    question_id: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    examples: Vec<String>,
    #[serde(default)]
    constraints: String,
    #[serde(default = "default_level")]
    level: String,
    #[serde(default)]
    buggy_code: String,
    #[serde(default)]
    oracle_code: String,
}

fn unknown_slug() -> String {
    "unknown".to_string()
}

fn default_level() -> String {
    "medium".to_string()
}

fn dataset_file(dataset_dir: &Path, bug_type: &str) -> PathBuf {
    dataset_dir.join(format!("python3_{bug_type}.json"))
}

/// Load one problem from the dataset directory.
///
/// `bug_type` and `problem_index` are both optional; unset values are drawn
/// at random (bug type from `BUG_TYPES`, index from the chosen file).
pub fn load_problem(
    dataset_dir: &Path,
    bug_type: Option<&str>,
    problem_index: Option<usize>,
    rng: &mut impl Rng,
) -> SolverResult<DebuggingProblem> {
    let bug_type = match bug_type {
        Some(requested) => {
            if !BUG_TYPES.contains(&requested) {
                return Err(SolverError::InvalidParams(format!(
                    "unknown bug type '{requested}'; expected one of: {}",
                    BUG_TYPES.join(", ")
                )));
            }
            requested.to_string()
        }
        None => (*BUG_TYPES.choose(rng).expect("bug type list is non-empty")).to_string(),
    };

    let path = dataset_file(dataset_dir, &bug_type);
    let contents = fs::read_to_string(&path).map_err(|e| {
        SolverError::Dataset(format!("cannot read {}: {e}", path.display()))
    })?;
    let problems: Vec<RawProblem> = serde_json::from_str(&contents)?;

    if problems.is_empty() {
        return Err(SolverError::Dataset(format!(
            "{} holds no problems",
            path.display()
        )));
    }

    let index = match problem_index {
        Some(index) => {
            if index >= problems.len() {
                return Err(SolverError::InvalidParams(format!(
                    "problem index {index} out of range (max: {})",
                    problems.len() - 1
                )));
            }
            index
        }
        None => rng.gen_range(0..problems.len()),
    };

    let raw = problems.into_iter().nth(index).expect("index was bounds-checked");
    Ok(DebuggingProblem {
        slug: raw.slug,
        question_id: raw.question_id,
        description: raw.description,
        examples: raw.examples,
        constraints: raw.constraints,
        level: raw.level,
        buggy_code: raw.buggy_code,
        oracle_code: raw.oracle_code,
        bug_type,
    })
}
