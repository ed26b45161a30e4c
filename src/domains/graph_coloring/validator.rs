//! Local validation of graph colorings.

use std::collections::BTreeMap;

use super::generator::Graph;

/// One way a coloring can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColoringViolation {
    /// Both endpoints of an edge carry the same color.
    Conflict { u: u32, v: u32, color: u32 },
    /// A vertex has no assignment.
    Missing { vertex: u32 },
    /// A vertex uses a color beyond the allowed budget.
    OverBudget { vertex: u32, color: u32, budget: u32 },
}

impl std::fmt::Display for ColoringViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict { u, v, color } => {
                write!(f, "vertices {u} and {v} are adjacent but share color {color}")
            }
            Self::Missing { vertex } => write!(f, "vertex {vertex} has no color assigned"),
            Self::OverBudget { vertex, color, budget } => {
                write!(f, "vertex {vertex} uses color {color}, above the budget of {budget}")
            }
        }
    }
}

/// Collect every violation of a proposed coloring against the graph and the
/// color budget. An empty vec means the coloring is valid.
pub fn validate_coloring(
    graph: &Graph,
    budget: u32,
    coloring: &BTreeMap<String, u32>,
) -> Vec<ColoringViolation> {
    let mut violations = Vec::new();

    for vertex in graph.vertices() {
        match coloring.get(&vertex.to_string()) {
            None => violations.push(ColoringViolation::Missing { vertex }),
            Some(&color) if color == 0 || color > budget => {
                violations.push(ColoringViolation::OverBudget { vertex, color, budget });
            }
            Some(_) => {}
        }
    }

    for &(u, v) in &graph.edges {
        if let (Some(&cu), Some(&cv)) = (
            coloring.get(&u.to_string()),
            coloring.get(&v.to_string()),
        ) {
            if cu == cv {
                violations.push(ColoringViolation::Conflict { u, v, color: cu });
            }
        }
    }

    violations
}
