//! Console reporting for solve outcomes.

use console::style;

use crate::domain::models::{SolveOutcome, SolverTier};

/// Print the end-of-run summary.
pub fn print_outcome<S>(outcome: &SolveOutcome<S>, render_solution: impl Fn(&S) -> String) {
    let divider = "=".repeat(60);
    println!("\n{divider}");
    println!("{}", style("RESULTS").bold());
    println!("{divider}");

    let solved = if outcome.solved {
        style("yes").green().bold()
    } else {
        style("no").red().bold()
    };
    println!("Solved: {solved}");

    let tier = match outcome.tier {
        SolverTier::S1 => style("S1 (fast)").green(),
        SolverTier::S2 => style("S2 (deliberate)").yellow(),
        SolverTier::None => style("none").red(),
    };
    println!("Solution found by: {tier}");
    println!("Iterations: {}", outcome.iterations);
    println!("S1 time: {:.2}s", outcome.s1_time.as_secs_f64());
    println!("S2 time: {:.2}s", outcome.s2_time.as_secs_f64());
    println!("Total time: {:.2}s", outcome.total_time.as_secs_f64());

    if let Some(solution) = &outcome.solution {
        println!("\nSolution:\n{}", render_solution(solution));
    }
    println!("{divider}\n");
}

/// Shorten long solution text for display.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let shortened: String = text.chars().take(max_chars).collect();
        format!("{shortened}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_preserves_short_text() {
        assert_eq!(truncate_for_display("short", 500), "short");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate_for_display("abcdef", 3), "abc...");
    }
}
