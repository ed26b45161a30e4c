//! Extracts color assignments from agent responses.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

fn assignment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\((\w+)\s+(\d+)\)").expect("pattern is valid"))
}

/// Parse `(vertex color)` lines out of a response, ignoring surrounding prose.
///
/// An empty map is the sentinel for "no solution found"; parsing never fails.
pub fn parse_coloring(response: &str) -> BTreeMap<String, u32> {
    let mut assignment = BTreeMap::new();
    for line in response.lines() {
        if let Some(caps) = assignment_pattern().captures(line.trim()) {
            if let Ok(color) = caps[2].parse::<u32>() {
                assignment.insert(caps[1].to_string(), color);
            }
        }
    }
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignments_among_prose() {
        let response = "Here is my coloring:\n(1 1)\n(2 2)\nsome commentary\n(3 1)\n";
        let parsed = parse_coloring(response);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["1"], 1);
        assert_eq!(parsed["2"], 2);
        assert_eq!(parsed["3"], 1);
    }

    #[test]
    fn later_assignment_wins() {
        let parsed = parse_coloring("(1 1)\n(1 3)");
        assert_eq!(parsed["1"], 3);
    }

    #[test]
    fn unparseable_response_yields_empty_sentinel() {
        assert!(parse_coloring("I cannot solve this problem.").is_empty());
    }
}
