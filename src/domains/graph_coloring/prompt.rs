//! Prompt construction for graph coloring.

use crate::domain::models::MemoryEntry;

/// Build the solving prompt: the graph in DIMACS edge format, the color
/// budget, the required answer format, and optionally a few solved instances
/// from episodic memory.
pub fn coloring_prompt(dimacs: &str, color_budget: u32, examples: &[MemoryEntry]) -> String {
    let mut prompt = String::new();

    if !examples.is_empty() {
        prompt.push_str("--- Similar Past Problems ---\n");
        for (i, example) in examples.iter().enumerate() {
            prompt.push_str(&format!(
                "\nExample {}:\n{}\n{}\n",
                i + 1,
                example.problem_repr,
                example.solution_repr
            ));
        }
        prompt.push_str("\n--- End of Similar Examples ---\n\n");
    }

    prompt.push_str(&format!(
        "Color the following undirected graph using at most {color_budget} colors so that no \
two adjacent vertices share a color. The graph is given in DIMACS edge format: the line \
'p edge V E' declares V vertices (numbered 1 to V) and E edges, and each 'e u v' line is an \
edge between vertices u and v.

{dimacs}

Reply with one line per vertex in the exact form (vertex color), using colors 1 to \
{color_budget}. Do not write anything else.
"
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_graph_and_budget() {
        let prompt = coloring_prompt("p edge 2 1\ne 1 2", 2, &[]);
        assert!(prompt.contains("p edge 2 1"));
        assert!(prompt.contains("at most 2 colors"));
        assert!(!prompt.contains("Similar Past Problems"));
    }

    #[test]
    fn prompt_prepends_examples() {
        let examples = vec![MemoryEntry::new("p edge 1 0", "(1 1)")];
        let prompt = coloring_prompt("p edge 2 1\ne 1 2", 2, &examples);
        assert!(prompt.starts_with("--- Similar Past Problems ---"));
        assert!(prompt.contains("(1 1)"));
    }
}
