//! Prompt construction for code debugging, after the DebugBench
//! IO-intention template.

use crate::domain::models::MemoryEntry;
use super::DebuggingProblem;

/// Build the debugging prompt: function intention, examples, constraints and
/// the faulty implementation, with episodic examples prepended when present.
pub fn debugging_prompt(problem: &DebuggingProblem, examples: &[MemoryEntry]) -> String {
    let worked_examples = if problem.examples.is_empty() {
        "No examples provided.".to_string()
    } else {
        problem.examples.join("\n")
    };
    let constraints = if problem.constraints.is_empty() {
        "No constraints specified."
    } else {
        &problem.constraints
    };

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
        "Observe the function intention and its corresponding Python3 implementation which is \
complete with no extra context. The implementation is faulty. Your task is to fix up the code \
and explain on the modification in less than 20 words.
You have to write the fixed code again. You should put <code></code> and <exp></exp> on the \
boundary of the code and the explanation. Do not write anything else in your response. Your \
reply should be like this:
<code>
fixed code
</code>
<exp>
short explanation about the bug
</exp>

Function Intention:
{}

Examples:
{worked_examples}

Constraints:
{constraints}

Faulty Python3 Implementation:
{}
",
        problem.description, problem.buggy_code
    ));

    prompt
}
