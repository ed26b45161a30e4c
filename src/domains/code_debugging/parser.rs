//! Extracts fixed code from agent responses.

use std::sync::OnceLock;

use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<code>\s*(.*?)\s*</code>").expect("pattern is valid"))
}

fn python_fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?s)```python\s*(.*?)\s*```").expect("pattern is valid"))
}

fn bare_fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)```\s*(.*?)\s*```").expect("pattern is valid"))
}

/// Extract the fixed code from a response.
///
/// Prefers `<code></code>` tags, then a ```` ```python ```` fence, then any
/// bare fence, and finally falls back to the whole trimmed response (the
/// reply might be just code). The empty string is the "no solution" sentinel.
pub fn parse_fixed_code(response: &str) -> String {
    for pattern in [tag_pattern(), python_fence_pattern(), bare_fence_pattern()] {
        if let Some(caps) = pattern.captures(response) {
            return caps[1].trim().to_string();
        }
    }
    response.trim().to_string()
}

/// Extract the `<exp></exp>` explanation, if any.
pub fn parse_explanation(response: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"(?s)<exp>\s*(.*?)\s*</exp>").expect("pattern is valid"));
    pattern.captures(response).map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_code_tags() {
        let response = "<code>\ndef f():\n    return 1\n</code>\n<exp>off by one</exp>";
        assert_eq!(parse_fixed_code(response), "def f():\n    return 1");
        assert_eq!(parse_explanation(response).as_deref(), Some("off by one"));
    }

    #[test]
    fn falls_back_to_python_fence() {
        let response = "Here you go:\n```python\ndef f():\n    pass\n```";
        assert_eq!(parse_fixed_code(response), "def f():\n    pass");
    }

    #[test]
    fn falls_back_to_bare_fence_then_raw() {
        assert_eq!(parse_fixed_code("```\nx = 1\n```"), "x = 1");
        assert_eq!(parse_fixed_code("  just code  "), "just code");
    }

    #[test]
    fn empty_response_yields_empty_sentinel() {
        assert_eq!(parse_fixed_code("   "), "");
        assert_eq!(parse_explanation("no tags"), None);
    }
}
