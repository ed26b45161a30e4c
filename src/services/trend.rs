//! Improvement-trend evaluation across refinement rounds.
//!
//! A short-lived tracker, re-created for every solve attempt, that compares
//! the two most recent feedback rounds and flags stagnation.

use std::collections::HashMap;

use crate::domain::models::FeedbackSignal;

/// Two textual diagnostics at or above this Jaro-Winkler similarity are
/// treated as the same complaint.
const TEXT_SIMILARITY_THRESHOLD: f64 = 0.95;

/// Stagnation detector over one attempt's feedback history.
#[derive(Debug, Default)]
pub struct TrendEvaluator {
    history: Vec<FeedbackSignal>,
}

impl TrendEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one round's feedback, most-recent-last.
    pub fn update(&mut self, signal: FeedbackSignal) {
        self.history.push(signal);
    }

    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// True when the latest feedback shows no measurable reduction in errors
    /// over the previous round.
    ///
    /// With fewer than two samples this is `false`: a trend cannot be judged
    /// from one point. Feedback that switches shape between rounds counts as
    /// no improvement — escalating beats looping on incomparable feedback.
    pub fn no_improvement(&self) -> bool {
        let [.., previous, latest] = self.history.as_slice() else {
            return false;
        };

        match (previous, latest) {
            (FeedbackSignal::Violations(prev), FeedbackSignal::Violations(cur)) => cur >= prev,
            (FeedbackSignal::Text(prev), FeedbackSignal::Text(cur)) => {
                token_multiset(prev) == token_multiset(cur)
                    || strsim::jaro_winkler(prev, cur) >= TEXT_SIMILARITY_THRESHOLD
            }
            _ => true,
        }
    }
}

fn token_multiset(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
    {
        *counts.entry(token.to_lowercase()).or_insert(0) += 1;
    }
    counts
}
