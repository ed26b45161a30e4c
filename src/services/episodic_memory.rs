//! Episodic memory: an append-only log of past (problem, solution) pairs with
//! lexical similarity retrieval.
//!
//! Retrieval is a BM25 bag-of-words ranking over the stored problem
//! representations. Lexical ranking (not embeddings) keeps it dependency-free
//! and deterministic, which is adequate here: problem representations are
//! structured, near-duplicate-free text where keyword overlap tracks true
//! similarity.

use std::collections::{HashMap, HashSet};

use crate::domain::models::MemoryEntry;

const BM25_K1: f64 = 1.5;
const BM25_B: f64 = 0.75;

/// Process-lifetime store of solved instances.
///
/// Unbounded by design: no deduplication, no eviction. Entries are never
/// mutated after insertion, and retrieval only sees entries inserted before
/// the call.
#[derive(Debug, Default)]
pub struct EpisodicMemory {
    entries: Vec<MemoryEntry>,
}

impl EpisodicMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a solved (problem, solution) pair.
    pub fn add(&mut self, problem_repr: impl Into<String>, solution_repr: impl Into<String>) {
        self.entries.push(MemoryEntry::new(problem_repr, solution_repr));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    /// Return up to `k` entries whose problem representation is most similar
    /// to `query`, best first.
    ///
    /// Entries with zero lexical overlap are excluded. Exact score ties keep
    /// insertion order (earlier entries first). An empty store yields an
    /// empty vec; callers treat that as "no memory", not an error.
    pub fn retrieve_similar(&self, query: &str, k: usize) -> Vec<MemoryEntry> {
        if self.entries.is_empty() || k == 0 {
            return Vec::new();
        }

        let docs: Vec<Vec<String>> = self
            .entries
            .iter()
            .map(|e| tokenize(&e.problem_repr))
            .collect();
        let doc_count = docs.len() as f64;
        let avg_len = docs.iter().map(Vec::len).sum::<usize>() as f64 / doc_count;

        // Document frequency per term.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in &docs {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let query_terms: HashSet<String> = tokenize(query).into_iter().collect();

        let mut scored: Vec<(usize, f64)> = docs
            .iter()
            .enumerate()
            .map(|(idx, doc)| {
                let doc_len = doc.len() as f64;
                let mut tf: HashMap<&str, usize> = HashMap::new();
                for term in doc {
                    *tf.entry(term).or_insert(0) += 1;
                }

                let score: f64 = query_terms
                    .iter()
                    .filter_map(|term| {
                        let freq = *tf.get(term.as_str())? as f64;
                        let n_docs_with_term = *df.get(term.as_str()).unwrap_or(&0) as f64;
                        let idf = (1.0
                            + (doc_count - n_docs_with_term + 0.5) / (n_docs_with_term + 0.5))
                            .ln();
                        let norm = freq * (BM25_K1 + 1.0)
                            / (freq + BM25_K1 * (1.0 - BM25_B + BM25_B * doc_len / avg_len));
                        Some(idf * norm)
                    })
                    .sum();
                (idx, score)
            })
            .filter(|(_, score)| *score > 0.0)
            .collect();

        // Stable sort: equal scores stay in insertion order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(idx, _)| self.entries[idx].clone())
            .collect()
    }
}

/// Lowercased alphanumeric word tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}
