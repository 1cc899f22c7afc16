//! Query Canonicalization & Preprocessing
//!
//! Normalizes free text into a comparable form and parses a query once
//! into the pieces the scorer needs.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Canonicalize text for comparison.
///
/// NFKC-folds, lower-cases, maps every non-alphanumeric, non-whitespace
/// character to a space, then collapses whitespace runs and trims. Total
/// and idempotent: the strip/collapse pass runs last, so any combining
/// mark exposed by case folding is swept into whitespace.
pub fn normalize(text: &str) -> String {
    let folded: String = text.nfkc().collect::<String>().to_lowercase();

    let spaced: String = folded
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parsed and preprocessed search query
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Original unmodified query
    pub raw: String,
    /// Canonical form used for exact and substring comparison
    pub normalized: String,
    /// Word tokens of the normalized form (empties discarded)
    pub words: Vec<String>,
}

impl ParsedQuery {
    /// Parse a query into its components. Normalization and tokenization
    /// happen exactly once per query.
    pub fn parse(query: &str) -> Self {
        let normalized = normalize(query);
        let words = normalized
            .unicode_words()
            .map(|w| w.to_string())
            .collect();

        ParsedQuery {
            raw: query.to_string(),
            normalized,
            words,
        }
    }
}
