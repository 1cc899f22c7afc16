//! Symptom search with fuzzy matching and urgency-aware ranking
//!
//! Pure functions over the static knowledge base: no state, no I/O, no
//! caching. Control flow per query is strictly bottom-up: normalize,
//! score every entry, filter, sort, truncate.

pub mod engine;
pub mod fuzzy;
pub mod parser;
pub mod ranking;

pub use engine::{
    best_match, conditions_for_symptom, differentials_for, red_flags_for, search_by_code,
    search_symptoms, tools_for_symptom, DEFAULT_MAX_RESULTS,
};
pub use fuzzy::{fuzzy_match, levenshtein, FUZZY_THRESHOLD};
pub use parser::{normalize, ParsedQuery};
