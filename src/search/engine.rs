//! Search Engine Orchestration
//!
//! Ties together query parsing, scoring and ranking over the static
//! knowledge base: normalize once, score every entry, drop non-matches,
//! sort urgency-first then score, truncate. Every public operation is a
//! pure function of its arguments and the knowledge base.

use super::parser::ParsedQuery;
use super::ranking::score_entry;
use crate::knowledge::{knowledge_base, SymptomEntry};
use std::cmp::Ordering;
use tracing::debug;

/// Default result cap for `search_symptoms`
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// How many matches the condition/tool projections union over
const PROJECTION_RESULTS: usize = 5;

/// Ranked, urgency-aware search over the knowledge base.
///
/// Queries whose trimmed length is under 2 characters return an empty
/// result without scoring. Entries scoring zero are dropped; survivors
/// sort by urgency tier first, relevance score second, with knowledge-base
/// order as the stable tiebreaker. Scores never leave this function.
pub fn search_symptoms(query: &str, max_results: usize) -> Vec<&'static SymptomEntry> {
    if query.trim().chars().count() < 2 {
        return Vec::new();
    }

    let parsed = ParsedQuery::parse(query);

    let mut ranked: Vec<(&'static SymptomEntry, u32)> = knowledge_base()
        .iter()
        .map(|entry| (entry, score_entry(entry, &parsed)))
        .filter(|(_, score)| *score > 0)
        .collect();

    debug!("query '{}' matched {} entries", query, ranked.len());

    // Stable sort, so equal urgency and score keep knowledge-base order
    ranked.sort_by(urgency_then_score);
    ranked.truncate(max_results);

    ranked.into_iter().map(|(entry, _)| entry).collect()
}

/// Composite comparator: urgency tier descending, then score descending
fn urgency_then_score(a: &(&SymptomEntry, u32), b: &(&SymptomEntry, u32)) -> Ordering {
    b.0.urgency
        .cmp(&a.0.urgency)
        .then_with(|| b.1.cmp(&a.1))
}

/// All entries carrying `code`, compared case-insensitively. Exact match
/// only: no normalization, no fuzziness. Knowledge-base order, unranked.
pub fn search_by_code(code: &str) -> Vec<&'static SymptomEntry> {
    let code_folded = code.to_lowercase();

    knowledge_base()
        .iter()
        .filter(|entry| entry.codes.iter().any(|c| c.to_lowercase() == code_folded))
        .collect()
}

/// Condition-catalog identifiers associated with the best matches for a
/// query, deduplicated in order of first appearance.
pub fn conditions_for_symptom(query: &str) -> Vec<String> {
    fn conditions(entry: &SymptomEntry) -> &[String] {
        &entry.associated_conditions
    }
    collect_unique(query, conditions)
}

/// Tool-catalog identifiers associated with the best matches for a query,
/// deduplicated in order of first appearance.
pub fn tools_for_symptom(query: &str) -> Vec<String> {
    fn tools(entry: &SymptomEntry) -> &[String] {
        &entry.associated_tools
    }
    collect_unique(query, tools)
}

fn collect_unique(query: &str, field: fn(&SymptomEntry) -> &[String]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();

    for entry in search_symptoms(query, PROJECTION_RESULTS) {
        for id in field(entry) {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
    }

    ids
}

/// Red flags of the single best match, verbatim; empty when nothing
/// matches. Deliberately not aggregated across matches.
pub fn red_flags_for(query: &str) -> Vec<String> {
    search_symptoms(query, 1)
        .first()
        .map(|entry| entry.red_flags.clone())
        .unwrap_or_default()
}

/// Differential diagnoses of the single best match, verbatim; empty when
/// nothing matches.
pub fn differentials_for(query: &str) -> Vec<String> {
    search_symptoms(query, 1)
        .first()
        .map(|entry| entry.differentials.clone())
        .unwrap_or_default()
}

/// The single best match for a query, if any
pub fn best_match(query: &str) -> Option<&'static SymptomEntry> {
    search_symptoms(query, 1).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Urgency;

    #[test]
    fn test_short_queries_return_nothing() {
        assert!(search_symptoms("", DEFAULT_MAX_RESULTS).is_empty());
        assert!(search_symptoms(" ", DEFAULT_MAX_RESULTS).is_empty());
        assert!(search_symptoms("x", DEFAULT_MAX_RESULTS).is_empty());
        assert!(search_symptoms("  x  ", DEFAULT_MAX_RESULTS).is_empty());
    }

    #[test]
    fn test_exact_title_wins_its_query() {
        let results = search_symptoms("dyspnea", DEFAULT_MAX_RESULTS);
        assert!(!results.is_empty());
        assert_eq!(results[0].symptom, "dyspnea");
    }

    #[test]
    fn test_multi_word_exact_title_wins() {
        let results = search_symptoms("chest pain", DEFAULT_MAX_RESULTS);
        assert!(!results.is_empty());
        assert_eq!(results[0].symptom, "chest pain");
    }

    #[test]
    fn test_urgency_ordering_is_non_increasing() {
        let results = search_symptoms("pain", DEFAULT_MAX_RESULTS);
        assert!(results.len() > 2);
        for pair in results.windows(2) {
            assert!(
                pair[0].urgency >= pair[1].urgency,
                "{} ranked above {}",
                pair[1].symptom,
                pair[0].symptom
            );
        }
    }

    #[test]
    fn test_urgency_outranks_textual_relevance() {
        // "cough" is an exact title hit on the low-urgency cough entry, but
        // hemoptysis (high urgency) matches through its common terms and
        // must come first regardless of raw score.
        let results = search_symptoms("cough", DEFAULT_MAX_RESULTS);
        let hemoptysis_pos = results.iter().position(|e| e.symptom == "hemoptysis");
        let cough_pos = results.iter().position(|e| e.symptom == "cough");
        assert!(hemoptysis_pos.is_some());
        assert!(cough_pos.is_some());
        assert!(hemoptysis_pos < cough_pos);
    }

    #[test]
    fn test_comparator_urgency_override() {
        let emergency = test_entry("worst case", Urgency::Emergency);
        let low = test_entry("best text match", Urgency::Low);

        // Low urgency with a far better score still sorts after
        let mut ranked = vec![(&low, 95u32), (&emergency, 40u32)];
        ranked.sort_by(urgency_then_score);
        assert_eq!(ranked[0].0.symptom, "worst case");
    }

    #[test]
    fn test_comparator_score_breaks_equal_urgency() {
        let a = test_entry("a", Urgency::Medium);
        let b = test_entry("b", Urgency::Medium);

        let mut ranked = vec![(&a, 50u32), (&b, 80u32)];
        ranked.sort_by(urgency_then_score);
        assert_eq!(ranked[0].0.symptom, "b");
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let a = test_entry("first", Urgency::Medium);
        let b = test_entry("second", Urgency::Medium);

        let mut ranked = vec![(&a, 50u32), (&b, 50u32)];
        ranked.sort_by(urgency_then_score);
        assert_eq!(ranked[0].0.symptom, "first");
        assert_eq!(ranked[1].0.symptom, "second");
    }

    #[test]
    fn test_max_results_truncates() {
        let all = search_symptoms("pain", DEFAULT_MAX_RESULTS);
        assert!(all.len() > 3);

        let capped = search_symptoms("pain", 3);
        assert_eq!(capped.len(), 3);
        // The cap keeps the highest-ranked prefix
        let all_names: Vec<&str> = all.iter().map(|e| e.symptom.as_str()).collect();
        let capped_names: Vec<&str> = capped.iter().map(|e| e.symptom.as_str()).collect();
        assert_eq!(capped_names, &all_names[..3]);
    }

    #[test]
    fn test_repeated_queries_are_deterministic() {
        let first: Vec<&str> = search_symptoms("pain", DEFAULT_MAX_RESULTS)
            .iter()
            .map(|e| e.symptom.as_str())
            .collect();
        let second: Vec<&str> = search_symptoms("pain", DEFAULT_MAX_RESULTS)
            .iter()
            .map(|e| e.symptom.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_by_code_is_case_insensitive() {
        let lower = search_by_code("r06.02");
        let upper = search_by_code("R06.02");

        assert!(!lower.is_empty());
        let lower_names: Vec<&str> = lower.iter().map(|e| e.symptom.as_str()).collect();
        let upper_names: Vec<&str> = upper.iter().map(|e| e.symptom.as_str()).collect();
        assert_eq!(lower_names, upper_names);
        assert_eq!(lower_names, vec!["dyspnea"]);
    }

    #[test]
    fn test_search_by_code_unknown_code_is_empty() {
        assert!(search_by_code("Z99.99").is_empty());
        assert!(search_by_code("").is_empty());
    }

    #[test]
    fn test_conditions_projection_unions_and_dedupes() {
        let conditions = conditions_for_symptom("pain");
        assert!(conditions.contains(&"acute-coronary-syndrome".to_string()));

        let unique: std::collections::HashSet<&String> = conditions.iter().collect();
        assert_eq!(unique.len(), conditions.len());
    }

    #[test]
    fn test_tools_projection() {
        let tools = tools_for_symptom("shortness of breath");
        assert!(tools.contains(&"wells-pe".to_string()));
        assert!(tools.contains(&"curb-65".to_string()));
    }

    #[test]
    fn test_projections_empty_for_no_match() {
        assert!(conditions_for_symptom("zzqy").is_empty());
        assert!(tools_for_symptom("zzqy").is_empty());
    }

    #[test]
    fn test_red_flags_surface_top_match_only() {
        let flags = red_flags_for("back pain");
        assert!(flags.contains(&"Saddle anesthesia".to_string()));

        let entry = best_match("back pain").unwrap();
        assert_eq!(entry.symptom, "back pain");
        assert_eq!(flags, entry.red_flags);
    }

    #[test]
    fn test_differentials_for_no_match_is_empty() {
        assert!(differentials_for("zzqy").is_empty());
        assert!(red_flags_for("zzqy").is_empty());
    }

    fn test_entry(symptom: &str, urgency: Urgency) -> SymptomEntry {
        SymptomEntry {
            symptom: symptom.to_string(),
            medical_terms: vec![],
            common_terms: vec![],
            codes: vec![],
            associated_conditions: vec![],
            urgency,
            associated_tools: vec![],
            description: String::new(),
            red_flags: vec![],
            differentials: vec![],
            physical_exam_findings: vec![],
            diagnostic_tests: vec![],
        }
    }
}
