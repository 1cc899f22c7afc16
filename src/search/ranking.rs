//! Relevance Scoring
//!
//! Computes a non-negative relevance score for one knowledge-base entry
//! against one parsed query. Contributions are additive across
//! independent checks; the weight tables below are the single source of
//! truth for the scoring contract.

use super::fuzzy::{fuzzy_match, FUZZY_THRESHOLD};
use super::parser::{normalize, ParsedQuery};
use crate::knowledge::SymptomEntry;
use unicode_segmentation::UnicodeSegmentation;

/// Weights for the three-tier field test: exact equality, substring
/// containment, fuzzy match. Only the highest tier that holds fires.
#[derive(Debug, Clone, Copy)]
pub struct TierWeights {
    pub exact: u32,
    pub substring: u32,
    pub fuzzy: u32,
}

/// Canonical symptom name
pub const TITLE: TierWeights = TierWeights {
    exact: 100,
    substring: 80,
    fuzzy: 70,
};

/// Each clinical synonym, scored independently
pub const MEDICAL_TERM: TierWeights = TierWeights {
    exact: 95,
    substring: 75,
    fuzzy: 65,
};

/// Each patient-facing phrasing, scored independently
pub const COMMON_TERM: TierWeights = TierWeights {
    exact: 85,
    substring: 65,
    fuzzy: 55,
};

/// Classification code equal to the whitespace-stripped, case-folded query
pub const CODE_MATCH: u32 = 90;

/// Multi-word query: every query word matched against one term
pub const ALL_WORDS_BONUS: u32 = 60;

/// Multi-word query: more than half the query words matched against one term
pub const MOST_WORDS_BONUS: u32 = 40;

/// Score one entry against a parsed query.
///
/// Every check below contributes independently; an entry can earn the
/// exact-synonym weight and the urgency bonus at once. A zero total means
/// no match at all and the orchestrator drops the entry.
pub fn score_entry(entry: &SymptomEntry, query: &ParsedQuery) -> u32 {
    let mut score = 0u32;

    // Canonical name: single three-tier check
    score += tier_score(&entry.symptom, query, &TITLE);

    // Synonym lists: three-tier check per term, accumulated
    for term in &entry.medical_terms {
        score += tier_score(term, query, &MEDICAL_TERM);
    }
    for term in &entry.common_terms {
        score += tier_score(term, query, &COMMON_TERM);
    }

    // Classification codes: exact match on the folded, whitespace-free form
    let code_query = fold_code(&query.raw);
    for code in &entry.codes {
        if fold_code(code) == code_query {
            score += CODE_MATCH;
        }
    }

    // Multi-word decomposition, per term
    if query.words.len() > 1 {
        score += multi_word_score(entry, query);
    }

    // An entry that earned nothing from any field is not a match. The
    // urgency bonus applies exactly once to matches, so the zero score
    // stays meaningful as the orchestrator's drop criterion.
    if score == 0 {
        return 0;
    }

    score + entry.urgency.score_bonus()
}

/// Three-tier field test. Exact, substring and fuzzy are mutually
/// exclusive, evaluated in that order.
fn tier_score(field: &str, query: &ParsedQuery, weights: &TierWeights) -> u32 {
    let field_normalized = normalize(field);

    if field_normalized == query.normalized {
        weights.exact
    } else if field_normalized.contains(&query.normalized) {
        weights.substring
    } else if fuzzy_match(field, &query.raw, FUZZY_THRESHOLD) {
        weights.fuzzy
    } else {
        0
    }
}

/// Case-fold a code or query for code comparison, dropping all whitespace
fn fold_code(text: &str) -> String {
    text.split_whitespace().collect::<String>().to_lowercase()
}

/// Bonus for multi-word queries: each term (canonical name plus both
/// synonym lists) is checked independently against the query words. A
/// query word counts as matched if it and a term word contain one another
/// either way, or fuzzy-match.
fn multi_word_score(entry: &SymptomEntry, query: &ParsedQuery) -> u32 {
    let mut bonus = 0u32;

    let all_terms = std::iter::once(&entry.symptom)
        .chain(entry.medical_terms.iter())
        .chain(entry.common_terms.iter());

    for term in all_terms {
        let term_normalized = normalize(term);
        let term_words: Vec<&str> = term_normalized.unicode_words().collect();

        let matched = query
            .words
            .iter()
            .filter(|query_word| {
                term_words.iter().any(|term_word| {
                    term_word.contains(query_word.as_str())
                        || query_word.contains(term_word)
                        || fuzzy_match(term_word, query_word, FUZZY_THRESHOLD)
                })
            })
            .count();

        if matched == query.words.len() {
            bonus += ALL_WORDS_BONUS;
        } else if matched * 2 > query.words.len() {
            bonus += MOST_WORDS_BONUS;
        }
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Urgency;

    fn entry(symptom: &str, urgency: Urgency) -> SymptomEntry {
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

    #[test]
    fn test_exact_title_match() {
        let e = entry("dyspnea", Urgency::Low);
        let score = score_entry(&e, &ParsedQuery::parse("dyspnea"));
        // exact title + low urgency bonus
        assert_eq!(score, TITLE.exact + 2);
    }

    #[test]
    fn test_title_tiers_are_mutually_exclusive() {
        let e = entry("abdominal pain", Urgency::Low);

        // Substring, not exact
        let substring = score_entry(&e, &ParsedQuery::parse("abdominal"));
        assert_eq!(substring, TITLE.substring + 2);

        // Fuzzy only: a typo that is neither equal nor contained, and too
        // far off for the word-level bonus
        let fuzzy = score_entry(&e, &ParsedQuery::parse("abdominal pane"));
        assert_eq!(fuzzy, TITLE.fuzzy + 2);
    }

    #[test]
    fn test_medical_terms_accumulate() {
        let mut e = entry("breathing trouble", Urgency::Low);
        e.medical_terms = vec!["dyspnea".to_string()];
        let one_term = score_entry(&e, &ParsedQuery::parse("dyspnea"));

        e.medical_terms.push("dyspnoea".to_string());
        let two_terms = score_entry(&e, &ParsedQuery::parse("dyspnea"));

        // Monotonic: another matching synonym never lowers the score
        assert!(two_terms > one_term);
        assert_eq!(two_terms - one_term, MEDICAL_TERM.fuzzy);
    }

    #[test]
    fn test_common_term_weights_below_medical() {
        let mut medical = entry("palpitations", Urgency::Low);
        medical.medical_terms = vec!["racing heart".to_string()];
        let mut common = entry("palpitations", Urgency::Low);
        common.common_terms = vec!["racing heart".to_string()];

        let q = ParsedQuery::parse("racing heart");
        assert!(score_entry(&medical, &q) > score_entry(&common, &q));
    }

    #[test]
    fn test_code_match_ignores_case_and_whitespace() {
        let mut e = entry("dyspnea", Urgency::Low);
        e.codes = vec!["R06.02".to_string()];

        let folded = score_entry(&e, &ParsedQuery::parse("r06.02"));
        let spaced = score_entry(&e, &ParsedQuery::parse(" R06.02 "));
        assert!(folded >= CODE_MATCH);
        assert_eq!(folded, spaced);
    }

    #[test]
    fn test_multi_word_all_words_beats_partial() {
        let full = entry("chest pain", Urgency::Low);
        let partial = entry("back pain", Urgency::Low);

        let q = ParsedQuery::parse("chest pain");
        assert!(score_entry(&full, &q) > score_entry(&partial, &q));
    }

    #[test]
    fn test_multi_word_bonus_only_for_multi_word_queries() {
        let e = entry("pain", Urgency::Low);
        let score = score_entry(&e, &ParsedQuery::parse("pain"));
        assert_eq!(score, TITLE.exact + 2);
    }

    #[test]
    fn test_urgency_bonus_always_applies() {
        let low = entry("fever", Urgency::Low);
        let emergency = entry("fever", Urgency::Emergency);

        let q = ParsedQuery::parse("fever");
        assert_eq!(
            score_entry(&emergency, &q) - score_entry(&low, &q),
            Urgency::Emergency.score_bonus() - Urgency::Low.score_bonus()
        );
    }

    #[test]
    fn test_no_match_scores_zero() {
        let e = entry("syncope", Urgency::Emergency);
        let score = score_entry(&e, &ParsedQuery::parse("xyzzy"));
        assert_eq!(score, 0);
    }
}
