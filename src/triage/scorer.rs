//! Symptom scorer
//!
//! Lower-cases the report and adds a condition's weight for every one of
//! its keywords found as a substring. Keywords shared by two conditions
//! count once per condition.

use crate::triage::table::KeywordTable;
use serde::{Deserialize, Serialize};

/// Keywords found in a report and their cumulative severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Matched keywords in table order (duplicates allowed)
    pub matched_keywords: Vec<String>,
    /// Sum of the weights of every matched (condition, keyword) pair
    pub score: i64,
}

impl AnalysisResult {
    pub fn has_matches(&self) -> bool {
        !self.matched_keywords.is_empty()
    }

    /// Keywords joined for prompts and tables
    pub fn keywords_joined(&self) -> String {
        self.matched_keywords.join(", ")
    }
}

/// Score free text against the keyword table
pub fn analyze(text: &str, table: &KeywordTable) -> AnalysisResult {
    let lowered = text.to_lowercase();
    let mut result = AnalysisResult::default();

    for condition in table.conditions() {
        for keyword in &condition.keywords {
            if lowered.contains(keyword.as_str()) {
                result.matched_keywords.push(keyword.clone());
                result.score = result.score.saturating_add(condition.weight);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> KeywordTable {
        KeywordTable::empty()
            .with_condition("fever", &["fever", "chills"], 2)
            .with_condition("cold", &["cough"], 1)
    }

    #[test]
    fn test_fever_and_cough() {
        let result = analyze("I have a fever and a cough", &sample_table());
        assert_eq!(result.matched_keywords, vec!["fever", "cough"]);
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_case_insensitive_input() {
        let result = analyze("FEVER with CHILLS", &sample_table());
        assert_eq!(result.matched_keywords, vec!["fever", "chills"]);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_substring_match() {
        // "coughing" contains "cough"
        let result = analyze("constant coughing", &sample_table());
        assert_eq!(result.matched_keywords, vec!["cough"]);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_no_match() {
        let result = analyze("my knee hurts", &sample_table());
        assert!(!result.has_matches());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_table() {
        let result = analyze("fever cough chills", &KeywordTable::empty());
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_shared_keyword_counts_per_condition() {
        let table = KeywordTable::empty()
            .with_condition("flu", &["fever"], 2)
            .with_condition("dengue", &["fever", "rash"], 3);
        let result = analyze("high fever", &table);
        assert_eq!(result.matched_keywords, vec!["fever", "fever"]);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_keyword_repeated_in_text_counts_once() {
        let result = analyze("fever fever fever", &sample_table());
        assert_eq!(result.matched_keywords, vec!["fever"]);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_negative_weight_is_summed() {
        let table = KeywordTable::empty()
            .with_condition("fever", &["fever"], 2)
            .with_condition("reassurance", &["mild"], -3);
        let result = analyze("mild fever", &table);
        assert_eq!(result.score, -1);
    }

    #[test]
    fn test_uppercase_keyword_never_matches() {
        let table = KeywordTable::empty().with_condition("fever", &["Fever"], 2);
        let result = analyze("Fever", &table);
        assert!(!result.has_matches());
    }

    #[test]
    fn test_keywords_joined() {
        let result = analyze("fever and cough", &sample_table());
        assert_eq!(result.keywords_joined(), "fever, cough");
    }
}
