//! Property tests for the symptom scorer and triage classifier

use healthbot::triage::{analyze, classify, KeywordTable, Verdict};
use quickcheck_macros::quickcheck;

const KEYWORDS: [&str; 6] = ["fever", "cough", "headache", "rash", "chills", "nausea"];

fn table_from_weights(weights: &[i8]) -> KeywordTable {
    let mut table = KeywordTable::empty();
    for (i, weight) in weights.iter().take(4).enumerate() {
        let keywords = [KEYWORDS[i], KEYWORDS[(i + 2) % KEYWORDS.len()]];
        table = table.with_condition(&format!("condition-{}", i), &keywords, *weight as i64);
    }
    table
}

#[quickcheck]
fn analyze_is_idempotent(text: String, weights: Vec<i8>) -> bool {
    let table = table_from_weights(&weights);
    analyze(&text, &table) == analyze(&text, &table)
}

#[quickcheck]
fn text_without_letters_never_matches(text: String, weights: Vec<i8>) -> bool {
    let stripped: String = text.chars().filter(|c| !c.is_alphabetic()).collect();
    let result = analyze(&stripped, &table_from_weights(&weights));
    result.matched_keywords.is_empty() && result.score == 0
}

#[quickcheck]
fn score_is_sum_over_matching_pairs(picks: Vec<u8>, weights: Vec<i8>) -> bool {
    let text: Vec<&str> = picks.iter().map(|p| KEYWORDS[*p as usize % KEYWORDS.len()]).collect();
    let text = text.join(" ");
    let table = table_from_weights(&weights);
    let result = analyze(&text, &table);

    let mut expected_score = 0i64;
    let mut expected_matches = 0usize;
    for condition in table.conditions() {
        for keyword in &condition.keywords {
            if text.contains(keyword.as_str()) {
                expected_score += condition.weight;
                expected_matches += 1;
            }
        }
    }
    result.score == expected_score && result.matched_keywords.len() == expected_matches
}

#[quickcheck]
fn matching_ignores_input_case(picks: Vec<u8>, weights: Vec<i8>) -> bool {
    let text: Vec<&str> = picks.iter().map(|p| KEYWORDS[*p as usize % KEYWORDS.len()]).collect();
    let text = text.join(" and ");
    let table = table_from_weights(&weights);
    analyze(&text, &table) == analyze(&text.to_uppercase(), &table)
}

#[quickcheck]
fn appending_text_keeps_earlier_matches(a: String, b: String, weights: Vec<i8>) -> bool {
    let table = table_from_weights(&weights);
    let before = analyze(&a, &table);
    let after = analyze(&format!("{}{}", a, b), &table);
    before
        .matched_keywords
        .iter()
        .all(|kw| after.matched_keywords.contains(kw))
}

#[quickcheck]
fn classify_bands_are_total(score: i64) -> bool {
    match classify(score) {
        Verdict::HomeCare => score < 3,
        Verdict::Monitor => (3..=5).contains(&score),
        Verdict::UrgentCare => score > 5,
    }
}

#[test]
fn test_band_edges() {
    assert_eq!(classify(2), Verdict::HomeCare);
    assert_eq!(classify(3), Verdict::Monitor);
    assert_eq!(classify(5), Verdict::Monitor);
    assert_eq!(classify(6), Verdict::UrgentCare);
    assert_eq!(classify(-4), Verdict::HomeCare);
}

#[test]
fn test_fever_and_cough_scenario() {
    let table = KeywordTable::empty()
        .with_condition("fever", &["fever", "chills"], 2)
        .with_condition("cold", &["cough"], 1);
    let result = analyze("I have a fever and a cough", &table);
    assert_eq!(result.matched_keywords, vec!["fever", "cough"]);
    assert_eq!(result.score, 3);
    assert_eq!(classify(result.score), Verdict::Monitor);
}

#[test]
fn test_empty_table_scenario() {
    let result = analyze("I have a fever and a cough", &KeywordTable::empty());
    assert!(result.matched_keywords.is_empty());
    assert_eq!(result.score, 0);
    assert_eq!(classify(result.score), Verdict::HomeCare);
}

#[test]
fn test_bundled_keyword_table_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("symptoms_db.json");
    let table = KeywordTable::load(&path).unwrap();
    assert_eq!(table.conditions()[0].name, "fever");
    let result = analyze("High temperature with CHILLS", &table);
    assert_eq!(result.matched_keywords, vec!["chills", "high temperature"]);
    assert_eq!(result.score, 4);
}
