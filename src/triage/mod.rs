//! Symptom triage: keyword table, scorer, classifier and input gate

pub mod classifier;
pub mod scorer;
pub mod table;
pub mod validator;

pub use classifier::{classify, Verdict};
pub use scorer::{analyze, AnalysisResult};
pub use table::{ConditionEntry, KeywordTable, DEFAULT_KEYWORD_TABLE};
pub use validator::{validate_symptoms, SymptomInputError};
