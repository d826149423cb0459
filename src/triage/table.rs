//! Keyword table: condition → keywords + weight
//!
//! Loaded once from a JSON object of the form
//! `{"fever": {"keywords": ["fever", "chills"], "weight": 2}, ...}`.
//! Object key order is the iteration order of the table.

use crate::errors::{HealthBotError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default keyword table file name
pub const DEFAULT_KEYWORD_TABLE: &str = "symptoms_db.json";

/// One named health concern with its trigger keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub name: String,
    pub keywords: Vec<String>,
    pub weight: i64,
}

/// On-disk shape of a condition (the name is the object key)
#[derive(Debug, Deserialize)]
struct ConditionSpec {
    keywords: Vec<String>,
    weight: i64,
}

/// Immutable, ordered condition table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    conditions: Vec<ConditionEntry>,
}

impl KeywordTable {
    /// Build a table from entries, keeping their order
    pub fn new(conditions: Vec<ConditionEntry>) -> Self {
        Self { conditions }
    }

    /// Table with no conditions; every input scores 0
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a condition (builder style)
    pub fn with_condition(mut self, name: &str, keywords: &[&str], weight: i64) -> Self {
        self.conditions.push(ConditionEntry {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
        });
        self
    }

    /// Parse the JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| HealthBotError::KeywordTable(format!("Failed to parse table: {}", e)))?;

        let mut conditions = Vec::with_capacity(map.len());
        for (name, value) in map {
            let spec: ConditionSpec = serde_json::from_value(value).map_err(|e| {
                HealthBotError::KeywordTable(format!("Invalid condition '{}': {}", name, e))
            })?;
            conditions.push(ConditionEntry {
                name,
                keywords: spec.keywords,
                weight: spec.weight,
            });
        }

        Ok(Self { conditions })
    }

    /// Load the table from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HealthBotError::KeywordTable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let table = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            conditions = table.len(),
            "Keyword table loaded"
        );
        Ok(table)
    }

    /// Conditions in table order
    pub fn conditions(&self) -> &[ConditionEntry] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_preserves_key_order() {
        let json = r#"{
            "migraine": {"keywords": ["headache"], "weight": 2},
            "cold": {"keywords": ["cough", "sneeze"], "weight": 1},
            "asthma": {"keywords": ["wheeze"], "weight": 3}
        }"#;
        let table = KeywordTable::from_json_str(json).unwrap();
        let names: Vec<&str> = table.conditions().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["migraine", "cold", "asthma"]);
        assert_eq!(table.conditions()[1].keywords, vec!["cough", "sneeze"]);
    }

    #[test]
    fn test_parse_accepts_negative_weight() {
        let json = r#"{"reassurance": {"keywords": ["mild"], "weight": -1}}"#;
        let table = KeywordTable::from_json_str(json).unwrap();
        assert_eq!(table.conditions()[0].weight, -1);
    }

    #[test]
    fn test_parse_rejects_missing_weight() {
        let json = r#"{"fever": {"keywords": ["fever"]}}"#;
        let err = KeywordTable::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("fever"));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(KeywordTable::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"fever": {{"keywords": ["fever"], "weight": 2}}}}"#).unwrap();

        let table = KeywordTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = KeywordTable::load(Path::new("/nonexistent/symptoms_db.json"));
        assert!(matches!(result, Err(HealthBotError::KeywordTable(_))));
    }

    #[test]
    fn test_builder() {
        let table = KeywordTable::empty()
            .with_condition("fever", &["fever", "chills"], 2)
            .with_condition("cold", &["cough"], 1);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(KeywordTable::empty().is_empty());
    }
}
