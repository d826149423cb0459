//! Gate for symptom text, run before scoring

use thiserror::Error;

/// Minimum symptom description length, in characters
pub const MIN_SYMPTOM_CHARS: usize = 3;

/// Reasons a symptom description is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymptomInputError {
    #[error("Please provide at least 3 characters.")]
    TooShort,

    #[error("Please avoid using numbers in your symptoms description.")]
    ContainsDigits,
}

/// Accept text of at least three characters with no decimal digits
pub fn validate_symptoms(text: &str) -> Result<(), SymptomInputError> {
    if text.chars().count() < MIN_SYMPTOM_CHARS {
        return Err(SymptomInputError::TooShort);
    }
    if text.chars().any(|c| c.is_ascii_digit()) {
        return Err(SymptomInputError::ContainsDigits);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_text() {
        assert!(validate_symptoms("headache and nausea").is_ok());
        assert!(validate_symptoms("flu").is_ok());
    }

    #[test]
    fn test_rejects_short() {
        assert_eq!(validate_symptoms(""), Err(SymptomInputError::TooShort));
        assert_eq!(validate_symptoms("ab"), Err(SymptomInputError::TooShort));
    }

    #[test]
    fn test_length_counts_characters() {
        // three characters, more than three bytes
        assert!(validate_symptoms("été").is_ok());
    }

    #[test]
    fn test_rejects_digits() {
        assert_eq!(
            validate_symptoms("fever for 3 days"),
            Err(SymptomInputError::ContainsDigits)
        );
    }

    #[test]
    fn test_numeric_symbols_are_not_digits() {
        assert!(validate_symptoms("fever for ½ day").is_ok());
        assert!(validate_symptoms("stage Ⅱ rash").is_ok());
        assert_eq!(
            validate_symptoms("cough since 2nd"),
            Err(SymptomInputError::ContainsDigits)
        );
    }

    #[test]
    fn test_short_checked_before_digits() {
        assert_eq!(validate_symptoms("1"), Err(SymptomInputError::TooShort));
    }
}
