//! Splits a generated reply into its two labelled sections
//!
//! A missing label yields the fixed fallback text for that section.

use crate::advice::{Advice, DOCTOR_LABEL, DOCTOR_PARSE_FALLBACK, REMEDY_LABEL, REMEDY_PARSE_FALLBACK};

/// Text between the first occurrence of `label` and its next occurrence (or the end)
fn section_after<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    let start = text.find(label)? + label.len();
    let rest = &text[start..];
    Some(match rest.find(label) {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Extract remedy and doctor advice from a reply
pub fn parse_advice(text: &str) -> Advice {
    let remedy = match section_after(text, REMEDY_LABEL) {
        Some(section) => section
            .split(DOCTOR_LABEL)
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
        None => REMEDY_PARSE_FALLBACK.to_string(),
    };

    let doctor_advice = match section_after(text, DOCTOR_LABEL) {
        Some(section) => section.trim().to_string(),
        None => DOCTOR_PARSE_FALLBACK.to_string(),
    };

    Advice {
        remedy,
        doctor_advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_reply() {
        let reply = format!(
            "{} Drink warm fluids and rest.\n{} If fever lasts more than three days.",
            REMEDY_LABEL, DOCTOR_LABEL
        );
        let advice = parse_advice(&reply);
        assert_eq!(advice.remedy, "Drink warm fluids and rest.");
        assert_eq!(advice.doctor_advice, "If fever lasts more than three days.");
    }

    #[test]
    fn test_preamble_is_ignored() {
        let reply = format!(
            "Here is my advice:\n\n{}  Rest.  \n\n{}  Soon.  ",
            REMEDY_LABEL, DOCTOR_LABEL
        );
        let advice = parse_advice(&reply);
        assert_eq!(advice.remedy, "Rest.");
        assert_eq!(advice.doctor_advice, "Soon.");
    }

    #[test]
    fn test_missing_remedy_label() {
        let reply = format!("Rest a lot. {} Tomorrow.", DOCTOR_LABEL);
        let advice = parse_advice(&reply);
        assert_eq!(advice.remedy, REMEDY_PARSE_FALLBACK);
        assert_eq!(advice.doctor_advice, "Tomorrow.");
    }

    #[test]
    fn test_missing_doctor_label() {
        let reply = format!("{} Rest a lot.", REMEDY_LABEL);
        let advice = parse_advice(&reply);
        assert_eq!(advice.remedy, "Rest a lot.");
        assert_eq!(advice.doctor_advice, DOCTOR_PARSE_FALLBACK);
    }

    #[test]
    fn test_no_labels() {
        let advice = parse_advice("I cannot help with that.");
        assert_eq!(advice.remedy, REMEDY_PARSE_FALLBACK);
        assert_eq!(advice.doctor_advice, DOCTOR_PARSE_FALLBACK);
    }

    #[test]
    fn test_repeated_label_truncates_section() {
        let reply = format!(
            "{} First. {} Second. {} Later.",
            REMEDY_LABEL, REMEDY_LABEL, DOCTOR_LABEL
        );
        let advice = parse_advice(&reply);
        assert_eq!(advice.remedy, "First.");
        assert_eq!(advice.doctor_advice, "Later.");
    }
}
