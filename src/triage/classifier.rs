//! Triage bands derived from a severity score

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (exclusive) of the Home Care band
pub const MONITOR_THRESHOLD: i64 = 3;

/// Upper bound (inclusive) of the Monitor band
pub const URGENT_THRESHOLD: i64 = 5;

/// Triage verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    HomeCare,
    Monitor,
    UrgentCare,
}

impl Verdict {
    /// Plain label, as persisted
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::HomeCare => "Home Care",
            Verdict::Monitor => "Monitor",
            Verdict::UrgentCare => "Urgent Care",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Verdict::HomeCare => "🟢",
            Verdict::Monitor => "🟡",
            Verdict::UrgentCare => "🔴",
        }
    }

    /// Whether the verdict calls for the attention signal
    pub fn is_urgent(&self) -> bool {
        matches!(self, Verdict::UrgentCare)
    }

    /// Parse a stored verdict, tolerating a leading emoji marker
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        [Verdict::HomeCare, Verdict::Monitor, Verdict::UrgentCare]
            .into_iter()
            .find(|v| trimmed == v.label() || trimmed.ends_with(&format!(" {}", v.label())))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a score to its triage band
pub fn classify(score: i64) -> Verdict {
    if score < MONITOR_THRESHOLD {
        Verdict::HomeCare
    } else if score <= URGENT_THRESHOLD {
        Verdict::Monitor
    } else {
        Verdict::UrgentCare
    }
}
