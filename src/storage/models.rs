//! Record types stored in the health log database

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::advice::Advice;
use crate::errors::{HealthBotError, Result};
use crate::triage::Verdict;

/// Oldest age accepted for a profile
pub const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = HealthBotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(HealthBotError::InvalidInput(format!("Unknown gender: {}", other))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    /// Marker shown next to the severity in allergy tables
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Mild => "🟢",
            Severity::Moderate => "🟡",
            Severity::Severe => "🔴",
        }
    }
}

impl FromStr for Severity {
    type Err = HealthBotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            other => Err(HealthBotError::InvalidInput(format!("Unknown severity: {}", other))),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields collected when a new profile is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub student_id: String,
    pub full_name: String,
    pub age: u8,
    pub gender: Gender,
    pub hostel_room: String,
}

impl NewUser {
    /// Reject blank text fields and out-of-range ages
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("Student ID", &self.student_id),
            ("Full name", &self.full_name),
            ("Hostel/Room", &self.hostel_room),
        ] {
            if value.trim().is_empty() {
                return Err(HealthBotError::InvalidInput(format!("{} cannot be empty", field)));
            }
        }
        if self.age > MAX_AGE {
            return Err(HealthBotError::InvalidInput(format!(
                "Age must be between 0 and {}",
                MAX_AGE
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub student_id: String,
    pub full_name: String,
    pub age: u8,
    pub gender: Gender,
    pub hostel_room: String,
    pub created_at: String,
    pub last_login: String,
}

/// A symptom report ready to be appended to the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHealthLog {
    pub student_id: String,
    pub timestamp: String,
    pub symptoms: String,
    pub keywords: Vec<String>,
    pub score: i64,
    pub verdict: Verdict,
    pub advice: Advice,
}

/// A stored symptom report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthLogEntry {
    pub id: i64,
    pub student_id: String,
    pub timestamp: String,
    pub symptoms: String,
    pub keywords: Vec<String>,
    pub score: i64,
    pub verdict: String,
    /// Raw advice column; a JSON object for rows written by this crate
    pub response: String,
}

impl HealthLogEntry {
    /// Decoded advice, if the response column holds the JSON object form
    pub fn advice(&self) -> Option<Advice> {
        serde_json::from_str(&self.response).ok()
    }

    /// Date part of the timestamp
    pub fn date(&self) -> &str {
        self.timestamp.split(' ').next().unwrap_or(&self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCondition {
    pub condition: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_ongoing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalCondition {
    pub id: i64,
    pub student_id: String,
    pub condition: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_ongoing: bool,
    pub created_at: String,
}

impl MedicalCondition {
    /// "Ongoing", "Ended: <date>" or "Unknown"
    pub fn status(&self) -> String {
        if self.is_ongoing {
            return "Ongoing".to_string();
        }
        match self.end_date.as_deref() {
            Some(end) if !end.is_empty() => format!("Ended: {}", end),
            _ => "Unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAllergy {
    pub allergy_type: String,
    pub name: String,
    pub severity: Severity,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allergy {
    pub id: i64,
    pub student_id: String,
    pub allergy_type: String,
    pub name: String,
    pub severity: Severity,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: Option<String>,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyContact {
    pub id: i64,
    pub student_id: String,
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: Option<String>,
    pub is_primary: bool,
    pub created_at: String,
}
