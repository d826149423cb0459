//! Recurring symptoms and history-based tips

use std::fmt;

use rusqlite::Connection;

use crate::errors::Result;
use crate::storage::health_log;

/// A (symptom, hour) group must be seen more than this many times
pub const TREND_MIN_EXCLUSIVE: i64 = 2;

/// Symptom text reported at least this often earns tips
pub const FREQUENT_SYMPTOM_MIN: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub symptoms: String,
    pub time_of_day: TimeOfDay,
    pub frequency: i64,
}

impl Trend {
    pub fn describe(&self) -> String {
        format!(
            "Your '{}' occurs {}x during {}",
            self.symptoms, self.frequency, self.time_of_day
        )
    }
}

pub fn analyze_trends(conn: &Connection, student_id: &str) -> Result<Vec<Trend>> {
    let recurring = health_log::recurring_by_hour(conn, student_id, TREND_MIN_EXCLUSIVE)?;
    Ok(recurring
        .into_iter()
        .map(|r| Trend {
            symptoms: r.symptoms,
            time_of_day: TimeOfDay::from_hour(r.hour),
            frequency: r.frequency,
        })
        .collect())
}

const FATIGUE_TIPS: [&str; 2] = [
    "Consider iron-rich foods (spinach, lentils) - common in hostel diets",
    "Maintain a regular sleep schedule (aim for 7-8 hours)",
];

const HEADACHE_TIPS: [&str; 2] = [
    "Take regular screen breaks (20-20-20 rule)",
    "Stay hydrated and maintain good posture",
];

/// Tips for frequently reported symptom texts, without repeats
pub fn tips_for(frequent: &[(String, i64)]) -> Vec<&'static str> {
    let mut tips: Vec<&'static str> = Vec::new();
    for (symptoms, _) in frequent {
        let lower = symptoms.to_lowercase();
        let matched: &[&'static str] = if lower.contains("fatigue") {
            &FATIGUE_TIPS
        } else if lower.contains("headache") {
            &HEADACHE_TIPS
        } else {
            &[]
        };
        for &tip in matched {
            if !tips.contains(&tip) {
                tips.push(tip);
            }
        }
    }
    tips
}

pub fn personalized_tips(conn: &Connection, student_id: &str) -> Result<Vec<&'static str>> {
    let frequent = health_log::frequent_symptoms(conn, student_id, FREQUENT_SYMPTOM_MIN)?;
    tracing::debug!(count = frequent.len(), "Frequent symptoms found");
    Ok(tips_for(&frequent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(22), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn test_trend_description() {
        let trend = Trend {
            symptoms: "headache".to_string(),
            time_of_day: TimeOfDay::Evening,
            frequency: 4,
        };
        assert_eq!(trend.describe(), "Your 'headache' occurs 4x during evening");
    }

    #[test]
    fn test_tips_match_case_insensitively() {
        let frequent = vec![
            ("Constant FATIGUE".to_string(), 3),
            ("headache after class".to_string(), 5),
            ("sore throat".to_string(), 4),
        ];
        let tips = tips_for(&frequent);
        assert_eq!(tips.len(), 4);
        assert_eq!(tips[0], FATIGUE_TIPS[0]);
        assert_eq!(tips[3], HEADACHE_TIPS[1]);
    }

    #[test]
    fn test_tips_not_repeated() {
        let frequent = vec![("fatigue".to_string(), 3), ("fatigue and cough".to_string(), 3)];
        assert_eq!(tips_for(&frequent).len(), 2);
    }
}
