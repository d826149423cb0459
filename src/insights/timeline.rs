//! Per-day report counts for the last week

use chrono::{Duration, NaiveDate};
use rusqlite::Connection;

use crate::errors::Result;
use crate::storage::health_log;

/// Days shown before today
pub const TIMELINE_LOOKBACK_DAYS: i64 = 7;

/// Widest bar drawn for the busiest day
pub const MAX_BAR_WIDTH: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineDay {
    pub date: NaiveDate,
    pub count: i64,
    pub bar: String,
}

impl TimelineDay {
    /// Short `dd/mm` label
    pub fn label(&self) -> String {
        self.date.format("%d/%m").to_string()
    }
}

/// First date covered by the timeline ending at `today`
pub fn timeline_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(TIMELINE_LOOKBACK_DAYS)
}

/// Fill in every day from `timeline_start(today)` to `today`, oldest first
pub fn build_timeline(today: NaiveDate, counts: &[(String, i64)]) -> Vec<TimelineDay> {
    let start = timeline_start(today);
    let mut days: Vec<TimelineDay> = (0..=TIMELINE_LOOKBACK_DAYS)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let key = date.format("%Y-%m-%d").to_string();
            let count = counts
                .iter()
                .find(|(day, _)| *day == key)
                .map(|(_, count)| *count)
                .unwrap_or(0);
            TimelineDay {
                date,
                count,
                bar: String::new(),
            }
        })
        .collect();

    let max_count = days.iter().map(|d| d.count).max().unwrap_or(0);
    if max_count > 0 {
        for day in &mut days {
            let width = (day.count * MAX_BAR_WIDTH) / max_count;
            day.bar = "█".repeat(width as usize);
        }
    }
    days
}

/// Load counts for the user and build the timeline ending at `today`
pub fn symptom_timeline(conn: &Connection, student_id: &str, today: NaiveDate) -> Result<Vec<TimelineDay>> {
    let since = timeline_start(today).format("%Y-%m-%d").to_string();
    let counts = health_log::daily_counts(conn, student_id, &since)?;
    Ok(build_timeline(today, &counts))
}
