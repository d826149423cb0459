use rusqlite::{params, Connection, Row};

use crate::errors::{HealthBotError, Result};
use crate::storage::models::{HealthLogEntry, NewHealthLog};

/// Same symptom text reported repeatedly at the same hour of day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringSymptom {
    pub symptoms: String,
    pub hour: u32,
    pub frequency: i64,
}

const ENTRY_COLUMNS: &str =
    "id, student_id, timestamp, symptoms, keywords, score, verdict, gemini_response";

/// Append a symptom report; returns the new row id
pub fn insert_log(conn: &Connection, log: &NewHealthLog) -> Result<i64> {
    let keywords = serde_json::to_string(&log.keywords)?;
    let advice = serde_json::to_string(&log.advice)?;

    conn.execute(
        "INSERT INTO sessions (student_id, timestamp, symptoms, keywords, score, verdict, gemini_response)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            log.student_id,
            log.timestamp,
            log.symptoms,
            keywords,
            log.score,
            log.verdict.label(),
            advice,
        ],
    )?;

    let id = conn.last_insert_rowid();
    tracing::debug!(id, student_id = %log.student_id, score = log.score, "Health log stored");
    Ok(id)
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<(HealthLogEntry, String)> {
    let keywords: String = row.get(4)?;
    Ok((
        HealthLogEntry {
            id: row.get(0)?,
            student_id: row.get(1)?,
            timestamp: row.get(2)?,
            symptoms: row.get(3)?,
            keywords: Vec::new(),
            score: row.get(5)?,
            verdict: row.get(6)?,
            response: row.get(7)?,
        },
        keywords,
    ))
}

fn collect_entries(conn: &Connection, sql: &str, student_id: &str, limit: i64) -> Result<Vec<HealthLogEntry>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![student_id, limit], entry_from_row)?;

    let mut entries = Vec::new();
    for row in rows {
        let (mut entry, keywords) = row?;
        entry.keywords = serde_json::from_str(&keywords)?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Newest entries first, at most `limit`
pub fn recent_logs(conn: &Connection, student_id: &str, limit: usize) -> Result<Vec<HealthLogEntry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM sessions WHERE student_id = ?1
         ORDER BY timestamp DESC, id DESC LIMIT ?2"
    );
    collect_entries(conn, &sql, student_id, limit as i64)
}

/// Every entry, oldest first
pub fn all_logs(conn: &Connection, student_id: &str) -> Result<Vec<HealthLogEntry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM sessions WHERE student_id = ?1
         ORDER BY timestamp ASC, id ASC LIMIT ?2"
    );
    collect_entries(conn, &sql, student_id, -1)
}

pub fn count_logs(conn: &Connection, student_id: &str) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sessions WHERE student_id = ?1",
        params![student_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Newest entry for the user, if any
pub fn latest_log(conn: &Connection, student_id: &str) -> Result<Option<HealthLogEntry>> {
    Ok(recent_logs(conn, student_id, 1)?.into_iter().next())
}

/// Delete one entry owned by the user
pub fn delete_log(conn: &Connection, student_id: &str, id: i64) -> Result<()> {
    let deleted = conn.execute(
        "DELETE FROM sessions WHERE id = ?1 AND student_id = ?2",
        params![id, student_id],
    )?;
    if deleted == 0 {
        return Err(HealthBotError::not_found("Health log entry", id.to_string()));
    }
    tracing::info!(id, student_id, "Health log entry deleted");
    Ok(())
}

/// Delete the newest entry; returns what was removed
pub fn delete_latest_log(conn: &Connection, student_id: &str) -> Result<Option<HealthLogEntry>> {
    let latest = latest_log(conn, student_id)?;
    if let Some(entry) = &latest {
        delete_log(conn, student_id, entry.id)?;
    }
    Ok(latest)
}

/// Entry counts per calendar day (`YYYY-MM-DD`) on or after `since`
pub fn daily_counts(conn: &Connection, student_id: &str, since: &str) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT DATE(timestamp) AS day, COUNT(*) FROM sessions
         WHERE student_id = ?1 AND DATE(timestamp) >= ?2
         GROUP BY day ORDER BY day",
    )?;
    let rows = stmt.query_map(params![student_id, since], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut counts = Vec::new();
    for row in rows {
        counts.push(row?);
    }
    Ok(counts)
}

/// (symptom text, hour) groups seen more than `more_than` times, most frequent first
pub fn recurring_by_hour(
    conn: &Connection,
    student_id: &str,
    more_than: i64,
) -> Result<Vec<RecurringSymptom>> {
    let mut stmt = conn.prepare(
        "SELECT symptoms, CAST(strftime('%H', timestamp) AS INTEGER) AS hour, COUNT(*) AS frequency
         FROM sessions WHERE student_id = ?1
         GROUP BY symptoms, hour HAVING frequency > ?2
         ORDER BY frequency DESC, symptoms ASC",
    )?;
    let rows = stmt.query_map(params![student_id, more_than], |row| {
        Ok(RecurringSymptom {
            symptoms: row.get(0)?,
            hour: row.get(1)?,
            frequency: row.get(2)?,
        })
    })?;

    let mut recurring = Vec::new();
    for row in rows {
        recurring.push(row?);
    }
    Ok(recurring)
}

/// Symptom texts reported at least `at_least` times, most frequent first
pub fn frequent_symptoms(conn: &Connection, student_id: &str, at_least: i64) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT symptoms, COUNT(*) AS frequency FROM sessions
         WHERE student_id = ?1
         GROUP BY symptoms HAVING frequency >= ?2
         ORDER BY frequency DESC, symptoms ASC",
    )?;
    let rows = stmt.query_map(params![student_id, at_least], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut frequent = Vec::new();
    for row in rows {
        frequent.push(row?);
    }
    Ok(frequent)
}
