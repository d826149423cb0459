//! Plain-text export of a user's health log

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rusqlite::Connection;

use crate::errors::Result;
use crate::storage::{health_log, HealthLogEntry};

const SEPARATOR_WIDTH: usize = 50;

/// `health_history_<id>_<YYYYmmdd_HHMMSS>.txt`
pub fn export_file_name(student_id: &str, at: NaiveDateTime) -> String {
    format!(
        "health_history_{}_{}.txt",
        student_id,
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Render entries (oldest first) as the export document
pub fn render_export(entries: &[HealthLogEntry]) -> Result<String> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "📋 Health History Export");
    let _ = writeln!(out, "{}\n", separator);

    for entry in entries {
        let keywords = serde_json::to_string(&entry.keywords)?;
        let _ = writeln!(out, "📅 Date: {}", entry.timestamp);
        let _ = writeln!(out, "🤒 Symptoms: {}", entry.symptoms);
        let _ = writeln!(out, "🔑 Keywords: {}", keywords);
        let _ = writeln!(out, "📊 Score: {}", entry.score);
        let _ = writeln!(out, "⚖️ Verdict: {}", entry.verdict);
        let _ = writeln!(out, "💡 Response: {}", entry.response);
        let _ = writeln!(out, "{}\n", separator);
    }
    Ok(out)
}

/// Write every entry for the user into `dir`; `None` when there is nothing to export
pub fn export_history(
    conn: &Connection,
    student_id: &str,
    dir: &Path,
    at: NaiveDateTime,
) -> Result<Option<PathBuf>> {
    let entries = health_log::all_logs(conn, student_id)?;
    if entries.is_empty() {
        return Ok(None);
    }

    let path = dir.join(export_file_name(student_id, at));
    std::fs::write(&path, render_export(&entries)?)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "Health history exported");
    Ok(Some(path))
}
