use rusqlite::{params, Connection};

use crate::errors::{HealthBotError, Result};
use crate::storage::models::{MedicalCondition, NewCondition};

pub fn insert_condition(
    conn: &Connection,
    student_id: &str,
    condition: &NewCondition,
    now: &str,
) -> Result<i64> {
    if condition.condition.trim().is_empty() {
        return Err(HealthBotError::InvalidInput("Condition cannot be empty".to_string()));
    }
    // An ongoing condition has no end date
    let end_date = if condition.is_ongoing {
        None
    } else {
        condition.end_date.as_deref()
    };

    conn.execute(
        "INSERT INTO medical_history (student_id, condition, description, start_date, end_date, is_ongoing, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            student_id,
            condition.condition,
            condition.description,
            condition.start_date,
            end_date,
            condition.is_ongoing as i32,
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Newest first
pub fn list_conditions(conn: &Connection, student_id: &str) -> Result<Vec<MedicalCondition>> {
    let mut stmt = conn.prepare(
        "SELECT id, student_id, condition, description, start_date, end_date, is_ongoing, created_at
         FROM medical_history WHERE student_id = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![student_id], |row| {
        Ok(MedicalCondition {
            id: row.get(0)?,
            student_id: row.get(1)?,
            condition: row.get(2)?,
            description: row.get(3)?,
            start_date: row.get(4)?,
            end_date: row.get(5)?,
            is_ongoing: row.get::<_, Option<i32>>(6)?.unwrap_or(1) != 0,
            created_at: row.get(7)?,
        })
    })?;

    let mut conditions = Vec::new();
    for row in rows {
        conditions.push(row?);
    }
    Ok(conditions)
}
