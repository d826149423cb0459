use std::str::FromStr;

use rusqlite::{params, Connection};

use crate::errors::{HealthBotError, Result};
use crate::storage::models::{Allergy, NewAllergy, Severity};

pub fn insert_allergy(
    conn: &Connection,
    student_id: &str,
    allergy: &NewAllergy,
    now: &str,
) -> Result<i64> {
    if allergy.allergy_type.trim().is_empty() || allergy.name.trim().is_empty() {
        return Err(HealthBotError::InvalidInput(
            "Allergy type and name cannot be empty".to_string(),
        ));
    }

    conn.execute(
        "INSERT INTO allergies (student_id, type, name, severity, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            student_id,
            allergy.allergy_type,
            allergy.name,
            allergy.severity.as_str(),
            allergy.notes,
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Newest first
pub fn list_allergies(conn: &Connection, student_id: &str) -> Result<Vec<Allergy>> {
    let mut stmt = conn.prepare(
        "SELECT id, student_id, type, name, severity, notes, created_at
         FROM allergies WHERE student_id = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![student_id], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, Option<String>>(5)?,
            row.get::<_, String>(6)?,
        ))
    })?;

    let mut allergies = Vec::new();
    for row in rows {
        let (id, student_id, allergy_type, name, severity, notes, created_at) = row?;
        allergies.push(Allergy {
            id,
            student_id,
            allergy_type,
            name,
            severity: Severity::from_str(&severity)
                .map_err(|e| HealthBotError::ConstraintViolation(e.to_string()))?,
            notes,
            created_at,
        });
    }
    Ok(allergies)
}
