use rusqlite::{params, Connection};

use crate::errors::{HealthBotError, Result};
use crate::storage::models::{EmergencyContact, NewContact};

pub fn insert_contact(
    conn: &Connection,
    student_id: &str,
    contact: &NewContact,
    now: &str,
) -> Result<i64> {
    for (field, value) in [
        ("Name", &contact.name),
        ("Relationship", &contact.relationship),
        ("Phone", &contact.phone),
    ] {
        if value.trim().is_empty() {
            return Err(HealthBotError::InvalidInput(format!("{} cannot be empty", field)));
        }
    }

    conn.execute(
        "INSERT INTO emergency_contacts (student_id, name, relationship, phone, email, is_primary, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            student_id,
            contact.name,
            contact.relationship,
            contact.phone,
            contact.email,
            contact.is_primary as i32,
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Primary contacts first, then newest first
pub fn list_contacts(conn: &Connection, student_id: &str) -> Result<Vec<EmergencyContact>> {
    let mut stmt = conn.prepare(
        "SELECT id, student_id, name, relationship, phone, email, is_primary, created_at
         FROM emergency_contacts WHERE student_id = ?1
         ORDER BY is_primary DESC, created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![student_id], |row| {
        Ok(EmergencyContact {
            id: row.get(0)?,
            student_id: row.get(1)?,
            name: row.get(2)?,
            relationship: row.get(3)?,
            phone: row.get(4)?,
            email: row.get(5)?,
            is_primary: row.get::<_, Option<i32>>(6)?.unwrap_or(0) != 0,
            created_at: row.get(7)?,
        })
    })?;

    let mut contacts = Vec::new();
    for row in rows {
        contacts.push(row?);
    }
    Ok(contacts)
}
