use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::{HealthBotError, Result};
use crate::storage::models::{Gender, NewUser, UserProfile};

/// Create a profile; the student id must not already exist
pub fn create_user(conn: &Connection, user: &NewUser, now: &str) -> Result<UserProfile> {
    user.validate()?;
    if user_exists(conn, &user.student_id)? {
        return Err(HealthBotError::ConstraintViolation(
            "This Student ID is already registered.".to_string(),
        ));
    }

    conn.execute(
        "INSERT INTO users (student_id, full_name, age, gender, hostel_room, created_at, last_login)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
        params![
            user.student_id,
            user.full_name,
            user.age,
            user.gender.as_str(),
            user.hostel_room,
            now,
        ],
    )?;
    tracing::info!(student_id = %user.student_id, "Profile created");

    Ok(UserProfile {
        student_id: user.student_id.clone(),
        full_name: user.full_name.clone(),
        age: user.age,
        gender: user.gender,
        hostel_room: user.hostel_room.clone(),
        created_at: now.to_string(),
        last_login: now.to_string(),
    })
}

pub fn user_exists(conn: &Connection, student_id: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE student_id = ?1",
        params![student_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn get_user(conn: &Connection, student_id: &str) -> Result<Option<UserProfile>> {
    let row = conn
        .query_row(
            "SELECT student_id, full_name, age, gender, hostel_room, created_at, last_login
             FROM users WHERE student_id = ?1",
            params![student_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, u8>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            },
        )
        .optional()?;

    match row {
        Some((student_id, full_name, age, gender, hostel_room, created_at, last_login)) => {
            Ok(Some(UserProfile {
                student_id,
                full_name,
                age,
                gender: Gender::from_str(&gender)
                    .map_err(|e| HealthBotError::ConstraintViolation(e.to_string()))?,
                hostel_room,
                created_at,
                last_login,
            }))
        }
        None => Ok(None),
    }
}

/// Record a successful login
pub fn touch_last_login(conn: &Connection, student_id: &str, now: &str) -> Result<()> {
    let updated = conn.execute(
        "UPDATE users SET last_login = ?1 WHERE student_id = ?2",
        params![now, student_id],
    )?;
    if updated == 0 {
        return Err(HealthBotError::not_found("User", student_id));
    }
    Ok(())
}
