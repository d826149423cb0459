use std::path::Path;

use rusqlite::Connection;

use crate::errors::{HealthBotError, Result};

/// Open a SQLite connection to the given path and run migrations
pub fn open_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    tracing::info!(path = %path.display(), "Health log database ready");
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(())
}

const MIGRATIONS: [(i64, &str); 1] = [(
    1,
    include_str!("../../resources/migrations/001_initial.sql"),
)];

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<()> {
    apply_migrations(conn, &MIGRATIONS)
}

fn apply_migrations(conn: &Connection, migrations: &[(i64, &str)]) -> Result<()> {
    let current_version = get_current_version(conn)?;

    for &(version, sql) in migrations {
        if version > current_version {
            tracing::info!("Running migration v{version}");
            conn.execute_batch(sql)
                .map_err(|e| HealthBotError::Migration {
                    version,
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}

/// Current schema version; 0 only when `schema_version` does not exist yet
pub fn get_current_version(conn: &Connection) -> Result<i64> {
    let has_table: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;
    if !has_table {
        return Ok(0);
    }

    let version = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, Option<i64>>(0)
    })?;
    Ok(version.unwrap_or(0))
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn database_initializes_all_tables() {
        let conn = open_memory_database().unwrap();
        // users, sessions, medical_history, allergies, emergency_contacts, schema_version
        assert_eq!(count_tables(&conn).unwrap(), 6);
    }

    #[test]
    fn schema_version_is_current() {
        let conn = open_memory_database().unwrap();
        assert_eq!(get_current_version(&conn).unwrap(), 1);
    }

    #[test]
    fn migration_idempotent() {
        let conn = open_memory_database().unwrap();
        assert!(run_migrations(&conn).is_ok());
        assert_eq!(get_current_version(&conn).unwrap(), 1);
    }

    #[test]
    fn fresh_database_is_version_zero() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_current_version(&conn).unwrap(), 0);
    }

    #[test]
    fn unreadable_schema_version_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE schema_version (applied_at TEXT);")
            .unwrap();
        assert!(get_current_version(&conn).is_err());
    }

    #[test]
    fn failed_migration_reports_version() {
        let conn = open_memory_database().unwrap();
        let err = apply_migrations(&conn, &[(2, "CREATE TABLE broken (")]).unwrap_err();
        match err {
            HealthBotError::Migration { version, .. } => assert_eq!(version, 2),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(get_current_version(&conn).unwrap(), 1);
    }

    #[test]
    fn foreign_keys_enabled() {
        let conn = open_memory_database().unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn file_database_reopens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("health_logs.db");
        {
            let conn = open_database(&path).unwrap();
            assert_eq!(count_tables(&conn).unwrap(), 6);
        }
        let conn = open_database(&path).unwrap();
        assert_eq!(get_current_version(&conn).unwrap(), 1);
    }
}
