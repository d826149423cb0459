//! Local health log store (SQLite)
//!
//! One connection is opened per session and passed by reference to the
//! repository functions below. Timestamps are local time, formatted with
//! [`TIMESTAMP_FORMAT`].

pub mod allergies;
pub mod contacts;
pub mod health_log;
pub mod medical_history;
pub mod models;
pub mod sqlite;
pub mod users;

pub use health_log::RecurringSymptom;
pub use models::*;
pub use sqlite::{count_tables, open_database, open_memory_database, run_migrations};

/// Format of every stored timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
