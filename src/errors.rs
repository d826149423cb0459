//! Error types for HealthBot
//!
//! Library code returns `HealthBotError`; the binary and the interactive
//! layer wrap it in `anyhow` with context.

use thiserror::Error;

/// Main error type for the HealthBot library
#[derive(Error, Debug)]
pub enum HealthBotError {
    /// SQLite errors from the health log store
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A schema migration could not be applied
    #[error("Migration v{version} failed: {reason}")]
    Migration { version: i64, reason: String },

    /// Entity lookups that came back empty
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Constraint or validation failure on a stored record
    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    /// Keyword table could not be read or parsed
    #[error("Keyword table error: {0}")]
    KeywordTable(String),

    /// Advice service returned an error or an unusable body
    #[error("Advice service error: {0}")]
    AdviceService(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// User input rejected by a validator
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for HealthBot operations
pub type Result<T> = std::result::Result<T, HealthBotError>;

impl HealthBotError {
    /// Shorthand for a `NotFound` error
    pub fn not_found(entity: &str, id: impl Into<String>) -> Self {
        HealthBotError::NotFound {
            entity: entity.to_string(),
            id: id.into(),
        }
    }
}
