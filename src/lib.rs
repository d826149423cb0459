//! HealthBot - terminal health assistant
//!
//! Scores free-text symptom reports against a keyword table, classifies
//! them into triage bands, asks a generative-text service for advice and
//! keeps a local SQLite health log.
//!
//! # Architecture
//!
//! - **triage**: keyword table, scorer, classifier, input validator
//! - **advice**: `AdviceGenerator` trait with Gemini and Ollama clients
//! - **storage**: SQLite health log, profile and medical records
//! - **insights** / **research** / **export**: features built on the log
//! - **repl** / **cli**: the interactive session and command line

pub mod errors;
pub use errors::{HealthBotError, Result};

// Core
pub mod triage;
pub mod advice;
pub mod execution;

// Persistence and features on top of it
pub mod storage;
pub mod insights;
pub mod research;
pub mod export;

// Interface layer
pub mod cli;
pub mod config;
pub mod repl;
