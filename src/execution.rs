//! Shared symptom-report pipeline
//!
//! Used by the interactive session and by tests: analyze the report,
//! classify the score, ask for advice, then append the record to the
//! health log. Advice failures never stop the pipeline.

use crate::advice::{request_advice, Advice, AdviceGenerator};
use crate::errors::{HealthBotError, Result};
use crate::storage::{health_log, NewHealthLog};
use crate::triage::{analyze, classify, validate_symptoms, AnalysisResult, KeywordTable, Verdict};
use rusqlite::Connection;
use std::time::Instant;

/// Everything produced for one report before it is stored
#[derive(Debug)]
pub struct ReportOutcome {
    pub symptoms: String,
    pub analysis: AnalysisResult,
    pub verdict: Verdict,
    pub advice: Advice,
    /// Service error replaced by fallback advice
    pub advice_error: Option<HealthBotError>,
}

impl ReportOutcome {
    /// Build the log record for `student_id` at `timestamp`
    pub fn to_log(&self, student_id: &str, timestamp: &str) -> NewHealthLog {
        NewHealthLog {
            student_id: student_id.to_string(),
            timestamp: timestamp.to_string(),
            symptoms: self.symptoms.clone(),
            keywords: self.analysis.matched_keywords.clone(),
            score: self.analysis.score,
            verdict: self.verdict,
            advice: self.advice.clone(),
        }
    }
}

/// Analyze, classify and fetch advice for a validated report
pub async fn triage_report(
    table: &KeywordTable,
    generator: &dyn AdviceGenerator,
    symptoms: &str,
) -> Result<ReportOutcome> {
    validate_symptoms(symptoms).map_err(|e| HealthBotError::InvalidInput(e.to_string()))?;

    let start = Instant::now();
    let analysis = analyze(symptoms, table);
    let verdict = classify(analysis.score);
    let outcome = request_advice(generator, symptoms, &analysis.matched_keywords).await;

    tracing::info!(
        keywords = analysis.matched_keywords.len(),
        score = analysis.score,
        verdict = verdict.label(),
        advice_ok = outcome.failure.is_none(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Symptom report triaged"
    );

    Ok(ReportOutcome {
        symptoms: symptoms.to_string(),
        analysis,
        verdict,
        advice: outcome.advice,
        advice_error: outcome.failure,
    })
}

/// Append the outcome to the health log; returns the new entry id
pub fn persist_report(
    conn: &Connection,
    student_id: &str,
    timestamp: &str,
    outcome: &ReportOutcome,
) -> Result<i64> {
    health_log::insert_log(conn, &outcome.to_log(student_id, timestamp))
}

/// Run the full pipeline: triage then persist
pub async fn execute_report(
    conn: &Connection,
    table: &KeywordTable,
    generator: &dyn AdviceGenerator,
    student_id: &str,
    symptoms: &str,
    timestamp: &str,
) -> Result<(i64, ReportOutcome)> {
    let outcome = triage_report(table, generator, symptoms).await?;
    let id = persist_report(conn, student_id, timestamp, &outcome)?;
    Ok((id, outcome))
}
