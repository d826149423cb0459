//! Scripted end-to-end runs of the interactive session

use async_trait::async_trait;
use healthbot::advice::{AdviceGenerator, DOCTOR_LABEL, REMEDY_LABEL};
use healthbot::repl::input::is_interrupt;
use healthbot::repl::{DisplayManager, HealthSession, ScriptedInput, SessionOptions};
use healthbot::storage::{
    allergies, contacts, health_log, medical_history, open_database, users, Severity,
};
use healthbot::triage::KeywordTable;
use healthbot::Result;
use tempfile::TempDir;

struct Canned;

#[async_trait]
impl AdviceGenerator for Canned {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(format!("{} Rest and fluids. {} After two days.", REMEDY_LABEL, DOCTOR_LABEL))
    }

    fn name(&self) -> &str {
        "canned"
    }
}

fn start(dir: &TempDir, lines: Vec<&str>) -> HealthSession {
    let table = KeywordTable::empty()
        .with_condition("fever", &["fever", "chills"], 2)
        .with_condition("cold", &["cough"], 1);
    HealthSession::new(
        open_database(&dir.path().join("health_logs.db")).unwrap(),
        table,
        Box::new(Canned),
        Box::new(ScriptedInput::new(lines)),
        DisplayManager::new(false),
        SessionOptions {
            history_limit: 5,
            export_dir: dir.path().to_path_buf(),
        },
    )
}

#[tokio::test]
async fn test_full_session_updates_every_table() {
    let dir = TempDir::new().unwrap();
    let lines = vec![
        // create profile
        "2", "Priya", "S9", "19", "Female", "H-1",
        // two reports; the first description is rejected for its digits
        "1", "fever for 3 days", "fever and chills",
        "1", "cough",
        // history, delete the cough, export
        "2",
        "3", "y",
        "4",
        // profile screens
        "5",
        "1", "1", "Asthma", "", "2023-13-01", "2023-01-05", "y", "2", "3",
        "2", "1", "food", "Peanuts", "severe", "", "3",
        "3", "1", "Mom", "Mother", "555-0100", "", "y", "3",
        "4",
        // premium features
        "6", "1", "2", "3", "3", "4", "5", "Dengue", "6",
        // exit
        "7", "y",
    ];

    let mut session = start(&dir, lines);
    session.run().await.unwrap();
    let conn = session.connection();

    let logs = health_log::all_logs(conn, "S9").unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].symptoms, "fever and chills");
    assert_eq!(logs[0].score, 4);
    assert_eq!(logs[0].verdict, "Monitor");
    assert_eq!(logs[0].advice().unwrap().remedy, "Rest and fluids.");

    let conditions = medical_history::list_conditions(conn, "S9").unwrap();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].start_date.as_deref(), Some("2023-01-05"));
    assert_eq!(conditions[0].description, None);
    assert_eq!(conditions[0].status(), "Ongoing");

    let allergies = allergies::list_allergies(conn, "S9").unwrap();
    assert_eq!(allergies[0].severity, Severity::Severe);
    assert_eq!(allergies[0].notes, None);

    let contacts = contacts::list_contacts(conn, "S9").unwrap();
    assert!(contacts[0].is_primary);
    assert_eq!(contacts[0].email, None);

    let exports: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("health_history_S9_"))
        .collect();
    assert_eq!(exports.len(), 1);
    let text = std::fs::read_to_string(exports[0].path()).unwrap();
    assert!(text.contains("🤒 Symptoms: fever and chills"));
    assert!(!text.contains("🤒 Symptoms: cough"));
}

#[tokio::test]
async fn test_returning_user_logs_in() {
    let dir = TempDir::new().unwrap();
    {
        let mut first = start(&dir, vec!["2", "Ana", "S1", "20", "other", "B-2", "7", "y"]);
        first.run().await.unwrap();
    }

    let mut second = start(&dir, vec!["1", "S1", "7", "y"]);
    second.run().await.unwrap();

    let user = users::get_user(second.connection(), "S1").unwrap().unwrap();
    assert!(user.last_login >= user.created_at);
    assert_eq!(second.context().user().unwrap().full_name, "Ana");
}

#[tokio::test]
async fn test_duplicate_student_id_is_asked_again() {
    let dir = TempDir::new().unwrap();
    {
        let mut first = start(&dir, vec!["2", "Ana", "S1", "20", "Female", "B-2", "7", "y"]);
        first.run().await.unwrap();
    }

    let mut second = start(
        &dir,
        vec!["2", "Ben", "S1", "Ben", "S2", "22", "Male", "C-3", "7", "y"],
    );
    second.run().await.unwrap();
    assert_eq!(second.context().user().unwrap().student_id, "S2");
    assert_eq!(
        users::get_user(second.connection(), "S1").unwrap().unwrap().full_name,
        "Ana"
    );
}

#[tokio::test]
async fn test_running_out_of_input_is_an_interrupt() {
    let dir = TempDir::new().unwrap();
    let mut session = start(&dir, vec!["2", "Ana", "S1", "20", "Female", "B-2", "1"]);
    let err = session.run().await.unwrap_err();
    assert!(is_interrupt(&err));
}
