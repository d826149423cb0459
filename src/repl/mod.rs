//! Interactive session: account, main, profile and premium menus
//!
//! Every prompt, advice request and database statement runs in sequence
//! on the caller's task. Ctrl-C / Ctrl-D surface as [`input::Interrupted`]
//! and end the session; any other failure inside a menu action is shown
//! to the user and the menu continues.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::{Context, Result};
use chrono::Datelike;
use rusqlite::Connection;
use std::path::PathBuf;

use crate::advice::AdviceGenerator;
use crate::execution::{persist_report, triage_report};
use crate::insights::{self, BodyRegion, Season, BODY_MAP};
use crate::research::ReferenceLibrary;
use crate::storage::{
    allergies, contacts, health_log, medical_history, now_timestamp, users, Gender, NewAllergy,
    NewCondition, NewContact, NewUser, Severity, UserProfile,
};
use crate::triage::{validate_symptoms, KeywordTable};

use crate::repl::commands::{AccountChoice, MainChoice, PremiumChoice, ProfileChoice, RecordChoice};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::{
    ask, ask_choice, ask_date, ask_number, ask_optional, ask_raw, ask_required, confirm,
    is_interrupt, LineSource,
};
pub use crate::repl::input::{InputHandler, Interrupted, ScriptedInput};
pub use crate::repl::session::SessionContext;

/// Settings for one interactive run
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub history_limit: usize,
    pub export_dir: PathBuf,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            history_limit: 5,
            export_dir: PathBuf::from("."),
        }
    }
}

/// Show a research topic, or report that it does not exist
pub async fn show_research_topic(
    display: &DisplayManager,
    library: &ReferenceLibrary,
    topic: &str,
) -> bool {
    match library.lookup(topic) {
        Some(found) => {
            display.loading_animation().await;
            display.show_research(found);
            true
        }
        None => {
            display.show_error(&format!("Topic '{}' not found.", topic));
            display.show_warning(&format!(
                "Available topics: {}",
                library.topic_names().join(", ")
            ));
            false
        }
    }
}

/// HealthBot interactive session coordinator
pub struct HealthSession {
    conn: Connection,
    table: KeywordTable,
    library: ReferenceLibrary,
    generator: Box<dyn AdviceGenerator>,
    input: Box<dyn LineSource>,
    display: DisplayManager,
    context: SessionContext,
    options: SessionOptions,
}

impl HealthSession {
    pub fn new(
        conn: Connection,
        table: KeywordTable,
        generator: Box<dyn AdviceGenerator>,
        input: Box<dyn LineSource>,
        display: DisplayManager,
        options: SessionOptions,
    ) -> Self {
        HealthSession {
            conn,
            table,
            library: ReferenceLibrary::builtin(),
            generator,
            input,
            display,
            context: SessionContext::new(),
            options,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Run until the user exits; `Err` carries interrupts and fatal errors
    pub async fn run(&mut self) -> Result<()> {
        if let Err(e) = self.display.clear_screen() {
            tracing::debug!(error = %e, "Could not clear the terminal");
        }
        self.display.show_banner();

        let user = self.establish_user()?;
        self.context.set_user(user.clone());

        loop {
            self.display.loading_animation().await;
            let header = format!("👤 {} | 🎓 {}", user.full_name, user.student_id);
            self.display
                .show_menu("🏥 Health Alert Bot", Some(&header), &MainChoice::ITEMS);

            let answer = ask_choice(self.input.as_mut(), "Choose an option", &MainChoice::CHOICES)?;
            let Some(choice) = MainChoice::parse(&answer) else {
                continue;
            };

            if choice == MainChoice::Exit {
                if confirm(self.input.as_mut(), "Are you sure you want to exit?")? {
                    self.display.show_session_stats(&self.context.usage_summary());
                    println!("👋 Goodbye! Stay healthy!");
                    return Ok(());
                }
                continue;
            }

            let result = match choice {
                MainChoice::ReportSymptoms => self.report_symptoms(&user.student_id).await,
                MainChoice::ViewHistory => self.view_history(&user.student_id),
                MainChoice::DeleteLastEntry => self.delete_last_entry(&user.student_id),
                MainChoice::ExportHistory => self.export_history(&user.student_id),
                MainChoice::UserProfile => self.profile_menu(&user.student_id),
                MainChoice::Premium => self.premium_menu(&user.student_id).await,
                MainChoice::Exit => Ok(()),
            };
            self.recover(result)?;
        }
    }

    /// Pass interrupts up; show anything else and keep going
    fn recover(&self, result: Result<()>) -> Result<()> {
        match result {
            Err(e) if is_interrupt(&e) => Err(e),
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "Menu action failed");
                self.display.show_error(&format!("An error occurred: {:#}", e));
                self.display.show_warning("Please try again later.");
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    fn establish_user(&mut self) -> Result<UserProfile> {
        loop {
            self.display
                .show_menu("Account Management", None, &AccountChoice::ITEMS);
            let answer =
                ask_choice(self.input.as_mut(), "Choose an option", &AccountChoice::CHOICES)?;
            let user = match AccountChoice::parse(&answer) {
                Some(AccountChoice::Login) => self.login(),
                Some(AccountChoice::CreateProfile) => self.create_profile(),
                None => continue,
            };
            match user {
                Ok(Some(user)) => return Ok(user),
                Ok(None) => continue,
                Err(e) => self.recover(Err(e))?,
            }
        }
    }

    fn login(&mut self) -> Result<Option<UserProfile>> {
        loop {
            self.display.show_panel("🔐 Login to your account", &[]);
            let student_id = ask(self.input.as_mut(), "🎓 Enter your Student ID")?;

            if let Some(user) = users::get_user(&self.conn, &student_id)? {
                users::touch_last_login(&self.conn, &student_id, &now_timestamp())?;
                self.display
                    .show_success(&format!("👋 Welcome back, {}!", user.full_name));
                return Ok(Some(user));
            }

            self.display.show_error("Student ID not found.");
            if confirm(self.input.as_mut(), "Would you like to create a new profile?")? {
                return self.create_profile();
            }
        }
    }

    fn create_profile(&mut self) -> Result<Option<UserProfile>> {
        self.display.show_panel("💡 Let's create your profile!", &[]);

        let new_user = loop {
            let full_name = ask(self.input.as_mut(), "📝 Full Name")?;
            if full_name.is_empty() {
                self.display.show_error("Full name cannot be empty.");
                continue;
            }

            let student_id = ask(self.input.as_mut(), "🎓 Student ID")?;
            if student_id.is_empty() {
                self.display.show_error("Student ID cannot be empty.");
                continue;
            }
            if users::user_exists(&self.conn, &student_id)? {
                self.display.show_error("This Student ID is already registered.");
                continue;
            }

            let age = ask_number(self.input.as_mut(), "🎂 Age", 0, 120)?;
            let gender_names: Vec<&str> = Gender::ALL.iter().map(Gender::as_str).collect();
            let gender: Gender = ask_choice(self.input.as_mut(), "🚻 Gender", &gender_names)?.parse()?;

            let hostel_room = ask(self.input.as_mut(), "🏠 Hostel/Room Number")?;
            if hostel_room.is_empty() {
                self.display.show_error("Hostel/Room number cannot be empty.");
                continue;
            }

            break NewUser {
                student_id,
                full_name,
                age: age as u8,
                gender,
                hostel_room,
            };
        };

        match users::create_user(&self.conn, &new_user, &now_timestamp()) {
            Ok(user) => {
                self.display.show_success("Profile created successfully! 🎉");
                Ok(Some(user))
            }
            Err(e) => {
                tracing::error!(error = %e, "Profile creation failed");
                self.display.show_error(&format!("Database error: {}", e));
                self.display.show_warning("Please try again later.");
                Ok(None)
            }
        }
    }

    async fn report_symptoms(&mut self, student_id: &str) -> Result<()> {
        self.display.show_panel("🤒 Report your symptoms", &[]);

        let symptoms = loop {
            let symptoms = ask_raw(self.input.as_mut(), "📝 Describe your symptoms")?;
            match validate_symptoms(&symptoms) {
                Ok(()) => break symptoms,
                Err(e) => {
                    self.display.show_error(&e.to_string());
                    self.display.show_error(
                        "Invalid input! Please provide at least 3 characters and avoid numbers.",
                    );
                }
            }
        };

        let spinner = self.display.start_spinner("🔄 Analyzing symptoms...");
        let outcome = triage_report(&self.table, self.generator.as_ref(), &symptoms).await;
        spinner.finish_and_clear();
        let outcome = outcome?;

        if let Some(e) = &outcome.advice_error {
            self.display
                .show_error(&format!("Error getting AI response: {}", e));
        }
        self.display.show_report(&outcome);

        persist_report(&self.conn, student_id, &now_timestamp(), &outcome)
            .context("Failed to save health log")?;
        self.display.show_success("Health log saved successfully!");
        self.display.show_hint("You can view your health history later.");
        Ok(())
    }

    fn view_history(&mut self, student_id: &str) -> Result<()> {
        let entries = health_log::recent_logs(&self.conn, student_id, self.options.history_limit)?;
        if entries.is_empty() {
            self.display.show_warning("📭 No health logs found.");
            self.display.show_hint("Start by reporting your symptoms.");
            return Ok(());
        }
        self.display.show_history(&entries);
        self.display.show_hint(&format!(
            "Showing last {} entries. Use export to see more.",
            self.options.history_limit
        ));
        Ok(())
    }

    fn delete_last_entry(&mut self, student_id: &str) -> Result<()> {
        if health_log::count_logs(&self.conn, student_id)? == 0 {
            self.display.show_warning("📭 No entries to delete.");
            self.display.show_hint("Start by reporting your symptoms.");
            return Ok(());
        }

        if !confirm(self.input.as_mut(), "🗑️ Are you sure you want to delete the last entry?")? {
            self.display.show_warning("Operation cancelled.");
            return Ok(());
        }

        match health_log::delete_latest_log(&self.conn, student_id)? {
            Some(_) => {
                self.display.show_success("Last entry deleted successfully.");
                self.display.show_hint("You can view your updated health history.");
            }
            None => self.display.show_warning("📭 No entries to delete."),
        }
        Ok(())
    }

    fn export_history(&mut self, student_id: &str) -> Result<()> {
        let at = chrono::Local::now().naive_local();
        match crate::export::export_history(&self.conn, student_id, &self.options.export_dir, at)
            .context("Failed to export health history")?
        {
            Some(path) => {
                self.display
                    .show_success(&format!("History exported to {}", path.display()));
                self.display
                    .show_hint("You can find the file in the export directory.");
            }
            None => {
                self.display.show_warning("📭 No health logs to export.");
                self.display.show_hint("Start by reporting your symptoms.");
            }
        }
        Ok(())
    }

    fn profile_menu(&mut self, student_id: &str) -> Result<()> {
        loop {
            self.display
                .show_menu("👤 User Profile Management", None, &ProfileChoice::ITEMS);
            let answer =
                ask_choice(self.input.as_mut(), "Choose an option", &ProfileChoice::CHOICES)?;
            let result = match ProfileChoice::parse(&answer) {
                Some(ProfileChoice::MedicalHistory) => self.manage_medical_history(student_id),
                Some(ProfileChoice::Allergies) => self.manage_allergies(student_id),
                Some(ProfileChoice::EmergencyContacts) => self.manage_contacts(student_id),
                Some(ProfileChoice::Back) => return Ok(()),
                None => continue,
            };
            self.recover(result)?;
        }
    }

    fn record_menu(&mut self, title: &str, noun: &str) -> Result<RecordChoice> {
        let items = RecordChoice::items(noun);
        let items: Vec<&str> = items.iter().map(String::as_str).collect();
        self.display.show_menu(title, None, &items);
        loop {
            let answer =
                ask_choice(self.input.as_mut(), "Choose an option", &RecordChoice::CHOICES)?;
            if let Some(choice) = RecordChoice::parse(&answer) {
                return Ok(choice);
            }
        }
    }

    fn manage_medical_history(&mut self, student_id: &str) -> Result<()> {
        loop {
            match self.record_menu("🩺 Medical History Management", "condition")? {
                RecordChoice::Add => {
                    let input = self.input.as_mut();
                    let condition = ask_required(input, "🤒 Condition name", "Condition name")?;
                    let description = ask_optional(input, "📝 Description (optional)")?;
                    let start_date = ask_date(input, "📅 Start date (YYYY-MM-DD)")?;
                    let is_ongoing = confirm(input, "⏳ Is this an ongoing condition?")?;
                    let end_date = if is_ongoing {
                        None
                    } else {
                        ask_date(input, "📅 End date (YYYY-MM-DD)")?
                    };

                    let new_condition = NewCondition {
                        condition,
                        description,
                        start_date,
                        end_date,
                        is_ongoing,
                    };
                    medical_history::insert_condition(&self.conn, student_id, &new_condition, &now_timestamp())
                        .context("Failed to save medical condition")?;
                    self.display.show_success("Medical condition added successfully! 🎉");
                    self.display.show_hint("You can view your medical history anytime.");
                }
                RecordChoice::View => {
                    let conditions = medical_history::list_conditions(&self.conn, student_id)?;
                    if conditions.is_empty() {
                        self.display.show_warning("📭 No medical history found.");
                        self.display.show_hint("Start by adding a medical condition.");
                    } else {
                        self.display.show_conditions(&conditions);
                    }
                }
                RecordChoice::Back => return Ok(()),
            }
        }
    }

    fn manage_allergies(&mut self, student_id: &str) -> Result<()> {
        loop {
            match self.record_menu("⚠️ Allergies & Conditions Management", "allergy/condition")? {
                RecordChoice::Add => {
                    let input = self.input.as_mut();
                    let allergy_type =
                        ask_required(input, "🏷️ Type (e.g., food, drug, environmental)", "Type")?;
                    let name = ask_required(input, "📝 Name", "Name")?;
                    let severity_names: Vec<&str> =
                        Severity::ALL.iter().map(Severity::as_str).collect();
                    let severity: Severity =
                        ask_choice(input, "⚠️ Severity", &severity_names)?.parse()?;
                    let notes = ask_optional(input, "📝 Additional notes (optional)")?;

                    let allergy = NewAllergy {
                        allergy_type,
                        name,
                        severity,
                        notes,
                    };
                    allergies::insert_allergy(&self.conn, student_id, &allergy, &now_timestamp())
                        .context("Failed to save allergy")?;
                    self.display.show_success("Allergy/condition added successfully! 🎉");
                    self.display.show_hint("You can view your allergies anytime.");
                }
                RecordChoice::View => {
                    let allergies = allergies::list_allergies(&self.conn, student_id)?;
                    if allergies.is_empty() {
                        self.display.show_warning("📭 No allergies or conditions found.");
                        self.display.show_hint("Start by adding an allergy or condition.");
                    } else {
                        self.display.show_allergies(&allergies);
                    }
                }
                RecordChoice::Back => return Ok(()),
            }
        }
    }

    fn manage_contacts(&mut self, student_id: &str) -> Result<()> {
        loop {
            match self.record_menu("📞 Emergency Contacts Management", "contact")? {
                RecordChoice::Add => {
                    let input = self.input.as_mut();
                    let name = ask_required(input, "👤 Name", "Name")?;
                    let relationship = ask_required(input, "🤝 Relationship", "Relationship")?;
                    let phone = ask_required(input, "📱 Phone Number", "Phone number")?;
                    let email = ask_optional(input, "✉️ Email (optional)")?;
                    let is_primary = confirm(input, "⭐ Set as primary contact?")?;

                    let contact = NewContact {
                        name,
                        relationship,
                        phone,
                        email,
                        is_primary,
                    };
                    contacts::insert_contact(&self.conn, student_id, &contact, &now_timestamp())
                        .context("Failed to save emergency contact")?;
                    self.display.show_success("Emergency contact added successfully! 🎉");
                }
                RecordChoice::View => {
                    let contacts = contacts::list_contacts(&self.conn, student_id)?;
                    if contacts.is_empty() {
                        self.display.show_warning("📭 No emergency contacts found.");
                    } else {
                        self.display.show_contacts(&contacts);
                    }
                }
                RecordChoice::Back => return Ok(()),
            }
        }
    }

    async fn premium_menu(&mut self, student_id: &str) -> Result<()> {
        loop {
            self.display
                .show_menu("✨ Premium Features", None, &PremiumChoice::ITEMS);
            let answer =
                ask_choice(self.input.as_mut(), "Choose an option", &PremiumChoice::CHOICES)?;
            let result = match PremiumChoice::parse(&answer) {
                Some(PremiumChoice::Timeline) => self.show_timeline(student_id),
                Some(PremiumChoice::BodyMap) => self.body_map(),
                Some(PremiumChoice::Trends) => self.show_trends(student_id),
                Some(PremiumChoice::PersonalizedAdvice) => self.personalized_advice(student_id),
                Some(PremiumChoice::Research) => self.research().await,
                Some(PremiumChoice::Back) => return Ok(()),
                None => continue,
            };
            self.recover(result)?;
            self.display.show_session_stats(&self.context.usage_summary());
        }
    }

    fn show_timeline(&mut self, student_id: &str) -> Result<()> {
        let today = chrono::Local::now().date_naive();
        let days = insights::symptom_timeline(&self.conn, student_id, today)?;
        self.display.show_timeline(&days);
        Ok(())
    }

    fn body_map(&mut self) -> Result<()> {
        let lines: Vec<String> = BODY_MAP.lines().map(str::to_string).collect();
        self.display.show_panel("🗺️ Body Map", &lines);
        let answer = ask_choice(self.input.as_mut(), "Select pain location", &BodyRegion::CHOICES)?;
        if let Some(region) = BodyRegion::from_choice(&answer) {
            self.display
                .show_success(&format!("Selected location: {}", region));
        }
        Ok(())
    }

    fn show_trends(&mut self, student_id: &str) -> Result<()> {
        let trends = insights::analyze_trends(&self.conn, student_id)?;
        self.display.show_trends(&trends);
        Ok(())
    }

    fn personalized_advice(&mut self, student_id: &str) -> Result<()> {
        let tips = insights::personalized_tips(&self.conn, student_id)?;
        if !tips.is_empty() {
            self.display.show_section("💡 Personalized Advice");
            for tip in tips {
                self.display.show_bullet(tip);
            }
        }

        let season = Season::from_month(chrono::Local::now().month());
        self.display.show_section("🌤️ Seasonal Health Alert");
        for alert in season.alerts() {
            self.display.show_bullet(alert);
        }
        Ok(())
    }

    async fn research(&mut self) -> Result<()> {
        let names = self.library.topic_names();
        let topic = ask_choice(self.input.as_mut(), "Enter health topic to research", &names)?;
        show_research_topic(&self.display, &self.library, &topic).await;
        Ok(())
    }
}
