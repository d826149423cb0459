//! Display manager for the HealthBot terminal UI
//!
//! Panels, tables, spinners and the urgent-care bell.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::execution::ReportOutcome;
use crate::insights::{TimelineDay, Trend};
use crate::research::ResearchTopic;
use crate::storage::{Allergy, EmergencyContact, HealthLogEntry, MedicalCondition};
use crate::triage::Verdict;

const PANEL_WIDTH: usize = 60;

const LOADING_FRAMES: [&str; 4] = ["🏥", "⚕️", "💊", "🩺"];

/// Display manager for the interactive session
pub struct DisplayManager {
    animations: bool,
    tick_interval: Duration,
}

/// Render a titled panel as text
pub fn render_panel(title: &str, lines: &[String]) -> String {
    let title_width = title.chars().count() + 4;
    let fill = PANEL_WIDTH.saturating_sub(title_width);
    let mut out = format!("╭─ {} {}\n", title, "─".repeat(fill));
    for line in lines {
        out.push_str(&format!("│ {}\n", line));
    }
    out.push_str(&format!("╰{}", "─".repeat(PANEL_WIDTH - 1)));
    out
}

/// Render rows under a header, columns padded to the widest cell
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let render_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<String>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut out = render_row(headers.to_vec());
    out.push('\n');
    let rule_width: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    out.push_str(&"─".repeat(rule_width));
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(row.iter().map(String::as_str).collect()));
    }
    out
}

impl DisplayManager {
    pub fn new(animations: bool) -> Self {
        DisplayManager {
            animations,
            tick_interval: Duration::from_millis(200),
        }
    }

    pub fn show_banner(&self) {
        let width = 64;
        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", "  🏥 Welcome to Health Alert Bot! 🏥".bold().cyan());
        println!("{}\n", "=".repeat(width).cyan());
    }

    pub fn show_panel(&self, title: &str, lines: &[String]) {
        println!("\n{}", render_panel(title, lines).cyan());
    }

    pub fn show_menu(&self, title: &str, header: Option<&str>, items: &[&str]) {
        let mut lines = Vec::new();
        if let Some(header) = header {
            lines.push(header.to_string());
            lines.push(String::new());
        }
        lines.extend(items.iter().map(|item| item.to_string()));
        self.show_panel(title, &lines);
    }

    /// Spinner shown while a report is analysed; hidden when animations are off
    pub fn start_spinner(&self, message: &str) -> ProgressBar {
        if !self.animations {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Short frame animation before menus and research panels
    pub async fn loading_animation(&self) {
        if !self.animations {
            return;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
            pb.set_style(style.tick_strings(&LOADING_FRAMES));
        }
        pb.set_message("Loading...".to_string());
        pb.enable_steady_tick(self.tick_interval);
        tokio::time::sleep(self.tick_interval * LOADING_FRAMES.len() as u32).await;
        pb.finish_and_clear();
    }

    /// Terminal bell for urgent verdicts
    pub fn bell(&self) {
        print!("\x07");
        let _ = io::stdout().flush();
    }

    pub fn show_report(&self, outcome: &ReportOutcome) {
        if outcome.analysis.has_matches() {
            println!(
                "{}",
                format!("✅ Found {} matching keywords.", outcome.analysis.matched_keywords.len())
                    .green()
            );
        } else {
            println!("{}", "⚠️ No matching keywords found in symptoms.".yellow());
        }

        let verdict = format!("{} {}", outcome.verdict.emoji(), outcome.verdict.label());
        let rows = vec![
            vec!["🤒 Symptoms".to_string(), outcome.symptoms.clone()],
            vec!["🔑 Detected Keywords".to_string(), outcome.analysis.keywords_joined()],
            vec!["📊 Severity Score".to_string(), outcome.analysis.score.to_string()],
            vec!["⚖️ Verdict".to_string(), verdict],
            vec!["💊 Suggested Remedy".to_string(), outcome.advice.remedy.clone()],
            vec!["👨‍⚕️ When to see doctor".to_string(), outcome.advice.doctor_advice.clone()],
        ];
        let table = render_table(&["📋 Category", "📝 Details"], &rows);
        let lines: Vec<String> = table.lines().map(str::to_string).collect();

        if outcome.verdict.is_urgent() {
            self.bell();
            println!("\n{}", render_panel("🚨 URGENT: Health Advice", &lines).red());
            println!("{}", "⚠️ Please seek medical attention immediately!".red().bold());
        } else {
            self.show_panel("💊 Health Advice", &lines);
            println!("{}", "✅ Follow the suggested remedy and monitor your symptoms.".green());
        }
    }

    pub fn show_history(&self, entries: &[HealthLogEntry]) {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| {
                let verdict = match Verdict::from_label(&entry.verdict) {
                    Some(v) => format!("{} {}", v.emoji(), v.label()),
                    None => entry.verdict.clone(),
                };
                vec![
                    entry.timestamp.clone(),
                    entry.symptoms.clone(),
                    entry.score.to_string(),
                    verdict,
                ]
            })
            .collect();
        let table = render_table(&["📅 Date", "🤒 Symptoms", "📊 Score", "⚖️ Verdict"], &rows);
        self.show_panel(
            "📋 Recent Health History",
            &table.lines().map(str::to_string).collect::<Vec<_>>(),
        );
    }

    pub fn show_conditions(&self, conditions: &[MedicalCondition]) {
        let rows: Vec<Vec<String>> = conditions
            .iter()
            .map(|c| {
                let marker = if c.is_ongoing {
                    "🟢"
                } else if c.end_date.as_deref().is_some_and(|d| !d.is_empty()) {
                    "🔴"
                } else {
                    "⚪"
                };
                vec![
                    c.condition.clone(),
                    c.description.clone().unwrap_or_default(),
                    c.start_date.clone().unwrap_or_default(),
                    format!("{} {}", marker, c.status()),
                ]
            })
            .collect();
        let table = render_table(&["🤒 Condition", "📝 Description", "📅 Start Date", "⏳ Status"], &rows);
        self.show_panel("📋 Medical History", &table.lines().map(str::to_string).collect::<Vec<_>>());
    }

    pub fn show_allergies(&self, allergies: &[Allergy]) {
        let rows: Vec<Vec<String>> = allergies
            .iter()
            .map(|a| {
                vec![
                    a.allergy_type.clone(),
                    a.name.clone(),
                    format!("{} {}", a.severity.marker(), a.severity),
                    a.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        let table = render_table(&["🏷️ Type", "📝 Name", "⚠️ Severity", "📝 Notes"], &rows);
        self.show_panel("📋 Allergies & Conditions", &table.lines().map(str::to_string).collect::<Vec<_>>());
    }

    pub fn show_contacts(&self, contacts: &[EmergencyContact]) {
        let rows: Vec<Vec<String>> = contacts
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.relationship.clone(),
                    c.phone.clone(),
                    c.email.clone().unwrap_or_default(),
                    if c.is_primary { "⭐ Yes".to_string() } else { "No".to_string() },
                ]
            })
            .collect();
        let table = render_table(
            &["👤 Name", "🤝 Relationship", "📱 Phone", "✉️ Email", "⭐ Primary"],
            &rows,
        );
        self.show_panel("📋 Emergency Contacts", &table.lines().map(str::to_string).collect::<Vec<_>>());
    }

    pub fn show_timeline(&self, days: &[TimelineDay]) {
        let rows: Vec<Vec<String>> = days
            .iter()
            .map(|d| vec![d.label(), d.count.to_string(), d.bar.clone()])
            .collect();
        let table = render_table(&["📅 Date", "📊 Frequency", "📈 Graph"], &rows);
        self.show_panel("📊 Health Timeline", &table.lines().map(str::to_string).collect::<Vec<_>>());
    }

    pub fn show_trends(&self, trends: &[Trend]) {
        if trends.is_empty() {
            println!("{}", "📭 No recurring symptom patterns yet.".yellow());
            return;
        }
        println!("\n{}", "📈 Trend Analysis".bold().blue());
        for trend in trends {
            self.show_bullet(&trend.describe());
        }
    }

    pub fn show_research(&self, topic: &ResearchTopic) {
        println!("\n{}", render_panel(&format!("Research: {}", topic.title()), &[]).magenta().bold());
        let prevention: Vec<String> = topic.prevention.iter().map(|line| format!("• {}", line)).collect();
        println!("{}", render_panel("🛡️ Prevention", &prevention).blue());
        let first_aid: Vec<String> = topic
            .first_aid
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect();
        println!("{}", render_panel("🚑 First Aid", &first_aid).red());
    }

    pub fn show_session_stats(&self, summary: &str) {
        println!("\n{}", "⏱️ Session Stats".bold().blue());
        println!("{}", summary);
    }

    pub fn show_success(&self, message: &str) {
        println!("{}", format!("✅ {}", message).green());
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{}", format!("❌ {}", error).red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{}", format!("⚠️ {}", warning).yellow());
    }

    pub fn show_hint(&self, hint: &str) {
        println!("{}", format!("📝 {}", hint).yellow());
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
    }

    /// Show bullet point
    pub fn show_bullet(&self, text: &str) {
        println!("• {}", text);
    }

    /// Clear the terminal; plain (non-animated) output is left untouched
    pub fn clear_screen(&self) -> io::Result<()> {
        if !self.animations {
            return Ok(());
        }
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_has_title_and_lines() {
        let panel = render_panel("💊 Health Advice", &["one".to_string(), "two".to_string()]);
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("╭─ 💊 Health Advice "));
        assert_eq!(lines[1], "│ one");
        assert!(lines[3].starts_with('╰'));
    }

    #[test]
    fn test_table_pads_columns() {
        let table = render_table(
            &["A", "B"],
            &[
                vec!["long cell".to_string(), "x".to_string()],
                vec!["s".to_string(), "y".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "A         │ B");
        assert_eq!(lines[2], "long cell │ x");
        assert_eq!(lines[3], "s         │ y");
    }

    #[test]
    fn test_hidden_spinner_without_animations() {
        let display = DisplayManager::new(false);
        let pb = display.start_spinner("🔄 Analyzing symptoms...");
        assert!(pb.is_hidden());
        pb.finish_and_clear();
    }

    #[test]
    fn test_clear_screen_noop_in_plain_mode() {
        assert!(DisplayManager::new(false).clear_screen().is_ok());
    }

    #[test]
    fn test_loading_animation_skipped_without_animations() {
        let display = DisplayManager::new(false);
        let start = std::time::Instant::now();
        tokio_test::block_on(display.loading_animation());
        assert!(start.elapsed() < std::time::Duration::from_millis(100));
    }
}
