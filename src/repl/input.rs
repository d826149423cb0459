//! Prompt input for the interactive session
//!
//! `InputHandler` reads from the terminal through rustyline; `ScriptedInput`
//! replays fixed answers for tests. Ctrl-C and Ctrl-D both surface as
//! [`Interrupted`] so the caller can say goodbye.

use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use thiserror::Error;

/// The user pressed Ctrl-C or Ctrl-D at a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Interrupted")]
pub struct Interrupted;

/// Anything that can answer a prompt
pub trait LineSource {
    /// Returns `Ok(None)` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Input handler backed by a rustyline editor
pub struct InputHandler {
    editor: DefaultEditor,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(InputHandler { editor })
    }
}

impl LineSource for InputHandler {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.trim());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Err(Interrupted.into()),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}

/// Replays a fixed list of answers
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Read one answer as typed; end of input counts as an interrupt
pub fn ask_raw(input: &mut dyn LineSource, prompt: &str) -> Result<String> {
    let prompt = format!("{}: ", prompt);
    match input.read_line(&prompt)? {
        Some(line) => Ok(line),
        None => Err(Interrupted.into()),
    }
}

/// Read one answer with surrounding whitespace removed
pub fn ask(input: &mut dyn LineSource, prompt: &str) -> Result<String> {
    Ok(ask_raw(input, prompt)?.trim().to_string())
}

/// Read an answer, `None` when left blank
pub fn ask_optional(input: &mut dyn LineSource, prompt: &str) -> Result<Option<String>> {
    let answer = ask(input, prompt)?;
    Ok(if answer.is_empty() { None } else { Some(answer) })
}

/// Re-prompt until the answer is non-empty
pub fn ask_required(input: &mut dyn LineSource, prompt: &str, field: &str) -> Result<String> {
    loop {
        let answer = ask(input, prompt)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        println!("{}", format!("❌ {} cannot be empty.", field).red());
    }
}

/// Optional `YYYY-MM-DD` date; re-prompts on a malformed date
pub fn ask_date(input: &mut dyn LineSource, prompt: &str) -> Result<Option<String>> {
    loop {
        match ask_optional(input, prompt)? {
            None => return Ok(None),
            Some(date) if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok() => {
                return Ok(Some(date))
            }
            Some(_) => println!("{}", "❌ Please use the YYYY-MM-DD format.".red()),
        }
    }
}

/// Re-prompt until the answer is one of `choices` (case-insensitive)
pub fn ask_choice(input: &mut dyn LineSource, prompt: &str, choices: &[&str]) -> Result<String> {
    let prompt = format!("{} [{}]", prompt, choices.join("/"));
    loop {
        let answer = ask(input, &prompt)?;
        if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(&answer)) {
            return Ok(choice.to_string());
        }
        println!("{}", "Please select one of the available options".red());
    }
}

/// Yes/no question; re-prompts on anything else
pub fn confirm(input: &mut dyn LineSource, prompt: &str) -> Result<bool> {
    let prompt = format!("{} [y/n]", prompt);
    loop {
        match ask(input, &prompt)?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", "Please enter Y or N".red()),
        }
    }
}

/// Re-prompt until the answer parses as an integer in `min..=max`
pub fn ask_number(input: &mut dyn LineSource, prompt: &str, min: i64, max: i64) -> Result<i64> {
    loop {
        let answer = ask(input, prompt)?;
        match answer.parse::<i64>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(n),
            Ok(_) => println!(
                "{}",
                format!("❌ Please enter a valid number between {} and {}.", min, max).red()
            ),
            Err(_) => println!("{}", "❌ Please enter a valid number.".red()),
        }
    }
}

/// Whether an error (or anything it wraps) is a user interrupt
pub fn is_interrupt(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.downcast_ref::<Interrupted>().is_some())
}
