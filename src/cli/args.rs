//! Command-line argument parsing for HealthBot
//!
//! Provides the clap-based CLI, verbosity control and config overrides.

use crate::config::{AdviceProvider, Config};
use clap::Parser;
use std::path::PathBuf;

/// HealthBot - Your Personal Health Assistant
#[derive(Parser, Debug)]
#[command(name = "healthbot")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "HealthBot - Your Personal Health Assistant", long_about = None)]
pub struct Args {
    /// Show a health research topic and exit
    #[arg(long, value_name = "TOPIC")]
    pub research: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Health log database file
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Keyword table (JSON)
    #[arg(long)]
    pub symptoms: Option<PathBuf>,

    /// Advice provider: gemini or ollama
    #[arg(long)]
    pub provider: Option<AdviceProvider>,

    /// Model used by the advice provider
    #[arg(short, long)]
    pub model: Option<String>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only in the log)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(db) = &self.db {
            config.storage.database_path = db.to_string_lossy().into_owned();
        }
        if let Some(symptoms) = &self.symptoms {
            config.triage.keyword_table = symptoms.to_string_lossy().into_owned();
        }
        if let Some(provider) = self.provider {
            config.advice.provider = provider;
        }
        if let Some(model) = &self.model {
            config.advice.model = Some(model.clone());
        }
    }
}

impl Verbosity {
    /// Default tracing level when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if should show spinners and loading animations
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("healthbot").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&[]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["-vv"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(parse(&["-q", "-v"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(Verbosity::Quiet.log_level(), "error");
        assert_eq!(Verbosity::Normal.log_level(), "warn");
        assert_eq!(Verbosity::Verbose.log_level(), "info");
        assert_eq!(Verbosity::VeryVerbose.log_level(), "debug");
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
    }

    #[test]
    fn test_research_topic_with_spaces() {
        let args = parse(&["--research", "common cold"]);
        assert_eq!(args.research.as_deref(), Some("common cold"));
    }

    #[test]
    fn test_provider_parsed() {
        assert_eq!(parse(&["--provider", "ollama"]).provider, Some(AdviceProvider::Ollama));
        assert!(Args::try_parse_from(["healthbot", "--provider", "openai"]).is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let args = parse(&[
            "--db",
            "/tmp/h.db",
            "--symptoms",
            "table.json",
            "--provider",
            "ollama",
            "--model",
            "llama3",
        ]);
        let mut config = Config::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.storage.database_path, "/tmp/h.db");
        assert_eq!(config.triage.keyword_table, "table.json");
        assert_eq!(config.advice.provider, AdviceProvider::Ollama);
        assert_eq!(config.advice.model(), "llama3");
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = Config::default();
        parse(&[]).apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }
}
