//! HealthBot - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use healthbot::{
    advice::build_generator,
    cli::{Args, Verbosity},
    config::{Config, GEMINI_API_KEY_VAR},
    repl::{
        input::is_interrupt, show_research_topic, DisplayManager, HealthSession, InputHandler,
        SessionOptions,
    },
    research::ReferenceLibrary,
    storage::open_database,
    triage::KeywordTable,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("healthbot={}", verbosity.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbosity());

    let code = match run(args).await {
        Ok(()) => 0,
        Err(e) if is_interrupt(&e) => {
            println!("\n⚠️ Program interrupted by user.");
            println!("👋 Goodbye! Stay healthy!");
            0
        }
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "HealthBot stopped");
            println!("❌ An error occurred: {:#}", e);
            println!("⚠️ Please try again later.");
            1
        }
    };

    std::process::exit(code);
}

async fn run(args: Args) -> Result<()> {
    dotenv::dotenv().ok();
    let verbosity = args.verbosity();

    if let Some(topic) = &args.research {
        let display = DisplayManager::new(verbosity.show_progress());
        show_research_topic(&display, &ReferenceLibrary::builtin(), topic).await;
        return Ok(());
    }

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;
    tracing::info!(
        provider = %config.advice.provider,
        model = config.advice.model(),
        database = %config.database_path().display(),
        "Configuration loaded"
    );

    if !config.display.color_output {
        colored::control::set_override(false);
    }
    let display = DisplayManager::new(config.display.animations && verbosity.show_progress());

    let table = match KeywordTable::load(&config.keyword_table_path()) {
        Ok(table) => {
            display.show_success("Symptoms database loaded successfully!");
            table
        }
        Err(e) => {
            tracing::error!(error = %e, "Keyword table unavailable, continuing with an empty table");
            display.show_error(&format!("Error loading symptoms database: {}", e));
            KeywordTable::empty()
        }
    };

    let conn = open_database(&config.database_path()).context("Failed to open health log database")?;

    let api_key = std::env::var(GEMINI_API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty());
    let generator = build_generator(&config.advice, api_key).context("Failed to create advice client")?;
    tracing::info!(backend = generator.name(), "Advice backend ready");

    let input = InputHandler::new().context("Failed to initialise terminal input")?;
    let options = SessionOptions {
        history_limit: config.display.history_limit,
        export_dir: PathBuf::from("."),
    };

    let mut session = HealthSession::new(conn, table, generator, Box::new(input), display, options);
    session.run().await
}
