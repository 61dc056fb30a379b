//! Headless Guess Replay
//!
//! Plays a fixed list of guesses against a chosen target and prints the
//! resulting knowledge as JSON.

use clap::Parser;
use moveguess::catalog::{Catalog, Edition};
use moveguess::core::config::{GameConfig, DEFAULT_CONFIG_PATH};
use moveguess::core::error::{GuessError, Result};
use moveguess::deduce::KnowledgeState;
use moveguess::game::GameSession;
use moveguess::render::{summary_rows, SummaryRow};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Replay guesses against a known target
#[derive(Parser, Debug)]
#[command(name = "guess_replay")]
#[command(about = "Replay guesses against a target and print the deduced knowledge as JSON")]
struct Args {
    /// Target creature name
    #[arg(long)]
    target: String,

    /// Guess, in order (repeatable)
    #[arg(long = "guess")]
    guesses: Vec<String>,

    /// Edition key, defaults to the config's
    #[arg(long)]
    edition: Option<String>,

    /// Config file (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct ReplayResult {
    edition: Edition,
    target: String,
    guesses: Vec<String>,
    rejected: Vec<String>,
    solved: bool,
    known_moves: BTreeSet<String>,
    knowledge: KnowledgeState,
    summary: Vec<SummaryRow>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GameConfig::load(&args.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let edition = match &args.edition {
        Some(key) => Edition::from_key(key).ok_or_else(|| GuessError::UnknownEdition(key.clone()))?,
        None => config.edition()?,
    };

    let catalog = Catalog::load(&config.pokemon_data, &config.move_data)?;
    let target = catalog.lookup_creature(&args.target, edition)?.clone();
    let mut session = GameSession::new(target);

    let mut rejected = Vec::new();
    for guess in &args.guesses {
        if let Err(e) = session.submit_guess(&catalog, guess) {
            eprintln!("Warning: guess '{}' skipped: {}", guess, e);
            rejected.push(guess.clone());
        }
    }

    let result = ReplayResult {
        edition,
        target: session.target().name().to_string(),
        guesses: session.guesses().iter().map(|g| g.name().to_string()).collect(),
        rejected,
        solved: session.is_solved(),
        known_moves: session.known_moves().clone(),
        knowledge: session.knowledge().clone(),
        summary: summary_rows(&session, &catalog),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}
