//! Moveguess - Entry Point
//!
//! Interactive terminal game: guess the hidden creature from what its
//! level-up moveset reveals about each guess.

use clap::Parser;
use moveguess::catalog::{Catalog, Edition};
use moveguess::core::config::{GameConfig, DEFAULT_CONFIG_PATH};
use moveguess::core::error::{GuessError, Result};
use moveguess::game::GameSession;
use moveguess::render::write_session;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Guess the hidden creature from its level-up moves
#[derive(Parser, Debug)]
#[command(name = "moveguess")]
struct Args {
    /// Config file (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Creature learnset JSON, overrides the config
    #[arg(long)]
    pokemon_data: Option<PathBuf>,

    /// Move type JSON, overrides the config
    #[arg(long)]
    move_data: Option<PathBuf>,

    /// Edition key to start in, e.g. "crystal"
    #[arg(long)]
    edition: Option<String>,

    /// Random seed for target selection
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = GameConfig::load(&args.config)?;
    if let Some(path) = args.pokemon_data {
        config.pokemon_data = path;
    }
    if let Some(path) = args.move_data {
        config.move_data = path;
    }
    if let Some(edition) = args.edition {
        config.default_edition = edition;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().map_err(GuessError::InvalidConfig)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Moveguess starting...");

    let catalog = Catalog::load(&config.pokemon_data, &config.move_data)?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut session = GameSession::start(&catalog, config.edition()?, &mut rng)?;

    println!("\n=== MOVEGUESS ===");
    println!("Guess the hidden creature from its level-up moves");
    println!();
    println!("Commands:");
    println!("  <name>          - Guess a creature");
    println!("  new [edition]   - Start a new game");
    println!("  names [prefix]  - List creature names");
    println!("  editions        - List editions in the data");
    println!("  give up         - Reveal the target");
    println!("  quit / q        - Exit the game");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write_session(
        &mut stdout,
        &session,
        &catalog,
        config.overflow_min_rows,
        config.overflow_divisor,
    )?;
    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "editions" {
            for edition in catalog.editions() {
                println!("  {} ({} creatures)", edition, catalog.creature_count(edition));
            }
            continue;
        }

        if let Some(prefix) = input.strip_prefix("names") {
            if prefix.is_empty() || prefix.starts_with(' ') {
                let prefix = prefix.trim().to_lowercase();
                let matches: Vec<String> = catalog
                    .creature_names()
                    .into_iter()
                    .filter(|name| name.to_lowercase().starts_with(&prefix))
                    .collect();
                println!("{}", matches.join(", "));
                continue;
            }
        }

        if input == "give up" {
            println!("The target was {}.", session.target().name());
            continue;
        }

        if input == "new" || input.starts_with("new ") {
            let edition = match input.strip_prefix("new").map(str::trim) {
                Some(key) if !key.is_empty() => match Edition::from_key(key) {
                    Some(edition) => edition,
                    None => {
                        println!("Unknown edition: {}", key);
                        continue;
                    }
                },
                _ => session.edition(),
            };
            match GameSession::start(&catalog, edition, &mut rng) {
                Ok(new_session) => {
                    session = new_session;
                    println!("New game started in {}.", edition);
                    write_session(
                        &mut stdout,
                        &session,
                        &catalog,
                        config.overflow_min_rows,
                        config.overflow_divisor,
                    )?;
                }
                Err(e) => println!("{}", e),
            }
            continue;
        }

        match session.submit_guess(&catalog, input) {
            Ok(outcome) => {
                println!();
                write_session(
                    &mut stdout,
                    &session,
                    &catalog,
                    config.overflow_min_rows,
                    config.overflow_divisor,
                )?;
                if !outcome.newly_known.is_empty() {
                    println!("\nNewly known: {}", outcome.newly_known.join(", "));
                }
            }
            Err(GuessError::CreatureNotFound { name, .. }) => {
                println!("{} is not a valid pokemon", name);
            }
            Err(e) => println!("{}", e),
        }
    }

    println!("\nGoodbye!");
    Ok(())
}
