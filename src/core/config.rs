//! Game configuration
//!
//! Values come from a TOML file (`data/moveguess.toml` by default). Every field
//! has a default, so a partial file or no file at all is fine.

use crate::catalog::Edition;
use crate::core::error::{GuessError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the config file
pub const DEFAULT_CONFIG_PATH: &str = "data/moveguess.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === DATA ===
    /// Creature learnset file (`{ edition: { creature: { ... } } }`)
    pub pokemon_data: PathBuf,

    /// Move reference file (`{ move: { "type": ..., "power": ... } }`)
    pub move_data: PathBuf,

    // === GAME ===
    /// Edition key a new game starts in, e.g. `"red-blue"`
    pub default_edition: String,

    /// Seed for target selection
    ///
    /// When unset, every game draws its target from entropy.
    pub seed: Option<u64>,

    // === LOGGING ===
    /// Filter directive handed to `tracing_subscriber` when `RUST_LOG` is unset
    pub log_filter: String,

    // === DISPLAY ===
    /// Minimum rows per categorical table before it overflows into another
    pub overflow_min_rows: usize,

    /// Categorical lists longer than `overflow_min_rows * overflow_divisor`
    /// get `len / overflow_divisor` rows per table instead
    pub overflow_divisor: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pokemon_data: PathBuf::from("res/all_pokemon.json"),
            move_data: PathBuf::from("res/moves.json"),
            default_edition: Edition::RedBlue.key().to_string(),
            seed: None,
            log_filter: "moveguess=info".to_string(),
            overflow_min_rows: 15,
            overflow_divisor: 5,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate().map_err(GuessError::InvalidConfig)?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The configured starting edition
    pub fn edition(&self) -> Result<Edition> {
        Edition::from_key(&self.default_edition)
            .ok_or_else(|| GuessError::UnknownEdition(self.default_edition.clone()))
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if Edition::from_key(&self.default_edition).is_none() {
            return Err(format!(
                "default_edition ({}) is not a known edition key",
                self.default_edition
            ));
        }

        if self.overflow_min_rows == 0 {
            return Err("overflow_min_rows must be positive".into());
        }

        if self.overflow_divisor == 0 {
            return Err("overflow_divisor must be positive".into());
        }

        Ok(())
    }
}
