//! Core type definitions, errors and configuration shared across the crate

pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{DataIntegrityFault, GuessError, Result};
pub use types::{LearnItem, Level, LEVEL_UNBOUNDED_HIGH, LEVEL_UNBOUNDED_LOW};
