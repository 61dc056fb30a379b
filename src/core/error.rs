use crate::core::types::Level;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuessError {
    #[error("Creature not found: {name} ({edition})")]
    CreatureNotFound { name: String, edition: String },

    #[error("Unknown edition: {0}")]
    UnknownEdition(String),

    #[error("No creatures available for edition {0}")]
    EmptyEdition(String),

    #[error("Data integrity fault: {0}")]
    DataIntegrity(#[from] DataIntegrityFault),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Catalog data that contradicts knowledge already deduced from it
///
/// Only reachable with inconsistent learn data; truthful data never
/// produces one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityFault {
    #[error("{move_name}: exact level {level} lies outside known range {low}-{high}")]
    ExactOutsideRange {
        move_name: String,
        level: Level,
        low: Level,
        high: Level,
    },

    #[error("{move_name}: bounds crossed ({low} > {high})")]
    CrossedBounds {
        move_name: String,
        low: Level,
        high: Level,
    },
}

pub type Result<T> = std::result::Result<T, GuessError>;
