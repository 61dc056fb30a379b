//! Game sessions

pub mod session;

pub use session::{GameSession, GuessOutcome};
