//! Deduction engine: classify guesses, accumulate hints, resolve known moves

pub mod classify;
pub mod knowledge;
pub mod resolve;

pub use classify::{classify, classify_all, MatchCategory};
pub use knowledge::{AbsorbSummary, KnowledgeState, RangeHint};
pub use resolve::resolve_known;
