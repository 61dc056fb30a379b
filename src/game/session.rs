//! One game: a hidden target, the guesses made against it, and what they revealed

use rand::Rng;
use std::collections::BTreeSet;

use crate::catalog::{Catalog, Creature, Edition};
use crate::core::error::Result;
use crate::core::types::LearnItem;
use crate::deduce::{resolve_known, KnowledgeState, MatchCategory};

/// Result of one accepted guess
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub guess_name: String,
    /// The guess's level-up moves with their categories, in level order
    pub classifications: Vec<(LearnItem, MatchCategory)>,
    /// Moves that became known with this guess
    pub newly_known: Vec<String>,
    /// Whether the guess was the target itself
    pub solved: bool,
    /// Guesses made so far, this one included
    pub guess_count: usize,
}

/// State of a single game session
///
/// Starting a new game means building a new session; nothing is shared.
#[derive(Debug, Clone)]
pub struct GameSession {
    edition: Edition,
    target: Creature,
    guesses: Vec<Creature>,
    knowledge: KnowledgeState,
    known: BTreeSet<String>,
    solved: bool,
}

impl GameSession {
    /// New game against a chosen target
    pub fn new(target: Creature) -> Self {
        Self {
            edition: target.edition(),
            target,
            guesses: Vec::new(),
            knowledge: KnowledgeState::new(),
            known: BTreeSet::new(),
            solved: false,
        }
    }

    /// New game against a random target from `edition`
    pub fn start<R: Rng + ?Sized>(catalog: &Catalog, edition: Edition, rng: &mut R) -> Result<Self> {
        let target = catalog.random_creature(edition, rng)?.clone();
        tracing::info!(
            "New game in {} ({} candidates)",
            edition,
            catalog.creature_count(edition)
        );
        tracing::debug!("Target is {}", target.name());
        Ok(Self::new(target))
    }

    /// Resolve `name` in the catalog and apply it as a guess
    ///
    /// An unknown name is rejected before any state changes.
    pub fn submit_guess(&mut self, catalog: &Catalog, name: &str) -> Result<GuessOutcome> {
        let guess = catalog.lookup_creature(name, self.edition)?.clone();
        self.apply_guess(guess)
    }

    /// Apply an already resolved creature as a guess
    pub fn apply_guess(&mut self, guess: Creature) -> Result<GuessOutcome> {
        let summary = match self.knowledge.absorb(&guess, &self.target) {
            Ok(summary) => summary,
            Err(fault) => {
                tracing::warn!("Guess {} rejected: {}", guess.name(), fault);
                return Err(fault.into());
            }
        };
        tracing::debug!(
            "{}: {} ranges tightened, {} moves categorized",
            guess.name(),
            summary.tightened.len(),
            summary.newly_categorized.len()
        );

        let known = resolve_known(&mut self.knowledge, &self.target);
        let newly_known: Vec<String> = known.difference(&self.known).cloned().collect();
        self.known = known;

        let solved = guess.is_same_species(&self.target);
        self.solved |= solved;

        let guess_name = guess.name().to_string();
        self.guesses.push(guess);
        tracing::info!(
            "Guess #{} {}: {} moves known",
            self.guesses.len(),
            guess_name,
            self.known.len()
        );

        Ok(GuessOutcome {
            guess_name,
            classifications: summary.classifications,
            newly_known,
            solved,
            guess_count: self.guesses.len(),
        })
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn target(&self) -> &Creature {
        &self.target
    }

    /// Guesses in the order they were made
    pub fn guesses(&self) -> &[Creature] {
        &self.guesses
    }

    pub fn knowledge(&self) -> &KnowledgeState {
        &self.knowledge
    }

    /// Moves whose level is known, as of the last guess
    pub fn known_moves(&self) -> &BTreeSet<String> {
        &self.known
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}
