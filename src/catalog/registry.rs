//! Read-only creature and move catalog
//!
//! This module provides the `Catalog` which owns every creature record per
//! edition plus the move type table, and answers the lookups a game needs.

use ahash::AHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use super::creature::{Creature, RawCreature};
use super::edition::Edition;
use crate::core::error::{GuessError, Result};

/// Reference data for one move
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveInfo {
    #[serde(rename = "type")]
    pub type_tag: String,
}

#[derive(Debug, Default)]
struct EditionTable {
    /// Keyed by lowercase name
    by_name: AHashMap<String, Creature>,
    /// Lowercase names, sorted, for deterministic random picks
    names: Vec<String>,
}

/// Registry of creatures per edition and of move types
#[derive(Debug, Default)]
pub struct Catalog {
    editions: AHashMap<Edition, EditionTable>,
    moves: AHashMap<String, MoveInfo>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse both data files from JSON text
    pub fn from_json_str(pokemon_json: &str, moves_json: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, RawCreature>> =
            serde_json::from_str(pokemon_json)?;
        let moves: HashMap<String, MoveInfo> = serde_json::from_str(moves_json)?;

        let mut catalog = Catalog::new();
        for (key, creatures) in raw {
            let Some(edition) = Edition::from_key(&key) else {
                tracing::warn!("Skipping unknown edition key {:?}", key);
                continue;
            };
            for (name, entry) in creatures {
                catalog.insert(entry.into_creature(&name, edition));
            }
        }
        for (name, info) in moves {
            catalog.insert_move(name, info);
        }

        tracing::info!(
            "Catalog loaded: {} editions, {} moves",
            catalog.editions.len(),
            catalog.moves.len()
        );
        Ok(catalog)
    }

    /// Load both data files from disk
    pub fn load(pokemon_path: &Path, moves_path: &Path) -> Result<Self> {
        let pokemon_json = std::fs::read_to_string(pokemon_path)?;
        let moves_json = std::fs::read_to_string(moves_path)?;
        Self::from_json_str(&pokemon_json, &moves_json)
    }

    /// Add or replace a creature record
    pub fn insert(&mut self, creature: Creature) {
        let table = self.editions.entry(creature.edition()).or_default();
        let key = creature.name().to_lowercase();
        if table.by_name.insert(key.clone(), creature).is_none() {
            let pos = table.names.binary_search(&key).unwrap_or_else(|p| p);
            table.names.insert(pos, key);
        }
    }

    pub fn insert_move(&mut self, move_name: impl Into<String>, info: MoveInfo) {
        self.moves.insert(move_name.into(), info);
    }

    /// Find a creature by name (case-insensitive) within an edition
    pub fn lookup_creature(&self, name: &str, edition: Edition) -> Result<&Creature> {
        let key = name.trim().to_lowercase();
        self.editions
            .get(&edition)
            .and_then(|table| table.by_name.get(&key))
            .ok_or_else(|| GuessError::CreatureNotFound {
                name: name.trim().to_string(),
                edition: edition.key().to_string(),
            })
    }

    /// Elemental type of a move, if the move is known
    pub fn lookup_move_type(&self, move_name: &str) -> Option<&str> {
        self.moves.get(move_name).map(|info| info.type_tag.as_str())
    }

    /// Whether `creature` shares the type of `move_name`
    pub fn is_same_type(&self, creature: &Creature, move_name: &str) -> bool {
        self.lookup_move_type(move_name)
            .is_some_and(|type_tag| creature.has_type(type_tag))
    }

    /// Pick a uniformly random creature from an edition
    pub fn random_creature<R: Rng + ?Sized>(&self, edition: Edition, rng: &mut R) -> Result<&Creature> {
        let table = self
            .editions
            .get(&edition)
            .ok_or_else(|| GuessError::EmptyEdition(edition.key().to_string()))?;
        table
            .names
            .choose(rng)
            .and_then(|key| table.by_name.get(key))
            .ok_or_else(|| GuessError::EmptyEdition(edition.key().to_string()))
    }

    /// Editions present in the data, in declaration order
    pub fn editions(&self) -> Vec<Edition> {
        let mut editions: Vec<_> = self.editions.keys().copied().collect();
        editions.sort();
        editions
    }

    /// Every distinct creature name across editions, capitalized and sorted
    pub fn creature_names(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .editions
            .values()
            .flat_map(|table| table.names.iter())
            .map(|name| capitalize(name))
            .collect();
        names.into_iter().collect()
    }

    pub fn creature_count(&self, edition: Edition) -> usize {
        self.editions.get(&edition).map_or(0, |t| t.names.len())
    }
}

/// Upper-case the first character
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const POKEMON: &str = r#"{
        "red-blue": {
            "bulbasaur": {"id": 1, "types": ["grass", "poison"],
                          "level-up": [[1, "tackle"], [7, "leech-seed"]],
                          "machine": [[0, "cut"]]},
            "charmander": {"id": 4, "types": ["fire"],
                           "level-up": [[1, "scratch"], [9, "ember"]]}
        },
        "yellow": {
            "pikachu": {"id": 25, "types": ["electric"],
                        "level-up": [[1, "thunder-shock"]]}
        },
        "stadium": {
            "mew": {"id": 151, "level-up": []}
        }
    }"#;

    const MOVES: &str = r#"{
        "tackle": {"type": "normal", "power": "40"},
        "ember": {"type": "fire", "power": "40"},
        "leech-seed": {"type": "grass", "power": null}
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json_str(POKEMON, MOVES).unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = catalog();
        let creature = catalog.lookup_creature("BulbaSaur", Edition::RedBlue).unwrap();
        assert_eq!(creature.id(), 1);
    }

    #[test]
    fn test_lookup_respects_edition() {
        let catalog = catalog();
        let result = catalog.lookup_creature("pikachu", Edition::RedBlue);
        assert!(matches!(result, Err(GuessError::CreatureNotFound { .. })));
        assert!(catalog.lookup_creature("pikachu", Edition::Yellow).is_ok());
    }

    #[test]
    fn test_unknown_edition_keys_skipped() {
        let catalog = catalog();
        assert_eq!(catalog.editions(), vec![Edition::RedBlue, Edition::Yellow]);
    }

    #[test]
    fn test_move_type_and_same_type() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_move_type("ember"), Some("fire"));
        assert_eq!(catalog.lookup_move_type("splash"), None);

        let charmander = catalog.lookup_creature("charmander", Edition::RedBlue).unwrap();
        assert!(catalog.is_same_type(charmander, "ember"));
        assert!(!catalog.is_same_type(charmander, "tackle"));
    }

    #[test]
    fn test_creature_names_deduplicated_and_capitalized() {
        let catalog = catalog();
        assert_eq!(
            catalog.creature_names(),
            vec!["Bulbasaur", "Charmander", "Pikachu"]
        );
    }

    #[test]
    fn test_random_creature_is_seed_stable() {
        let catalog = catalog();
        let a = catalog
            .random_creature(Edition::RedBlue, &mut ChaCha8Rng::seed_from_u64(7))
            .unwrap()
            .name()
            .to_string();
        let b = catalog
            .random_creature(Edition::RedBlue, &mut ChaCha8Rng::seed_from_u64(7))
            .unwrap()
            .name()
            .to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_creature_empty_edition() {
        let catalog = catalog();
        let result = catalog.random_creature(Edition::Crystal, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(matches!(result, Err(GuessError::EmptyEdition(_))));
    }
}
