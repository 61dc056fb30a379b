//! Creature records built from catalog data

use crate::catalog::edition::Edition;
use crate::core::types::LearnItem;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const METHOD_LEVEL_UP: &str = "level-up";
pub const METHOD_EGG: &str = "egg";
pub const METHOD_TUTOR: &str = "tutor";
pub const METHOD_MACHINE: &str = "machine";

/// Non-level-up acquisition methods, keyed by method name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnSet {
    methods: BTreeMap<String, Vec<LearnItem>>,
}

impl LearnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, mostly for tests and fixtures
    pub fn with(mut self, method: &str, items: Vec<LearnItem>) -> Self {
        self.methods.entry(method.to_string()).or_default().extend(items);
        self
    }

    /// Items learned through `method`, empty if the creature has none
    pub fn method(&self, method: &str) -> &[LearnItem] {
        self.methods.get(method).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, method: &str, move_name: &str) -> bool {
        self.method(method).iter().any(|item| item.move_name == move_name)
    }
}

/// A creature's identity and complete learn data for one edition
///
/// Read-only once built; all fields are behind accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    name: String,
    id: u32,
    edition: Edition,
    /// Sorted ascending by level, one entry per move
    level_up: Vec<LearnItem>,
    learnset: LearnSet,
    types: Vec<String>,
}

impl Creature {
    /// Build a creature, normalizing the level-up list
    ///
    /// The list is sorted by level (stable). If a move appears more than once,
    /// the first entry after sorting is kept and the rest are dropped.
    pub fn new(
        name: impl Into<String>,
        id: u32,
        edition: Edition,
        mut level_up: Vec<LearnItem>,
        learnset: LearnSet,
        types: Vec<String>,
    ) -> Self {
        let name = name.into();
        level_up.sort_by_key(|item| item.level);

        let mut seen = AHashSet::with_capacity(level_up.len());
        level_up.retain(|item| {
            if seen.insert(item.move_name.clone()) {
                true
            } else {
                tracing::warn!(
                    "{} ({}): duplicate level-up entry {} dropped",
                    name,
                    edition,
                    item
                );
                false
            }
        });

        Self {
            name,
            id,
            edition,
            level_up,
            learnset,
            types,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// National dex number
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn level_up(&self) -> &[LearnItem] {
        &self.level_up
    }

    pub fn learnset(&self) -> &LearnSet {
        &self.learnset
    }

    /// Level-up entry for a move, if the creature learns it by leveling
    pub fn level_up_entry(&self, move_name: &str) -> Option<&LearnItem> {
        self.level_up.iter().find(|item| item.move_name == move_name)
    }

    pub fn has_type(&self, type_tag: &str) -> bool {
        self.types.iter().any(|t| t == type_tag)
    }

    /// Same creature, ignoring case and edition
    pub fn is_same_species(&self, other: &Creature) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

/// On-disk shape of one creature entry
///
/// Every key besides `id`, `types` and `level-up` is an acquisition method.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCreature {
    pub id: u32,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(flatten)]
    pub methods: HashMap<String, Vec<LearnItem>>,
}

impl RawCreature {
    pub(crate) fn into_creature(mut self, name: &str, edition: Edition) -> Creature {
        let level_up = self.methods.remove(METHOD_LEVEL_UP).unwrap_or_default();
        let learnset = LearnSet {
            methods: self.methods.into_iter().collect(),
        };
        Creature::new(name, self.id, edition, level_up, learnset, self.types)
    }
}
