//! Per-move comparison of a guess against the target

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Creature, METHOD_EGG, METHOD_MACHINE, METHOD_TUTOR};
use crate::core::types::LearnItem;

/// How one of the guess's level-up moves relates to the target's learn data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchCategory {
    /// Target learns the move by level-up at the same level
    Exact,
    /// Target learns the move by level-up at a higher level
    TargetHigher,
    /// Target learns the move by level-up at a lower level
    TargetLower,
    ByMachine,
    ByEgg,
    ByTutor,
    /// Target cannot learn the move at all
    NoMatch,
}

impl MatchCategory {
    /// Categories that carry no level information
    pub const CATEGORICAL: [MatchCategory; 4] = [
        MatchCategory::ByMachine,
        MatchCategory::ByEgg,
        MatchCategory::ByTutor,
        MatchCategory::NoMatch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MatchCategory::Exact => "Match",
            MatchCategory::TargetHigher => "LevelHigher",
            MatchCategory::TargetLower => "LevelLower",
            MatchCategory::ByMachine => "ByTM",
            MatchCategory::ByEgg => "ByEgg",
            MatchCategory::ByTutor => "ByTutor",
            MatchCategory::NoMatch => "NoMatch",
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Buckets searched, in priority order, when the move is not a level-up move
const FALLBACK_METHODS: [(&str, MatchCategory); 3] = [
    (METHOD_EGG, MatchCategory::ByEgg),
    (METHOD_TUTOR, MatchCategory::ByTutor),
    (METHOD_MACHINE, MatchCategory::ByMachine),
];

/// Classify one learn item of a guess against the target
pub fn classify(item: &LearnItem, target: &Creature) -> MatchCategory {
    if let Some(entry) = target.level_up_entry(&item.move_name) {
        return match entry.level.cmp(&item.level) {
            std::cmp::Ordering::Equal => MatchCategory::Exact,
            std::cmp::Ordering::Greater => MatchCategory::TargetHigher,
            std::cmp::Ordering::Less => MatchCategory::TargetLower,
        };
    }

    FALLBACK_METHODS
        .iter()
        .find(|(method, _)| target.learnset().contains(method, &item.move_name))
        .map(|&(_, category)| category)
        .unwrap_or(MatchCategory::NoMatch)
}

/// Classify every level-up move of a guess, in the guess's level order
pub fn classify_all(guess: &Creature, target: &Creature) -> Vec<(LearnItem, MatchCategory)> {
    guess
        .level_up()
        .iter()
        .map(|item| (item.clone(), classify(item, target)))
        .collect()
}
