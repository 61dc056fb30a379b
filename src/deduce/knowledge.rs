//! Accumulated knowledge about the target's moveset
//!
//! `KnowledgeState` only ever tightens: level bounds narrow and categorical
//! sets grow. Everything a player has deduced stays deduced.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::classify::{classify_all, MatchCategory};
use crate::catalog::Creature;
use crate::core::error::DataIntegrityFault;
use crate::core::types::{LearnItem, Level, LEVEL_UNBOUNDED_HIGH, LEVEL_UNBOUNDED_LOW};

/// Inclusive bounds on the level at which the target learns a move
///
/// Invariant: `low <= high`. `low == high` means the level is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeHint {
    pub low: Level,
    pub high: Level,
}

impl RangeHint {
    pub const UNBOUNDED: RangeHint = RangeHint {
        low: LEVEL_UNBOUNDED_LOW,
        high: LEVEL_UNBOUNDED_HIGH,
    };

    pub fn new(low: Level, high: Level) -> Self {
        debug_assert!(low <= high, "RangeHint bounds crossed: {low} > {high}");
        Self { low, high }
    }

    pub fn exact(level: Level) -> Self {
        Self { low: level, high: level }
    }

    pub fn is_resolved(&self) -> bool {
        self.low == self.high
    }

    pub fn has_lower_bound(&self) -> bool {
        self.low != LEVEL_UNBOUNDED_LOW
    }

    pub fn has_upper_bound(&self) -> bool {
        self.high != LEVEL_UNBOUNDED_HIGH
    }

    pub fn width(&self) -> Level {
        self.high - self.low
    }

    pub fn contains(&self, level: Level) -> bool {
        self.low <= level && level <= self.high
    }
}

impl Default for RangeHint {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for RangeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.has_lower_bound(), self.has_upper_bound()) {
            _ if self.is_resolved() => write!(f, "{}", self.low),
            (false, false) => f.write_str("?"),
            (false, true) => write!(f, "-{}", self.high),
            (true, false) => write!(f, "{}-", self.low),
            (true, true) => write!(f, "{}-{}", self.low, self.high),
        }
    }
}

/// What one absorbed guess changed
#[derive(Debug, Clone, Default)]
pub struct AbsorbSummary {
    /// Every level-up move of the guess with its category, in level order
    pub classifications: Vec<(LearnItem, MatchCategory)>,
    /// Moves whose range got strictly narrower (or first appeared)
    pub tightened: Vec<String>,
    /// Moves added to a categorical set for the first time
    pub newly_categorized: Vec<String>,
}

/// Everything deduced about the target so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeState {
    ranges: BTreeMap<String, RangeHint>,
    by_machine: BTreeSet<String>,
    by_egg: BTreeSet<String>,
    by_tutor: BTreeSet<String>,
    no_match: BTreeSet<String>,
}

impl KnowledgeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from known ranges, e.g. a replayed position
    pub fn from_ranges<I, S>(ranges: I) -> Self
    where
        I: IntoIterator<Item = (S, RangeHint)>,
        S: Into<String>,
    {
        Self {
            ranges: ranges.into_iter().map(|(m, r)| (m.into(), r)).collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
            && self.by_machine.is_empty()
            && self.by_egg.is_empty()
            && self.by_tutor.is_empty()
            && self.no_match.is_empty()
    }

    pub fn range(&self, move_name: &str) -> Option<RangeHint> {
        self.ranges.get(move_name).copied()
    }

    pub fn ranges(&self) -> impl Iterator<Item = (&str, RangeHint)> {
        self.ranges.iter().map(|(m, r)| (m.as_str(), *r))
    }

    /// The categorical set for `category`; `None` for level-up categories
    pub fn set(&self, category: MatchCategory) -> Option<&BTreeSet<String>> {
        match category {
            MatchCategory::ByMachine => Some(&self.by_machine),
            MatchCategory::ByEgg => Some(&self.by_egg),
            MatchCategory::ByTutor => Some(&self.by_tutor),
            MatchCategory::NoMatch => Some(&self.no_match),
            _ => None,
        }
    }

    fn set_mut(&mut self, category: MatchCategory) -> Option<&mut BTreeSet<String>> {
        match category {
            MatchCategory::ByMachine => Some(&mut self.by_machine),
            MatchCategory::ByEgg => Some(&mut self.by_egg),
            MatchCategory::ByTutor => Some(&mut self.by_tutor),
            MatchCategory::NoMatch => Some(&mut self.no_match),
            _ => None,
        }
    }

    /// Level-up hints ordered by lower bound, then upper bound, then name
    pub fn ordered_hints(&self) -> Vec<(&str, RangeHint)> {
        let mut hints: Vec<_> = self.ranges().collect();
        hints.sort_by(|(a_name, a), (b_name, b)| {
            a.low
                .cmp(&b.low)
                .then(a.high.cmp(&b.high))
                .then(a_name.cmp(b_name))
        });
        hints
    }

    /// Merge every level-up move of `guess`, classified against `target`
    ///
    /// All updates of the guess are staged first. If any of them contradicts
    /// what is already known, nothing is committed and the fault is returned.
    pub fn absorb(
        &mut self,
        guess: &Creature,
        target: &Creature,
    ) -> Result<AbsorbSummary, DataIntegrityFault> {
        let classifications = classify_all(guess, target);

        let mut staged: BTreeMap<&str, RangeHint> = BTreeMap::new();
        let mut categorized: Vec<(MatchCategory, &str)> = Vec::new();

        for (item, category) in &classifications {
            let name = item.move_name.as_str();
            let current = staged
                .get(name)
                .copied()
                .or_else(|| self.range(name))
                .unwrap_or_default();

            let next = match category {
                MatchCategory::Exact => {
                    if !current.contains(item.level) {
                        return Err(DataIntegrityFault::ExactOutsideRange {
                            move_name: item.move_name.clone(),
                            level: item.level,
                            low: current.low,
                            high: current.high,
                        });
                    }
                    RangeHint::exact(item.level)
                }
                MatchCategory::TargetHigher => RangeHint {
                    low: current.low.max(item.level),
                    high: current.high,
                },
                MatchCategory::TargetLower => RangeHint {
                    low: current.low,
                    high: current.high.min(item.level),
                },
                _ => {
                    categorized.push((*category, name));
                    continue;
                }
            };

            if next.low > next.high {
                return Err(DataIntegrityFault::CrossedBounds {
                    move_name: item.move_name.clone(),
                    low: next.low,
                    high: next.high,
                });
            }
            staged.insert(name, next);
        }

        let mut tightened = Vec::new();
        for (name, next) in staged {
            if self.range(name) != Some(next) {
                tightened.push(name.to_string());
                self.ranges.insert(name.to_string(), next);
            }
        }

        let mut newly_categorized = Vec::new();
        for (category, name) in categorized {
            if let Some(set) = self.set_mut(category) {
                if set.insert(name.to_string()) {
                    newly_categorized.push(name.to_string());
                }
            }
        }

        Ok(AbsorbSummary {
            classifications,
            tightened,
            newly_categorized,
        })
    }

    /// Pin a bounded move to a level deduced from the target's moveset
    pub(crate) fn collapse(&mut self, move_name: &str, level: Level) {
        if let Some(range) = self.ranges.get_mut(move_name) {
            if range.contains(level) {
                *range = RangeHint::exact(level);
            }
        }
    }
}
