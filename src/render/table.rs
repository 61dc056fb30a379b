//! Display rows built from a game session
//!
//! Nothing here feeds back into deduction. These are the shapes a front end
//! draws: the merged view of the target's moveset, the per-guess tables and
//! the categorical move lists.

use serde::Serialize;

use crate::catalog::{capitalize, Catalog, Creature, Edition};
use crate::core::types::Level;
use crate::deduce::{classify_all, KnowledgeState, MatchCategory, RangeHint};
use crate::game::GameSession;

/// One row of the merged target table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SummaryRow {
    /// A target move whose level has been found
    Known {
        level: Level,
        move_name: String,
        same_type: bool,
    },
    /// A target level-up slot whose move is still unknown
    Hidden { level: Level },
    /// A move the target learns, with the bounds found so far
    Bounded { move_name: String, range: RangeHint },
}

impl SummaryRow {
    /// Color the row is drawn with, if any
    pub fn category(&self) -> Option<MatchCategory> {
        match self {
            SummaryRow::Known { .. } => Some(MatchCategory::Exact),
            SummaryRow::Hidden { .. } => None,
            SummaryRow::Bounded { range, .. } if !range.has_lower_bound() => {
                Some(MatchCategory::TargetLower)
            }
            SummaryRow::Bounded { .. } => Some(MatchCategory::TargetHigher),
        }
    }
}

/// Level a bounded row is listed at: its lower bound, else its upper bound
fn display_level(range: RangeHint) -> Level {
    if range.has_lower_bound() {
        range.low
    } else {
        range.high
    }
}

/// Merge the target's level-up list with the deduced bounds
///
/// Every target level-up slot appears once, either revealed or hidden.
/// Moves with open bounds are listed between them at their display level.
pub fn summary_rows(session: &GameSession, catalog: &Catalog) -> Vec<SummaryRow> {
    let target = session.target();
    let known = session.known_moves();

    let mut keyed: Vec<(Level, u8, SummaryRow)> = Vec::new();
    for item in target.level_up() {
        if known.contains(&item.move_name) {
            keyed.push((
                item.level,
                0,
                SummaryRow::Known {
                    level: item.level,
                    move_name: item.move_name.clone(),
                    same_type: catalog.is_same_type(target, &item.move_name),
                },
            ));
        } else {
            keyed.push((item.level, 2, SummaryRow::Hidden { level: item.level }));
        }
    }

    for (move_name, range) in session.knowledge().ordered_hints() {
        if known.contains(move_name) {
            continue;
        }
        keyed.push((
            display_level(range),
            1,
            SummaryRow::Bounded {
                move_name: move_name.to_string(),
                range,
            },
        ));
    }

    keyed.sort_by_key(|(level, rank, _)| (*level, *rank));
    keyed.into_iter().map(|(_, _, row)| row).collect()
}

/// One row of a guess's own table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessRow {
    pub level: Level,
    pub move_name: String,
    pub category: MatchCategory,
    /// Move shares a type with the guessed creature
    pub same_type: bool,
}

pub fn guess_rows(guess: &Creature, target: &Creature, catalog: &Catalog) -> Vec<GuessRow> {
    classify_all(guess, target)
        .into_iter()
        .map(|(item, category)| GuessRow {
            same_type: catalog.is_same_type(guess, &item.move_name),
            level: item.level,
            move_name: item.move_name,
            category,
        })
        .collect()
}

/// A column of categorical moves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTable {
    pub category: MatchCategory,
    pub moves: Vec<String>,
}

/// Split each categorical set into columns
///
/// A column holds `max(min_rows, ceil(len / divisor))` moves, so long lists
/// spread over at most `divisor` columns.
pub fn category_tables(
    knowledge: &KnowledgeState,
    min_rows: usize,
    divisor: usize,
) -> Vec<CategoryTable> {
    let mut tables = Vec::new();
    for category in MatchCategory::CATEGORICAL {
        let Some(moves) = knowledge.set(category) else {
            continue;
        };
        if moves.is_empty() {
            continue;
        }
        let rows = min_rows.max(moves.len().div_ceil(divisor.max(1))).max(1);
        let moves: Vec<String> = moves.iter().cloned().collect();
        for chunk in moves.chunks(rows) {
            tables.push(CategoryTable {
                category,
                moves: chunk.to_vec(),
            });
        }
    }
    tables
}

/// `"thunder-shock"` -> `"Thunder Shock"`
pub fn pretty_move_name(move_name: &str) -> String {
    move_name
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

const SPRITE_PREFIX: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/";

/// Fixed gold/silver alternation so a creature's sprite never flips between games
const GOLD_SILVER_PICK: [bool; 14] = [
    false, true, true, false, true, false, false, false, true, true, false, true, false, true,
];

/// Sprite image URL for a creature in an edition
pub fn sprite_url(edition: Edition, id: u32) -> String {
    match edition.generation() {
        None => format!("{SPRITE_PREFIX}{id}.png"),
        Some(generation) => {
            let version = match edition {
                Edition::GoldSilver => {
                    if GOLD_SILVER_PICK[id as usize % GOLD_SILVER_PICK.len()] {
                        "gold"
                    } else {
                        "silver"
                    }
                }
                other => other.key(),
            };
            format!("{SPRITE_PREFIX}versions/{generation}/{version}/{id}.png")
        }
    }
}
