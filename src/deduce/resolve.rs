//! Deduce which bounded moves are pinned down by the target's moveset

use std::collections::BTreeSet;

use super::knowledge::KnowledgeState;
use crate::catalog::Creature;

/// Moves whose level is known, collapsing uniquely determined ranges
///
/// A range `[low, high]` with exactly one target level-up entry inside it can
/// only be that entry, so the range is collapsed to its level. Must be rerun
/// after every guess: a later bound can disambiguate an earlier range.
pub fn resolve_known(state: &mut KnowledgeState, target: &Creature) -> BTreeSet<String> {
    let mut known = BTreeSet::new();
    let mut collapses = Vec::new();

    for (move_name, range) in state.ranges() {
        if range.is_resolved() {
            known.insert(move_name.to_string());
            continue;
        }

        let mut candidates = target
            .level_up()
            .iter()
            .filter(|item| range.contains(item.level));
        if let (Some(only), None) = (candidates.next(), candidates.next()) {
            collapses.push((move_name.to_string(), only.level));
        }
    }

    for (move_name, level) in collapses {
        tracing::debug!("Deduced {} at level {}", move_name, level);
        state.collapse(&move_name, level);
        known.insert(move_name);
    }

    known
}
