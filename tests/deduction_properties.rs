//! Property tests for knowledge accumulation
//!
//! Random targets and guess sequences; knowledge must only ever tighten and
//! must always stay consistent with the target's real moveset.

use moveguess::catalog::{Creature, Edition, LearnSet, METHOD_EGG, METHOD_MACHINE};
use moveguess::core::types::LearnItem;
use moveguess::deduce::{resolve_known, KnowledgeState, MatchCategory};
use proptest::collection::{btree_map, btree_set, vec};
use proptest::prelude::*;
use std::collections::BTreeMap;

const MOVE_POOL: usize = 12;

fn move_name(idx: usize) -> String {
    format!("move-{idx}")
}

fn level_up_strategy() -> impl Strategy<Value = Vec<LearnItem>> {
    btree_map(0..MOVE_POOL, 1u8..=60, 0..8).prop_map(|moves| {
        moves
            .into_iter()
            .map(|(idx, level)| LearnItem::new(level, move_name(idx)))
            .collect()
    })
}

fn target_strategy() -> impl Strategy<Value = Creature> {
    (
        level_up_strategy(),
        btree_set(0..MOVE_POOL, 0..4),
        btree_set(0..MOVE_POOL, 0..4),
    )
        .prop_map(|(level_up, machine, egg)| {
            let learnset = LearnSet::new()
                .with(
                    METHOD_MACHINE,
                    machine.into_iter().map(|i| LearnItem::new(0, move_name(i))).collect(),
                )
                .with(
                    METHOD_EGG,
                    egg.into_iter().map(|i| LearnItem::new(0, move_name(i))).collect(),
                );
            Creature::new("target", 0, Edition::RedBlue, level_up, learnset, vec![])
        })
}

fn guesses_strategy() -> impl Strategy<Value = Vec<Creature>> {
    vec(level_up_strategy(), 1..8).prop_map(|lists| {
        lists
            .into_iter()
            .enumerate()
            .map(|(i, level_up)| {
                Creature::new(
                    format!("guess-{i}"),
                    i as u32 + 1,
                    Edition::RedBlue,
                    level_up,
                    LearnSet::new(),
                    vec![],
                )
            })
            .collect()
    })
}

fn widths(state: &KnowledgeState) -> BTreeMap<String, u8> {
    state.ranges().map(|(m, r)| (m.to_string(), r.width())).collect()
}

proptest! {
    #[test]
    fn prop_ranges_only_narrow(target in target_strategy(), guesses in guesses_strategy()) {
        let mut state = KnowledgeState::new();
        for guess in &guesses {
            let before = widths(&state);
            state.absorb(guess, &target).unwrap();
            resolve_known(&mut state, &target);
            let after = widths(&state);
            for (name, width) in before {
                prop_assert!(after[&name] <= width, "{} widened", name);
            }
        }
    }

    #[test]
    fn prop_exact_levels_never_change(target in target_strategy(), guesses in guesses_strategy()) {
        let mut state = KnowledgeState::new();
        let mut pinned: BTreeMap<String, u8> = BTreeMap::new();
        for guess in &guesses {
            state.absorb(guess, &target).unwrap();
            resolve_known(&mut state, &target);
            for (name, level) in &pinned {
                let range = state.range(name).unwrap();
                prop_assert!(range.is_resolved());
                prop_assert_eq!(range.low, *level);
            }
            for (name, range) in state.ranges() {
                if range.is_resolved() {
                    pinned.insert(name.to_string(), range.low);
                }
            }
        }
    }

    #[test]
    fn prop_categorical_sets_only_grow(target in target_strategy(), guesses in guesses_strategy()) {
        let mut state = KnowledgeState::new();
        for guess in &guesses {
            let before = state.clone();
            state.absorb(guess, &target).unwrap();
            for category in MatchCategory::CATEGORICAL {
                let old = before.set(category).unwrap();
                let new = state.set(category).unwrap();
                prop_assert!(old.is_subset(new));
            }
        }
    }

    #[test]
    fn prop_ranges_contain_true_level(target in target_strategy(), guesses in guesses_strategy()) {
        let mut state = KnowledgeState::new();
        for guess in &guesses {
            state.absorb(guess, &target).unwrap();
            let known = resolve_known(&mut state, &target);
            for (name, range) in state.ranges() {
                let truth = target.level_up_entry(name).unwrap().level;
                prop_assert!(range.contains(truth), "{} at {} outside {}", name, truth, range);
                if known.contains(name) {
                    prop_assert_eq!(range.low, truth);
                }
            }
        }
    }

    #[test]
    fn prop_reabsorbing_is_idempotent(target in target_strategy(), guesses in guesses_strategy()) {
        let mut state = KnowledgeState::new();
        for guess in &guesses {
            state.absorb(guess, &target).unwrap();
        }
        let settled = state.clone();
        for guess in &guesses {
            state.absorb(guess, &target).unwrap();
        }
        prop_assert_eq!(state, settled);
    }
}
