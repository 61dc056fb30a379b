//! Deduction engine integration tests
//!
//! Classifier, accumulator and resolver exercised together on small
//! hand-built creatures.

use moveguess::catalog::{Creature, Edition, LearnSet, METHOD_EGG, METHOD_MACHINE};
use moveguess::core::types::LearnItem;
use moveguess::deduce::{classify, resolve_known, KnowledgeState, MatchCategory, RangeHint};

fn creature(name: &str, level_up: Vec<LearnItem>, learnset: LearnSet) -> Creature {
    Creature::new(name, 0, Edition::RedBlue, level_up, learnset, vec![])
}

fn tackle_growl_target() -> Creature {
    creature(
        "target",
        vec![LearnItem::new(5, "tackle"), LearnItem::new(10, "growl")],
        LearnSet::new()
            .with(METHOD_MACHINE, vec![LearnItem::new(0, "ember")])
            .with(METHOD_EGG, vec![LearnItem::new(0, "bite")]),
    )
}

#[test]
fn test_classifier_examples() {
    let target = tackle_growl_target();

    assert_eq!(classify(&LearnItem::new(5, "tackle"), &target), MatchCategory::Exact);
    assert_eq!(
        classify(&LearnItem::new(3, "tackle"), &target),
        MatchCategory::TargetHigher
    );
    assert_eq!(
        classify(&LearnItem::new(10, "tackle"), &target),
        MatchCategory::TargetLower
    );
    assert_eq!(classify(&LearnItem::new(1, "ember"), &target), MatchCategory::ByMachine);
    assert_eq!(classify(&LearnItem::new(1, "hyper-beam"), &target), MatchCategory::NoMatch);
}

#[test]
fn test_resolver_single_candidate() {
    let mut state = KnowledgeState::from_ranges([("X", RangeHint::new(3, 7))]);
    let target = creature(
        "target",
        vec![LearnItem::new(1, "A"), LearnItem::new(5, "X"), LearnItem::new(12, "B")],
        LearnSet::new(),
    );

    let known = resolve_known(&mut state, &target);

    assert!(known.contains("X"));
    assert_eq!(state.range("X"), Some(RangeHint::exact(5)));
}

#[test]
fn test_resolver_two_candidates() {
    let mut state = KnowledgeState::from_ranges([("X", RangeHint::new(3, 7))]);
    let target = creature(
        "target",
        vec![LearnItem::new(5, "X"), LearnItem::new(6, "Y")],
        LearnSet::new(),
    );

    let known = resolve_known(&mut state, &target);

    assert!(!known.contains("X"));
    assert_eq!(state.range("X"), Some(RangeHint::new(3, 7)));
}

#[test]
fn test_egg_moves_deduplicated_across_guesses() {
    let target = tackle_growl_target();
    let first = creature("first", vec![LearnItem::new(4, "bite")], LearnSet::new());
    let second = creature("second", vec![LearnItem::new(22, "bite")], LearnSet::new());

    let mut state = KnowledgeState::new();
    state.absorb(&first, &target).unwrap();
    state.absorb(&second, &target).unwrap();

    let egg = state.set(MatchCategory::ByEgg).unwrap();
    assert_eq!(egg.iter().collect::<Vec<_>>(), vec!["bite"]);
}

/// Target learns tackle at 5. A guess at 3 gives a lower bound, a guess at 8
/// an upper bound, and the only target entry left in [3, 8] pins it to 5.
#[test]
fn test_end_to_end_tackle_scenario() {
    let target = tackle_growl_target();
    let guess_a = creature("a", vec![LearnItem::new(3, "tackle")], LearnSet::new());
    let guess_b = creature("b", vec![LearnItem::new(8, "tackle")], LearnSet::new());
    let mut state = KnowledgeState::new();

    state.absorb(&guess_a, &target).unwrap();
    assert_eq!(state.range("tackle"), Some(RangeHint::new(3, 255)));
    let known = resolve_known(&mut state, &target);
    assert!(!known.contains("tackle"));

    let summary = state.absorb(&guess_b, &target).unwrap();
    assert_eq!(
        summary.classifications,
        vec![(LearnItem::new(8, "tackle"), MatchCategory::TargetLower)]
    );
    assert_eq!(state.range("tackle"), Some(RangeHint::new(3, 8)));

    let known = resolve_known(&mut state, &target);
    assert!(known.contains("tackle"));
    assert_eq!(state.range("tackle"), Some(RangeHint::exact(5)));
}

#[test]
fn test_later_bound_disambiguates_earlier_range() {
    let target = creature(
        "target",
        vec![
            LearnItem::new(4, "peck"),
            LearnItem::new(9, "fury-attack"),
            LearnItem::new(20, "drill-peck"),
        ],
        LearnSet::new(),
    );
    let mut state = KnowledgeState::new();

    // peck: [2, 255] holds every entry
    let a = creature("a", vec![LearnItem::new(2, "peck")], LearnSet::new());
    state.absorb(&a, &target).unwrap();
    assert!(resolve_known(&mut state, &target).is_empty());

    // upper bound 10 still leaves 4 and 9
    let b = creature("b", vec![LearnItem::new(10, "peck")], LearnSet::new());
    state.absorb(&b, &target).unwrap();
    assert!(resolve_known(&mut state, &target).is_empty());

    // upper bound 8 leaves only level 4
    let c = creature("c", vec![LearnItem::new(8, "peck")], LearnSet::new());
    state.absorb(&c, &target).unwrap();
    let known = resolve_known(&mut state, &target);
    assert!(known.contains("peck"));
    assert_eq!(state.range("peck"), Some(RangeHint::exact(4)));
}

#[test]
fn test_exact_knowledge_survives_later_guesses() {
    let target = tackle_growl_target();
    let mut state = KnowledgeState::new();

    let exact = creature("exact", vec![LearnItem::new(10, "growl")], LearnSet::new());
    state.absorb(&exact, &target).unwrap();

    let weaker = creature(
        "weaker",
        vec![LearnItem::new(1, "growl"), LearnItem::new(30, "tackle")],
        LearnSet::new(),
    );
    state.absorb(&weaker, &target).unwrap();
    let tighter = creature("tighter", vec![LearnItem::new(40, "growl")], LearnSet::new());
    state.absorb(&tighter, &target).unwrap();

    assert_eq!(state.range("growl"), Some(RangeHint::exact(10)));
}
