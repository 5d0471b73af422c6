//! Tests for move selectors.

use std::sync::Arc;

use planforge_config::MoveSelectorType;
use planforge_core::{HardSoftScore, Score};
use planforge_scoring::{Constraint, ConstraintSet, FullScoreDirector, ScoreDirector};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::heuristic::r#move::{Move, SwapMove};
use crate::test_utils::{full_director, slot_solution, values, var, SlotSolution};

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn swap_of(mv: &AnyMove<SlotSolution>) -> SwapMove {
    match mv {
        AnyMove::Swap(swap) => *swap,
        other => panic!("expected a swap, got {:?}", other),
    }
}

#[test]
fn test_first_fit_returns_first_feasible_swap() {
    let mut director = full_director(slot_solution(&[Some(1), Some(2), Some(3)], vec![1, 2, 3]), 1);
    let before = director.calculate_score();

    let mv = FirstFitMoveSelector::new()
        .select_move(&mut director, &mut rng())
        .unwrap();

    assert_eq!(swap_of(&mv), SwapMove::new(var(0), var(1)));
    assert_eq!(values(director.working_solution()), vec![Some(1), Some(2), Some(3)]);
    assert_eq!(director.calculate_score(), before);
}

#[test]
fn test_selectors_need_two_entities() {
    let mut director = full_director(slot_solution(&[Some(1)], vec![1, 2]), 5);

    assert!(MoveSelector::<SlotSolution>::select_move(
        &mut FirstFitMoveSelector::new(),
        &mut director,
        &mut rng()
    )
    .is_none());
    assert!(MoveSelector::<SlotSolution>::select_move(
        &mut BestFitMoveSelector::new(),
        &mut director,
        &mut rng()
    )
    .is_none());
    assert!(MoveSelector::<SlotSolution>::select_move(
        &mut RandomMoveSelector::new(),
        &mut director,
        &mut rng()
    )
    .is_none());
}

#[test]
fn test_first_fit_none_when_no_swap_is_feasible() {
    // Every permutation of {1, 1, 2} keeps a duplicate.
    let mut director = full_director(slot_solution(&[Some(1), Some(1), Some(2)], vec![1, 2]), 5);

    let mv = MoveSelector::<SlotSolution>::select_move(
        &mut FirstFitMoveSelector::new(),
        &mut director,
        &mut rng(),
    );

    assert!(mv.is_none());
}

fn preference_director() -> FullScoreDirector<SlotSolution> {
    let constraints = ConstraintSet::new()
        .with(Constraint::hard("Distinct", -1, crate::test_utils::has_duplicate_values))
        .with(Constraint::soft("First wants 3", -5, |s: &SlotSolution| {
            s.slots[0].current() != Some(3)
        }))
        .with(Constraint::soft("Second wants 3", -1, |s: &SlotSolution| {
            s.slots[1].current() != Some(3)
        }));
    FullScoreDirector::new(
        slot_solution(&[Some(1), Some(2), Some(3)], vec![1, 2, 3]),
        Arc::new(constraints),
    )
}

#[test]
fn test_best_fit_picks_strictly_best_swap() {
    let mut director = preference_director();
    assert_eq!(director.calculate_score(), HardSoftScore::of_soft(-6));

    let mv = BestFitMoveSelector::new()
        .select_move(&mut director, &mut rng())
        .unwrap();

    assert_eq!(swap_of(&mv), SwapMove::new(var(0), var(2)));
    assert_eq!(values(director.working_solution()), vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn test_best_fit_ties_keep_first() {
    let mut director = full_director(slot_solution(&[Some(1), Some(2), Some(3)], vec![1, 2, 3]), 5);

    let mv = BestFitMoveSelector::new()
        .select_move(&mut director, &mut rng())
        .unwrap();

    assert_eq!(swap_of(&mv), SwapMove::new(var(0), var(1)));
}

#[test]
fn test_random_selector_returns_feasible_swap() {
    let mut director = full_director(
        slot_solution(&[Some(1), Some(2), Some(3), Some(4), Some(5)], vec![1, 2, 3, 4, 5]),
        9,
    );
    let mut rng = rng();

    for _ in 0..20 {
        let mut mv: AnyMove<SlotSolution> = RandomMoveSelector::new()
            .select_move(&mut director, &mut rng)
            .unwrap();
        let swap = swap_of(&mv);
        assert_ne!(swap.left().entity, swap.right().entity);

        mv.execute(&mut director);
        assert!(director.calculate_score().is_feasible());
        mv.undo(&mut director);
    }
    assert_eq!(
        values(director.working_solution()),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
    );
}

#[test]
fn test_random_selector_skips_pinned_entities() {
    let mut solution = slot_solution(&[Some(1), Some(2), Some(3)], vec![1, 2, 3]);
    solution.slots[0].pinned = true;
    solution.slots[1].pinned = true;
    let mut director = full_director(solution, 9);

    let mv = MoveSelector::<SlotSolution>::select_move(
        &mut RandomMoveSelector::new(),
        &mut director,
        &mut rng(),
    );

    assert!(mv.is_none());
}

#[test]
fn test_chained_selector_builds_one_or_two_step_chains() {
    let mut director = full_director(
        slot_solution(&[Some(1), Some(2), Some(3), Some(4), Some(5)], vec![1, 2, 3, 4, 5]),
        9,
    );
    let before = director.calculate_score();
    let mut rng = rng();
    let mut lengths = Vec::new();

    for _ in 0..32 {
        let mut mv: AnyMove<SlotSolution> = ChainedMoveSelector::new()
            .select_move(&mut director, &mut rng)
            .unwrap();
        match &mv {
            AnyMove::Chain(chain) => lengths.push(chain.len()),
            other => panic!("expected a chain, got {:?}", other),
        }
        mv.execute(&mut director);
        mv.undo(&mut director);
        assert_eq!(director.calculate_score(), before);
    }

    assert!(lengths.contains(&1));
    assert!(lengths.contains(&2));
    assert!(lengths.iter().all(|len| *len == 1 || *len == 2));
}

#[test]
fn test_change_selector_returns_first_feasible_change() {
    let mut director = full_director(slot_solution(&[Some(1), Some(1), Some(2)], vec![1, 2, 3]), 5);

    let mv = ChangeMoveSelector::new()
        .select_move(&mut director, &mut rng())
        .unwrap();

    match mv {
        AnyMove::Change(change) => {
            assert_eq!(change.var(), var(0));
            assert_eq!(change.to_value(), Some(&3));
        }
        other => panic!("expected a change, got {:?}", other),
    }
    assert_eq!(values(director.working_solution()), vec![Some(1), Some(1), Some(2)]);
}

#[test]
fn test_change_selector_skips_pinned_entities() {
    let mut solution = slot_solution(&[Some(1), Some(1), Some(2)], vec![1, 2, 3]);
    solution.slots[0].pinned = true;
    let mut director = full_director(solution, 5);

    let mv = ChangeMoveSelector::new()
        .select_move(&mut director, &mut rng())
        .unwrap();

    match mv {
        AnyMove::Change(change) => {
            assert_eq!(change.var(), var(1));
            assert_eq!(change.to_value(), Some(&3));
        }
        other => panic!("expected a change, got {:?}", other),
    }
}

#[test]
fn test_change_selector_skips_current_value() {
    let mut director = full_director(slot_solution(&[Some(1), Some(2)], vec![1]), 5);

    let mv = MoveSelector::<SlotSolution>::select_move(
        &mut ChangeMoveSelector::new(),
        &mut director,
        &mut rng(),
    );

    assert!(mv.is_none());
}

#[test]
fn test_any_selector_from_type() {
    let selector = AnyMoveSelector::from_type(MoveSelectorType::Chained);
    assert_eq!(selector, AnyMoveSelector::Chained(ChainedMoveSelector::new()));
    assert_eq!(selector.name(), "Chained");

    let mut director = full_director(slot_solution(&[Some(1), Some(1), Some(2)], vec![1, 2, 3]), 5);
    let mut change = AnyMoveSelector::from_type(MoveSelectorType::Change);
    let mv = MoveSelector::<SlotSolution>::select_move(&mut change, &mut director, &mut rng());
    assert!(matches!(mv, Some(AnyMove::Change(_))));
}
