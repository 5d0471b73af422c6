use planforge_core::{HardSoftScore, PlanningSolution, VariableRef};
use planforge_scoring::ScoreDirector;

use super::three_slots;
use crate::heuristic::r#move::{evaluate_move, is_feasible_move, ChangeMove, Move};
use crate::test_utils::{full_director, slot_solution, values, var};

#[test]
fn test_change_move_execute_and_undo() {
    let mut director = three_slots();
    assert_eq!(director.calculate_score(), HardSoftScore::of(0, -1));

    let mut mv = ChangeMove::new(var(0), Some(2));
    mv.execute(&mut director);

    assert_eq!(values(director.working_solution()), vec![Some(2), Some(2), Some(3)]);
    assert_eq!(director.calculate_score(), HardSoftScore::of(-1, -1));

    mv.undo(&mut director);

    assert_eq!(values(director.working_solution()), vec![Some(1), Some(2), Some(3)]);
    assert_eq!(director.calculate_score(), HardSoftScore::of(0, -1));
}

#[test]
fn test_change_move_can_unassign() {
    let mut director = three_slots();
    director.calculate_score();

    let mut mv = ChangeMove::new(var(2), None);
    mv.execute(&mut director);

    assert_eq!(director.working_solution().uninitialized_count(), 1);
    assert_eq!(director.calculate_score(), HardSoftScore::ZERO);

    mv.undo(&mut director);
    assert_eq!(director.variable_value(var(2)), Some(3));
}

#[test]
fn test_change_move_to_current_value_is_not_doable() {
    let director = three_slots();

    assert!(!ChangeMove::new(var(1), Some(2)).is_doable(&director));
    assert!(ChangeMove::new(var(1), Some(4)).is_doable(&director));
    assert!(!ChangeMove::new(VariableRef::new(7, 0), Some(4)).is_doable(&director));
}

#[test]
fn test_undo_without_execute_is_noop() {
    let mut director = three_slots();
    let mut mv = ChangeMove::new(var(0), Some(4));

    mv.undo(&mut director);

    assert_eq!(director.variable_value(var(0)), Some(1));
}

#[test]
fn test_change_move_tabu_key_identifies_target() {
    let to_two = ChangeMove::<planforge_test::SlotSolution>::new(var(0), Some(2));
    let to_two_again = ChangeMove::<planforge_test::SlotSolution>::new(var(0), Some(2));
    let to_three = ChangeMove::<planforge_test::SlotSolution>::new(var(0), Some(3));

    let key = to_two.tabu_key().unwrap();
    assert_eq!(key, to_two_again.tabu_key().unwrap());
    assert_ne!(key, to_three.tabu_key().unwrap());
    assert_eq!(key.len(), 16);
}

#[test]
fn test_evaluate_move_leaves_solution_unchanged() {
    let mut director = three_slots();
    let before = director.calculate_score();

    let mut mv = ChangeMove::new(var(0), Some(3));
    let score = evaluate_move(&mut director, &mut mv);

    assert_eq!(score, HardSoftScore::of(-1, -2));
    assert_eq!(values(director.working_solution()), vec![Some(1), Some(2), Some(3)]);
    assert_eq!(director.calculate_score(), before);
    assert_eq!(director.calculate_full_score(), before);
}

#[test]
fn test_evaluate_move_keeps_working_score() {
    let mut incremental = three_slots();
    let before = incremental.calculate_score();

    evaluate_move(&mut incremental, &mut ChangeMove::new(var(0), Some(2)));

    assert_eq!(incremental.working_solution().score(), Some(before));

    let mut full = full_director(slot_solution(&[Some(1), None], vec![1, 2]), 2);
    evaluate_move(&mut full, &mut ChangeMove::new(var(1), Some(1)));

    assert_eq!(full.working_solution().score(), None);
    assert_eq!(full.calculation_count(), 1);
}

#[test]
fn test_is_feasible_move() {
    let mut director = three_slots();

    assert!(is_feasible_move(&mut director, &mut ChangeMove::new(var(0), Some(4))));
    assert!(!is_feasible_move(&mut director, &mut ChangeMove::new(var(0), Some(2))));
    // Not doable: already holds the value.
    assert!(!is_feasible_move(&mut director, &mut ChangeMove::new(var(0), Some(1))));
}
