use planforge_core::{HardSoftScore, PlanForgeError};
use planforge_scoring::ScoreDirector;
use planforge_test::SlotSolution;

use super::three_slots;
use crate::heuristic::r#move::{AnyMove, ChainMove, ChangeMove, EitherMove, Move, SwapMove};
use crate::test_utils::{values, var};

#[test]
fn test_chain_undo_runs_in_reverse() {
    let mut director = three_slots();
    let before = director.calculate_score();

    // The two steps do not commute, so only reverse undo restores the state.
    let mut chain = ChainMove::new([
        EitherMove::Change(ChangeMove::<SlotSolution>::new(var(0), Some(4))),
        EitherMove::Swap(SwapMove::new(var(0), var(1))),
    ]);
    chain.execute(&mut director);

    assert_eq!(values(director.working_solution()), vec![Some(2), Some(4), Some(3)]);
    assert_eq!(director.calculate_score(), HardSoftScore::of(0, -2));

    chain.undo(&mut director);

    assert_eq!(values(director.working_solution()), vec![Some(1), Some(2), Some(3)]);
    assert_eq!(director.calculate_score(), before);
    assert_eq!(director.calculate_full_score(), before);
}

#[test]
fn test_empty_chain_has_no_tabu_key() {
    let chain = ChainMove::<EitherMove<SlotSolution>>::new([]);
    let director = three_slots();

    assert!(chain.is_empty());
    assert!(!chain.is_doable(&director));
    assert!(matches!(chain.tabu_key(), Err(PlanForgeError::TabuHash(_))));
}

#[test]
fn test_chain_tabu_key_depends_on_order() {
    let a = EitherMove::Swap(SwapMove::new(var(0), var(1)));
    let b = EitherMove::Swap(SwapMove::new(var(1), var(2)));

    let ab = ChainMove::<EitherMove<SlotSolution>>::new([a.clone(), b.clone()]);
    let ba = ChainMove::<EitherMove<SlotSolution>>::new([b, a]);

    assert_ne!(ab.tabu_key().unwrap(), ba.tabu_key().unwrap());
    assert_eq!(ab.len(), 2);
}

#[test]
fn test_any_move_dispatches() {
    let mut director = three_slots();
    director.calculate_score();

    let mut mv: AnyMove<SlotSolution> = SwapMove::new(var(1), var(2)).into();
    assert!(mv.is_doable(&director));

    mv.execute(&mut director);
    assert_eq!(values(director.working_solution()), vec![Some(1), Some(3), Some(2)]);

    mv.undo(&mut director);
    assert_eq!(values(director.working_solution()), vec![Some(1), Some(2), Some(3)]);
}
