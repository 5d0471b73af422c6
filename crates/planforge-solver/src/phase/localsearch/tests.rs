//! Tests for the local search phase.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use planforge_core::{HardSoftScore, Score};
use planforge_scoring::{FullScoreDirector, IncrementalScoreDirector, ScoreDirector};

use super::*;
use crate::heuristic::selector::{ChangeMoveSelector, RandomMoveSelector};
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::termination::{OrTermination, StepCountTermination, UnimprovedStepCountTermination};
use crate::test_utils::{full_director, incremental_director, slot_solution, values, SlotSolution};

fn five_distinct() -> SlotSolution {
    slot_solution(&[Some(1), Some(2), Some(3), Some(4), Some(5)], vec![1, 2, 3, 4, 5])
}

fn started<D: ScoreDirector<SlotSolution>>(director: D) -> SolverScope<SlotSolution, D> {
    let mut scope = SolverScope::with_seed(director, 17);
    scope.start_solving();
    scope.update_best_solution();
    scope
}

#[test]
fn test_step_count_limit_bounds_the_loop() {
    let mut scope = started(full_director(five_distinct(), 2));
    let mut phase = LocalSearchPhase::new(
        RandomMoveSelector::new(),
        SimulatedAnnealingAcceptor::new(10.0, 0.9),
        StepCountTermination::new(10),
    );

    phase.solve(&mut scope).unwrap();

    assert_eq!(scope.step_count(), 10);
    assert_eq!(scope.stats().moves_evaluated, 10);
    assert!(scope.best_score().unwrap().is_feasible());
}

#[test]
fn test_hill_climbing_stops_when_selector_runs_dry() {
    let mut scope = started(full_director(
        slot_solution(&[Some(1), Some(1), Some(2)], vec![1, 2, 3]),
        5,
    ));
    let mut phase = LocalSearchPhase::new(
        ChangeMoveSelector::new(),
        HillClimbingAcceptor::new(),
        StepCountTermination::new(100),
    );

    phase.solve(&mut scope).unwrap();

    assert_eq!(scope.step_count(), 1);
    assert_eq!(values(scope.working_solution()), vec![Some(3), Some(1), Some(2)]);
    assert_eq!(scope.best_score(), Some(&HardSoftScore::ZERO));
}

#[test]
fn test_rejected_moves_are_undone() {
    // Every swap keeps the score, so hill climbing rejects all of them.
    let mut scope = started(incremental_director(five_distinct(), 2));
    let mut phase = LocalSearchPhase::new(
        RandomMoveSelector::new(),
        HillClimbingAcceptor::new(),
        StepCountTermination::new(25),
    )
    .with_score_assertions(true);

    phase.solve(&mut scope).unwrap();

    assert_eq!(scope.step_count(), 25);
    assert_eq!(scope.stats().moves_accepted, 0);
    assert_eq!(
        values(scope.working_solution()),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
    );
}

#[test]
fn test_incremental_scores_survive_assertions() {
    let mut scope = started(incremental_director(five_distinct(), 2));
    let mut phase = LocalSearchPhase::new(
        RandomMoveSelector::new(),
        TabuSearchAcceptor::<HardSoftScore>::new(2, 4, Vec::new()),
        OrTermination::new((
            StepCountTermination::new(40),
            UnimprovedStepCountTermination::new(40),
        )),
    )
    .with_score_assertions(true);

    phase.solve(&mut scope).unwrap();

    let director: &IncrementalScoreDirector<SlotSolution> = scope.score_director();
    assert_eq!(director.calculate_full_score(), scope.best_score().copied().unwrap());
    assert!(phase.acceptor().tabu_list().len() <= phase.acceptor().tabu_list().current_size());
}

#[test]
fn test_cancelled_phase_takes_no_steps() {
    let director = full_director(five_distinct(), 2);
    let mut scope: SolverScope<SlotSolution, FullScoreDirector<SlotSolution>> =
        SolverScope::with_seed(director, 17).with_terminate_flag(Arc::new(AtomicBool::new(true)));
    scope.start_solving();

    LocalSearchPhase::new(
        RandomMoveSelector::new(),
        HillClimbingAcceptor::new(),
        StepCountTermination::new(10),
    )
    .solve(&mut scope)
    .unwrap();

    assert_eq!(scope.step_count(), 0);
}

#[test]
fn test_phase_emits_events_to_test_writer() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let mut scope = started(full_director(five_distinct(), 2));
    LocalSearchPhase::new(
        RandomMoveSelector::new(),
        LateAcceptanceAcceptor::<HardSoftScore>::new(3),
        StepCountTermination::new(3),
    )
    .solve(&mut scope)
    .unwrap();

    assert_eq!(scope.step_count(), 3);
}
