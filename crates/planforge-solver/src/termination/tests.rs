//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use planforge_core::HardSoftScore;
use planforge_scoring::{FullScoreDirector, ScoreDirector};

use super::*;
use crate::scope::SolverScope;
use crate::test_utils::{full_director, slot_solution, var, SlotSolution};

type Scope = SolverScope<SlotSolution, FullScoreDirector<SlotSolution>>;
type BoxedTermination = Box<dyn Termination<SlotSolution, FullScoreDirector<SlotSolution>>>;

fn scope() -> Scope {
    // [1, 1] conflicts; changing slot 1 to 2 clears the conflict.
    let director = full_director(slot_solution(&[Some(1), Some(1)], vec![1, 2]), 5);
    let mut scope = SolverScope::with_seed(director, 42);
    scope.start_solving();
    scope
}

fn terminated<T: Termination<SlotSolution, FullScoreDirector<SlotSolution>>>(
    term: &T,
    scope: &Scope,
) -> bool {
    term.is_terminated(scope)
}

#[test]
fn test_step_count_termination() {
    let mut scope = scope();
    let term = StepCountTermination::new(3);

    assert!(!terminated(&term, &scope));
    scope.increment_step_count();
    scope.increment_step_count();
    assert!(!terminated(&term, &scope));
    scope.increment_step_count();
    assert!(terminated(&term, &scope));
}

#[test]
fn test_unimproved_step_count_termination() {
    let mut scope = scope();
    let term = UnimprovedStepCountTermination::new(2);
    scope.update_best_solution();

    scope.increment_step_count();
    assert!(!terminated(&term, &scope));

    scope.score_director_mut().change_variable(var(1), Some(2));
    assert!(scope.update_best_solution());
    assert_eq!(scope.last_improvement_step(), 1);

    scope.increment_step_count();
    assert!(!terminated(&term, &scope));
    scope.increment_step_count();
    assert!(terminated(&term, &scope));
}

#[test]
fn test_best_score_termination() {
    let mut scope = scope();
    let term = BestScoreTermination::new(HardSoftScore::ZERO);

    assert!(!terminated(&term, &scope));

    scope.update_best_solution();
    assert_eq!(scope.best_score(), Some(&HardSoftScore::of_hard(-1)));
    assert!(!terminated(&term, &scope));

    scope.score_director_mut().change_variable(var(1), Some(2));
    scope.update_best_solution();
    assert!(terminated(&term, &scope));
    assert!(!terminated(&BestScoreTermination::new(HardSoftScore::ONE_SOFT), &scope));
}

#[test]
fn test_external_termination() {
    let scope = scope();
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));

    assert!(!terminated(&term, &scope));
    flag.store(true, Ordering::SeqCst);
    assert!(terminated(&term, &scope));
}

#[test]
fn test_or_termination_tuple() {
    let mut scope = scope();
    let term = OrTermination::new((StepCountTermination::new(5), StepCountTermination::new(1)));

    assert!(!terminated(&term, &scope));
    scope.increment_step_count();
    assert!(terminated(&term, &scope));
}

#[test]
fn test_or_termination_vec() {
    let mut scope = scope();
    let empty: OrTermination<Vec<BoxedTermination>> = OrTermination::new(Vec::new());
    let term: OrTermination<Vec<BoxedTermination>> = OrTermination::new(vec![
        Box::new(StepCountTermination::new(2)),
        Box::new(BestScoreTermination::new(HardSoftScore::ZERO)),
    ]);

    assert!(!terminated(&empty, &scope));
    assert!(!terminated(&term, &scope));
    scope.increment_step_count();
    scope.increment_step_count();
    assert!(terminated(&term, &scope));
    assert!(!terminated(&empty, &scope));
}
