//! Test utilities for planforge-solver
//!
//! Wraps the pure predicates from planforge-test into constraint sets and
//! score directors shared by the crate's test modules.

use std::sync::Arc;

use planforge_core::VariableRef;
use planforge_scoring::{Constraint, ConstraintSet, FullScoreDirector, IncrementalScoreDirector};

pub use planforge_test::roster::{double_booked, roster, seats_held, staffed_while_unavailable};
pub use planforge_test::slots::{
    has_duplicate_values, pair_conflicts, slot_exceeds, slot_problem, slot_solution, values,
};
pub use planforge_test::{Roster, SlotSolution};

/// One hard constraint per slot pair that shares a value, plus a soft
/// penalty for every slot holding a value above `soft_limit`.
pub fn distinct_slots(entity_count: usize, soft_limit: i64) -> Arc<ConstraintSet<SlotSolution>> {
    let mut constraints = ConstraintSet::new();
    for a in 0..entity_count {
        for b in (a + 1)..entity_count {
            constraints.add(
                Constraint::hard(format!("Conflict {}-{}", a, b), -1, move |s: &SlotSolution| {
                    pair_conflicts(s, a, b)
                })
                .watching(move |var: VariableRef| var.entity == a || var.entity == b),
            );
        }
        constraints.add(
            Constraint::soft(format!("Above {} #{}", soft_limit, a), -1, move |s: &SlotSolution| {
                slot_exceeds(s, a, soft_limit)
            })
            .watching(move |var: VariableRef| var.entity == a),
        );
    }
    Arc::new(constraints)
}

/// Double booking and unavailability per shift, one soft penalty per
/// extra seat an employee holds beyond the first.
pub fn roster_constraints(shift_count: usize, employee_count: i64) -> Arc<ConstraintSet<Roster>> {
    let mut constraints = ConstraintSet::new();
    for shift in 0..shift_count {
        constraints.add(
            Constraint::hard(format!("Double booked {}", shift), -1, move |r: &Roster| {
                double_booked(r, shift)
            })
            .watching(move |var: VariableRef| var.entity == shift),
        );
        constraints.add(Constraint::hard(
            format!("Unavailable {}", shift),
            -1,
            move |r: &Roster| staffed_while_unavailable(r, shift),
        ));
    }
    for employee in 0..employee_count {
        constraints.add(Constraint::soft(
            format!("Fair share {}", employee),
            -1,
            move |r: &Roster| seats_held(r, employee) > 1,
        ));
    }
    Arc::new(constraints)
}

pub fn full_director(
    solution: SlotSolution,
    soft_limit: i64,
) -> FullScoreDirector<SlotSolution> {
    let constraints = distinct_slots(solution.slots.len(), soft_limit);
    FullScoreDirector::new(solution, constraints)
}

pub fn incremental_director(
    solution: SlotSolution,
    soft_limit: i64,
) -> IncrementalScoreDirector<SlotSolution> {
    let constraints = distinct_slots(solution.slots.len(), soft_limit);
    IncrementalScoreDirector::new(solution, constraints)
}

pub fn var(entity: usize) -> VariableRef {
    VariableRef::new(entity, 0)
}
