//! Tests for the move system.

mod chain;
mod change;

use crate::test_utils::{incremental_director, slot_solution};
use planforge_scoring::IncrementalScoreDirector;
use planforge_test::SlotSolution;

/// Slots holding 1, 2 and 3 over domain 1..=4; values above 2 cost one soft.
fn three_slots() -> IncrementalScoreDirector<SlotSolution> {
    incremental_director(slot_solution(&[Some(1), Some(2), Some(3)], vec![1, 2, 3, 4]), 2)
}
