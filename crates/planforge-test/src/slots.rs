//! Slots that must all take different values.
//!
//! Each [`Slot`] owns exactly one variable over a shared integer domain.

use std::sync::Arc;

use planforge_core::{
    BasicVariable, HardSoftScore, ListValueRange, PlanningEntity, PlanningSolution,
    PlanningVariable, ValueRange,
};

#[derive(Clone, Debug)]
pub struct Slot {
    pub id: usize,
    pub value: [BasicVariable<i64>; 1],
    pub pinned: bool,
}

impl Slot {
    pub fn new(id: usize, domain: Arc<dyn ValueRange<i64>>) -> Self {
        Self {
            id,
            value: [BasicVariable::with_shared_range("value", domain)],
            pinned: false,
        }
    }

    pub fn current(&self) -> Option<i64> {
        self.value[0].value().copied()
    }
}

impl PlanningEntity for Slot {
    type Variable = BasicVariable<i64>;

    fn variables(&self) -> &[Self::Variable] {
        &self.value
    }

    fn variables_mut(&mut self) -> &mut [Self::Variable] {
        &mut self.value
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }
}

#[derive(Clone, Debug)]
pub struct SlotSolution {
    pub slots: Vec<Slot>,
    pub score: Option<HardSoftScore>,
}

impl PlanningSolution for SlotSolution {
    type Score = HardSoftScore;
    type Entity = Slot;
    type ProblemFacts = ();

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }

    fn entities(&self) -> &[Slot] {
        &self.slots
    }

    fn entities_mut(&mut self) -> &mut Vec<Slot> {
        &mut self.slots
    }

    fn problem_facts(&self) -> &() {
        &()
    }

    fn set_problem_facts(&mut self, _facts: ()) {}
}

/// Creates `entity_count` unassigned slots over `domain`.
pub fn slot_problem(entity_count: usize, domain: Vec<i64>) -> SlotSolution {
    let range: Arc<dyn ValueRange<i64>> = Arc::new(ListValueRange::new(domain));
    SlotSolution {
        slots: (0..entity_count)
            .map(|id| Slot::new(id, Arc::clone(&range)))
            .collect(),
        score: None,
    }
}

/// Creates one slot per entry of `values`, assigned as given.
pub fn slot_solution(values: &[Option<i64>], domain: Vec<i64>) -> SlotSolution {
    let mut solution = slot_problem(values.len(), domain);
    for (slot, value) in solution.slots.iter_mut().zip(values) {
        slot.value[0].set_value(*value);
    }
    solution
}

/// Returns every slot's current value.
pub fn values(solution: &SlotSolution) -> Vec<Option<i64>> {
    solution.slots.iter().map(Slot::current).collect()
}

/// True when two assigned slots share a value.
pub fn has_duplicate_values(solution: &SlotSolution) -> bool {
    let assigned: Vec<i64> = solution.slots.iter().filter_map(Slot::current).collect();
    assigned
        .iter()
        .enumerate()
        .any(|(i, a)| assigned[i + 1..].contains(a))
}

/// True when slots `a` and `b` are both assigned the same value.
pub fn pair_conflicts(solution: &SlotSolution, a: usize, b: usize) -> bool {
    match (
        solution.slots.get(a).and_then(Slot::current),
        solution.slots.get(b).and_then(Slot::current),
    ) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// True when slot `index` holds a value above `limit`.
pub fn slot_exceeds(solution: &SlotSolution, index: usize, limit: i64) -> bool {
    solution
        .slots
        .get(index)
        .and_then(Slot::current)
        .is_some_and(|value| value > limit)
}
