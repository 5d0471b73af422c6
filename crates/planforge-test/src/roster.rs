//! Shifts with a varying number of seats, staffed from an employee pool.
//!
//! Shifts own different numbers of variables, which makes the fixture
//! useful for ordering by variable count.

use std::sync::Arc;

use planforge_core::{
    BasicVariable, HardSoftScore, ListValueRange, PlanningEntity, PlanningSolution,
    PlanningVariable, ValueRange,
};

#[derive(Clone, Debug)]
pub struct Shift {
    pub name: String,
    pub seats: Vec<BasicVariable<i64>>,
    pub pinned: bool,
}

impl Shift {
    pub fn employees(&self) -> impl Iterator<Item = i64> + '_ {
        self.seats.iter().filter_map(|seat| seat.value().copied())
    }
}

impl PlanningEntity for Shift {
    type Variable = BasicVariable<i64>;

    fn variables(&self) -> &[Self::Variable] {
        &self.seats
    }

    fn variables_mut(&mut self) -> &mut [Self::Variable] {
        &mut self.seats
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }
}

/// Problem facts: who can work where.
#[derive(Clone, Debug, Default)]
pub struct Staff {
    pub employees: Vec<i64>,
    /// `(shift index, employee)` pairs that must not be staffed.
    pub unavailable: Vec<(usize, i64)>,
}

#[derive(Clone, Debug)]
pub struct Roster {
    pub shifts: Vec<Shift>,
    pub staff: Staff,
    pub score: Option<HardSoftScore>,
}

impl PlanningSolution for Roster {
    type Score = HardSoftScore;
    type Entity = Shift;
    type ProblemFacts = Staff;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }

    fn entities(&self) -> &[Shift] {
        &self.shifts
    }

    fn entities_mut(&mut self) -> &mut Vec<Shift> {
        &mut self.shifts
    }

    fn problem_facts(&self) -> &Staff {
        &self.staff
    }

    fn set_problem_facts(&mut self, facts: Staff) {
        self.staff = facts;
    }
}

/// Creates unassigned shifts, one per entry of `seat_counts`.
pub fn roster(seat_counts: &[usize], employees: Vec<i64>) -> Roster {
    let range: Arc<dyn ValueRange<i64>> = Arc::new(ListValueRange::new(employees.clone()));
    let shifts = seat_counts
        .iter()
        .enumerate()
        .map(|(index, &seats)| Shift {
            name: format!("shift-{}", index),
            seats: (0..seats)
                .map(|_| BasicVariable::with_shared_range("seat", Arc::clone(&range)))
                .collect(),
            pinned: false,
        })
        .collect();

    Roster {
        shifts,
        staff: Staff {
            employees,
            unavailable: Vec::new(),
        },
        score: None,
    }
}

/// True when an employee holds two seats of the same shift.
pub fn double_booked(roster: &Roster, shift: usize) -> bool {
    roster.shifts.get(shift).is_some_and(|shift| {
        let staffed: Vec<i64> = shift.employees().collect();
        staffed
            .iter()
            .enumerate()
            .any(|(i, employee)| staffed[i + 1..].contains(employee))
    })
}

/// True when `shift` is staffed with an employee marked unavailable for it.
pub fn staffed_while_unavailable(roster: &Roster, shift: usize) -> bool {
    roster.shifts.get(shift).is_some_and(|s| {
        s.employees()
            .any(|employee| roster.staff.unavailable.contains(&(shift, employee)))
    })
}

/// Number of seats `employee` holds across all shifts.
pub fn seats_held(roster: &Roster, employee: i64) -> usize {
    roster
        .shifts
        .iter()
        .flat_map(|shift| shift.employees())
        .filter(|&e| e == employee)
        .count()
}
