//! Score director trait definition.

use planforge_core::{PlanningSolution, PlanningVariable, ValueOf, VariableRef};

/// The score director manages solution state and score calculation.
///
/// It is responsible for:
/// - Holding the single working solution
/// - Calculating scores (incrementally when possible)
/// - Receiving before/after notifications around every variable write
///
/// Every mutating method takes `&mut self`, so at most one caller can be
/// mid-change on a director at any time.
pub trait ScoreDirector<S: PlanningSolution>: Send {
    /// Returns a reference to the working solution.
    fn working_solution(&self) -> &S;

    /// Returns a mutable reference to the working solution.
    ///
    /// Writes through this reference bypass the change hooks, so the
    /// director discards any cached score.
    fn working_solution_mut(&mut self) -> &mut S;

    /// Binds a new working solution and returns the previous one.
    fn set_working_solution(&mut self, solution: S) -> S;

    /// Calculates the current score and stores it on the working solution.
    fn calculate_score(&mut self) -> S::Score;

    /// Stores `score` on the working solution, keeping any cached state.
    ///
    /// Used to put back the score observed before a move that was undone.
    fn restore_working_score(&mut self, score: Option<S::Score>);

    /// Recalculates every constraint from scratch without touching caches.
    fn calculate_full_score(&self) -> S::Score;

    /// Called before a planning variable is changed.
    fn before_variable_changed(&mut self, var: VariableRef);

    /// Called after a planning variable is changed.
    fn after_variable_changed(&mut self, var: VariableRef);

    /// Writes a variable without notification and returns the old value.
    ///
    /// Callers must bracket this with [`before_variable_changed`] and
    /// [`after_variable_changed`]; prefer [`change_variable`].
    ///
    /// [`before_variable_changed`]: ScoreDirector::before_variable_changed
    /// [`after_variable_changed`]: ScoreDirector::after_variable_changed
    /// [`change_variable`]: ScoreDirector::change_variable
    fn write_variable(&mut self, var: VariableRef, value: Option<ValueOf<S>>)
        -> Option<ValueOf<S>>;

    /// Returns the number of score calculations performed.
    fn calculation_count(&self) -> u64;

    /// Returns true if this score director supports incremental scoring.
    fn is_incremental(&self) -> bool {
        false
    }

    /// Discards cached score state.
    fn reset(&mut self) {}

    /// Clones the working solution.
    fn clone_working_solution(&self) -> S {
        self.working_solution().clone()
    }

    /// Reads a variable's current value.
    fn variable_value(&self, var: VariableRef) -> Option<ValueOf<S>> {
        self.working_solution().variable_value(var).cloned()
    }

    /// Sets a variable with a paired notification and returns the old value.
    fn change_variable(&mut self, var: VariableRef, value: Option<ValueOf<S>>) -> Option<ValueOf<S>> {
        self.before_variable_changed(var);
        let old = self.write_variable(var, value);
        self.after_variable_changed(var);
        old
    }

    /// Exchanges the values of two variables inside one notification window.
    fn swap_variables(&mut self, a: VariableRef, b: VariableRef) {
        self.before_variable_changed(a);
        self.before_variable_changed(b);
        let a_value = self.variable_value(a);
        let b_value = self.write_variable(b, a_value);
        self.write_variable(a, b_value);
        self.after_variable_changed(a);
        self.after_variable_changed(b);
    }
}

/// Shared raw write used by the director implementations.
pub(super) fn write_into<S: PlanningSolution>(
    solution: &mut S,
    var: VariableRef,
    value: Option<ValueOf<S>>,
) -> Option<ValueOf<S>> {
    solution
        .variable_mut(var)
        .and_then(|variable| variable.set_value(value))
}
