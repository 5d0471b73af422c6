//! ChangeMove - assigns a value to a single planning variable.

use std::fmt::{self, Debug};

use planforge_core::{PlanningSolution, Result, ValueOf, VariableRef};
use planforge_scoring::ScoreDirector;

use super::{digest, Move};

/// A move that assigns a value to one variable.
///
/// `execute` remembers the previous value and `undo` writes it back, both
/// through the director's change hooks.
///
/// # Example
///
/// ```
/// use planforge_core::VariableRef;
/// use planforge_solver::heuristic::ChangeMove;
/// # use planforge_test::SlotSolution;
///
/// let mv = ChangeMove::<SlotSolution>::new(VariableRef::new(0, 0), Some(3));
/// assert_eq!(mv.to_value(), Some(&3));
/// ```
pub struct ChangeMove<S: PlanningSolution> {
    var: VariableRef,
    to_value: Option<ValueOf<S>>,
    previous: Option<Option<ValueOf<S>>>,
}

impl<S: PlanningSolution> ChangeMove<S> {
    pub fn new(var: VariableRef, to_value: Option<ValueOf<S>>) -> Self {
        Self {
            var,
            to_value,
            previous: None,
        }
    }

    pub fn var(&self) -> VariableRef {
        self.var
    }

    pub fn to_value(&self) -> Option<&ValueOf<S>> {
        self.to_value.as_ref()
    }
}

impl<S: PlanningSolution> Clone for ChangeMove<S> {
    fn clone(&self) -> Self {
        Self {
            var: self.var,
            to_value: self.to_value.clone(),
            previous: self.previous.clone(),
        }
    }
}

impl<S: PlanningSolution> Debug for ChangeMove<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeMove")
            .field("var", &self.var)
            .field("to_value", &self.to_value)
            .finish()
    }
}

impl<S: PlanningSolution> Move<S> for ChangeMove<S> {
    fn is_doable<D: ScoreDirector<S> + ?Sized>(&self, director: &D) -> bool {
        director.working_solution().variable(self.var).is_some()
            && director.variable_value(self.var) != self.to_value
    }

    fn execute<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        let old = director.change_variable(self.var, self.to_value.clone());
        self.previous = Some(old);
    }

    fn undo<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        if let Some(old) = self.previous.take() {
            director.change_variable(self.var, old);
        }
    }

    fn tabu_key(&self) -> Result<String> {
        Ok(digest(&("change", self.var, &self.to_value)))
    }
}
