//! Composite termination conditions.

use planforge_core::PlanningSolution;
use planforge_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when ANY child terminates.
///
/// Wraps either a tuple of terminations, resolved statically, or a
/// `Vec<Box<dyn Termination<S, D>>>` assembled at runtime from
/// configuration. An empty vector never terminates.
///
/// # Examples
///
/// ```ignore
/// // Terminate after 1000 steps OR 100 steps without improvement
/// let termination = OrTermination((
///     StepCountTermination::new(1000),
///     UnimprovedStepCountTermination::new(100),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<S, D, $($T),+> Termination<S, D> for OrTermination<($($T,)+)>
        where
            S: PlanningSolution,
            D: ScoreDirector<S>,
            $($T: Termination<S, D>,)+
        {
            fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
                $((self.0).$idx.is_terminated(solver_scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);

impl<S, D> Termination<S, D> for OrTermination<Vec<Box<dyn Termination<S, D>>>>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        self.0.iter().any(|t| t.is_terminated(solver_scope))
    }
}
