//! Core domain traits

use crate::score::Score;

use super::variable::{PlanningVariable, VariableRef};

/// Marker trait for planning entities.
///
/// A planning entity owns one or more planning variables that the solver
/// assigns. Entities are owned by the solution; the engine only addresses
/// them by index.
///
/// # Example
///
/// ```
/// use planforge_core::{BasicVariable, IntRange, PlanningEntity};
///
/// #[derive(Clone, Debug)]
/// struct Queen {
///     row: [BasicVariable<i64>; 1],
/// }
///
/// impl PlanningEntity for Queen {
///     type Variable = BasicVariable<i64>;
///
///     fn variables(&self) -> &[Self::Variable] { &self.row }
///     fn variables_mut(&mut self) -> &mut [Self::Variable] { &mut self.row }
/// }
///
/// let queen = Queen { row: [BasicVariable::new("row", IntRange::new(0, 8))] };
/// assert!(!queen.is_pinned());
/// assert_eq!(queen.variables().len(), 1);
/// ```
pub trait PlanningEntity: Clone + Send + Sync + 'static {
    /// The variable type held by this entity.
    type Variable: PlanningVariable;

    /// Returns the entity's variables in a stable order.
    fn variables(&self) -> &[Self::Variable];

    /// Returns the entity's variables for mutation.
    fn variables_mut(&mut self) -> &mut [Self::Variable];

    /// Returns true if the solver must leave this entity unchanged.
    fn is_pinned(&self) -> bool {
        false
    }
}

/// Variable type of a solution's entities.
pub type VariableOf<S> = <<S as PlanningSolution>::Entity as PlanningEntity>::Variable;

/// Value type of a solution's variables.
pub type ValueOf<S> = <VariableOf<S> as PlanningVariable>::Value;

/// Marker trait for planning solutions.
///
/// A planning solution represents both the problem definition and the
/// (potentially partial) solution. It contains:
/// - Planning entities (the things being optimized)
/// - Problem facts (immutable data read by constraints)
/// - The current score
///
/// # Example
///
/// ```
/// use planforge_core::{BasicVariable, HardSoftScore, IntRange, PlanningEntity, PlanningSolution};
///
/// #[derive(Clone, Debug)]
/// struct Task {
///     worker: [BasicVariable<i64>; 1],
/// }
///
/// impl PlanningEntity for Task {
///     type Variable = BasicVariable<i64>;
///     fn variables(&self) -> &[Self::Variable] { &self.worker }
///     fn variables_mut(&mut self) -> &mut [Self::Variable] { &mut self.worker }
/// }
///
/// #[derive(Clone, Debug)]
/// struct Plan {
///     tasks: Vec<Task>,
///     capacity: i64,
///     score: Option<HardSoftScore>,
/// }
///
/// impl PlanningSolution for Plan {
///     type Score = HardSoftScore;
///     type Entity = Task;
///     type ProblemFacts = i64;
///
///     fn score(&self) -> Option<Self::Score> { self.score }
///     fn set_score(&mut self, score: Option<Self::Score>) { self.score = score; }
///     fn entities(&self) -> &[Task] { &self.tasks }
///     fn entities_mut(&mut self) -> &mut Vec<Task> { &mut self.tasks }
///     fn problem_facts(&self) -> &i64 { &self.capacity }
///     fn set_problem_facts(&mut self, facts: i64) { self.capacity = facts; }
/// }
///
/// let plan = Plan {
///     tasks: vec![Task { worker: [BasicVariable::new("worker", IntRange::new(0, 2))] }],
///     capacity: 3,
///     score: None,
/// };
/// assert_eq!(plan.uninitialized_count(), 1);
/// assert!(!plan.is_initialized());
/// ```
pub trait PlanningSolution: Clone + Send + Sync + 'static {
    /// The score type used to evaluate this solution.
    type Score: Score;

    /// The planning entity type.
    type Entity: PlanningEntity;

    /// Immutable data the constraints read alongside the entities.
    type ProblemFacts: Send + Sync;

    /// Returns the current score, or None if not yet calculated.
    fn score(&self) -> Option<Self::Score>;

    /// Sets the current score.
    fn set_score(&mut self, score: Option<Self::Score>);

    /// Returns the planning entities in a stable order.
    fn entities(&self) -> &[Self::Entity];

    /// Returns the planning entities for mutation.
    fn entities_mut(&mut self) -> &mut Vec<Self::Entity>;

    /// Returns the problem facts.
    fn problem_facts(&self) -> &Self::ProblemFacts;

    /// Replaces the problem facts.
    fn set_problem_facts(&mut self, facts: Self::ProblemFacts);

    /// Replaces every planning entity.
    fn set_entities(&mut self, entities: Vec<Self::Entity>) {
        *self.entities_mut() = entities;
    }

    /// Returns the number of entities.
    fn entity_count(&self) -> usize {
        self.entities().len()
    }

    /// Looks up a variable by address.
    fn variable(&self, var: VariableRef) -> Option<&VariableOf<Self>> {
        self.entities()
            .get(var.entity)
            .and_then(|entity| entity.variables().get(var.variable))
    }

    /// Looks up a variable by address for mutation.
    fn variable_mut(&mut self, var: VariableRef) -> Option<&mut VariableOf<Self>> {
        self.entities_mut()
            .get_mut(var.entity)
            .and_then(|entity| entity.variables_mut().get_mut(var.variable))
    }

    /// Returns the value of a variable, `None` if unassigned or absent.
    fn variable_value(&self, var: VariableRef) -> Option<&ValueOf<Self>> {
        self.variable(var).and_then(|variable| variable.value())
    }

    /// Returns the address of every variable, entity by entity.
    fn variable_refs(&self) -> Vec<VariableRef> {
        self.entities()
            .iter()
            .enumerate()
            .flat_map(|(entity, e)| {
                (0..e.variables().len()).map(move |variable| VariableRef::new(entity, variable))
            })
            .collect()
    }

    /// Returns the number of variables with no value assigned.
    fn uninitialized_count(&self) -> usize {
        self.entities()
            .iter()
            .flat_map(|entity| entity.variables())
            .filter(|variable| !variable.is_initialized())
            .count()
    }

    /// Returns true if all planning variables are assigned.
    fn is_initialized(&self) -> bool {
        self.uninitialized_count() == 0
    }
}
