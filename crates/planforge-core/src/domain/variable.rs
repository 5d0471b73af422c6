//! Planning variables and their addresses.

use std::fmt::{self, Debug};
use std::hash::Hash;
use std::sync::Arc;

use super::value_range::ValueRange;

/// Bounds required of a value assigned to a planning variable.
///
/// Values are hashed when a move is reduced to a tabu key.
pub trait PlanningValue: Clone + PartialEq + Debug + Hash + Send + Sync + 'static {}

impl<T> PlanningValue for T where T: Clone + PartialEq + Debug + Hash + Send + Sync + 'static {}

/// A mutable slot with a value and a legal domain.
///
/// Mutating a variable outside a score director bypasses the director's
/// change hooks. Moves always go through the director.
pub trait PlanningVariable: Clone + Debug + Send + Sync + 'static {
    /// The type of value this variable holds.
    type Value: PlanningValue;

    /// Name used in logs and explanations.
    fn name(&self) -> &str;

    /// Returns the current value, `None` when unassigned.
    fn value(&self) -> Option<&Self::Value>;

    /// Replaces the current value and returns the previous one.
    fn set_value(&mut self, value: Option<Self::Value>) -> Option<Self::Value>;

    /// Returns the domain of legal values.
    fn value_range(&self) -> &dyn ValueRange<Self::Value>;

    /// Returns true if a value is assigned.
    fn is_initialized(&self) -> bool {
        self.value().is_some()
    }
}

/// Address of one variable inside a solution.
///
/// The entity index is the entity's identity for the duration of a solve,
/// which makes `VariableRef` its own variable-to-entity lookup.
///
/// # Example
///
/// ```
/// use planforge_core::VariableRef;
///
/// let var = VariableRef::new(2, 0);
/// assert_eq!(var.entity, 2);
/// assert_eq!(var.to_string(), "entity[2].variable[0]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableRef {
    /// Index of the owning entity.
    pub entity: usize,
    /// Index of the variable within its entity.
    pub variable: usize,
}

impl VariableRef {
    pub const fn new(entity: usize, variable: usize) -> Self {
        Self { entity, variable }
    }
}

impl fmt::Display for VariableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity[{}].variable[{}]", self.entity, self.variable)
    }
}

/// General-purpose planning variable backed by a shared value range.
///
/// Cloning is cheap: the name and the range are reference counted, so
/// cloning a whole solution for best-solution tracking copies only values.
///
/// # Example
///
/// ```
/// use planforge_core::{BasicVariable, IntRange, PlanningVariable};
///
/// let mut var = BasicVariable::new("slot", IntRange::new(0, 3));
/// assert_eq!(var.value(), None);
///
/// let old = var.set_value(Some(2));
/// assert_eq!(old, None);
/// assert_eq!(var.value(), Some(&2));
/// ```
#[derive(Clone)]
pub struct BasicVariable<V> {
    name: Arc<str>,
    value: Option<V>,
    value_range: Arc<dyn ValueRange<V>>,
}

impl<V: PlanningValue> BasicVariable<V> {
    /// Creates an unassigned variable over the given range.
    pub fn new(name: &str, value_range: impl ValueRange<V> + 'static) -> Self {
        Self::with_shared_range(name, Arc::new(value_range))
    }

    /// Creates an unassigned variable sharing a range with other variables.
    pub fn with_shared_range(name: &str, value_range: Arc<dyn ValueRange<V>>) -> Self {
        Self {
            name: Arc::from(name),
            value: None,
            value_range,
        }
    }

    /// Sets the initial value.
    pub fn with_value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }
}

impl<V: Debug> Debug for BasicVariable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicVariable")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

impl<V: PlanningValue> PlanningVariable for BasicVariable<V> {
    type Value = V;

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn set_value(&mut self, value: Option<V>) -> Option<V> {
        std::mem::replace(&mut self.value, value)
    }

    fn value_range(&self) -> &dyn ValueRange<V> {
        self.value_range.as_ref()
    }
}
