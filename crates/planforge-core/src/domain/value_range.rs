//! Value ranges for planning variables.
//!
//! A value range is a stable, finite domain. Each call to
//! [`ValueRange::create_iterator`] returns a fresh single-pass cursor.

use std::fmt::Debug;
use std::sync::Arc;

/// The enumerable domain of legal values for a variable.
pub trait ValueRange<V>: Send + Sync + Debug {
    /// Returns a fresh iterator over every value, in a stable order.
    fn create_iterator(&self) -> Box<dyn Iterator<Item = V> + '_>;

    /// Returns the number of values.
    fn size(&self) -> usize;

    /// Returns true if the range contains the value.
    fn contains(&self, value: &V) -> bool;

    /// Returns true if the range has no values.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A value range backed by an explicit list.
///
/// # Example
///
/// ```
/// use planforge_core::{ListValueRange, ValueRange};
///
/// let range = ListValueRange::new(vec!["a", "b"]);
/// let values: Vec<_> = range.create_iterator().collect();
/// assert_eq!(values, vec!["a", "b"]);
/// // A second iterator starts over
/// assert_eq!(range.create_iterator().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ListValueRange<V> {
    values: Arc<[V]>,
}

impl<V> ListValueRange<V> {
    pub fn new(values: Vec<V>) -> Self {
        Self {
            values: values.into(),
        }
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }
}

impl<V> ValueRange<V> for ListValueRange<V>
where
    V: Clone + PartialEq + Debug + Send + Sync,
{
    fn create_iterator(&self) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new(self.values.iter().cloned())
    }

    fn size(&self) -> usize {
        self.values.len()
    }

    fn contains(&self, value: &V) -> bool {
        self.values.contains(value)
    }
}

/// A half-open integer range `[start, end)`.
///
/// # Example
///
/// ```
/// use planforge_core::{IntRange, ValueRange};
///
/// let range = IntRange::new(1, 4);
/// assert_eq!(range.size(), 3);
/// assert!(range.contains(&3));
/// assert!(!range.contains(&4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    start: i64,
    end: i64,
}

impl IntRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl ValueRange<i64> for IntRange {
    fn create_iterator(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        Box::new(self.start..self.end)
    }

    fn size(&self) -> usize {
        usize::try_from(self.end.saturating_sub(self.start)).unwrap_or(0)
    }

    fn contains(&self, value: &i64) -> bool {
        (self.start..self.end).contains(value)
    }
}
