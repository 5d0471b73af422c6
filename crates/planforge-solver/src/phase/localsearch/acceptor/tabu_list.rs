//! Bounded FIFO memory of recently accepted moves.

use std::collections::{HashSet, VecDeque};

use planforge_core::Score;

/// Smoothed improvement above which the list shrinks by one.
const SHRINK_THRESHOLD: f64 = 0.3;
/// Smoothed improvement below which the list grows by one.
const GROW_THRESHOLD: f64 = -0.3;

/// One remembered move: its key and when and how it was last accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuItem<Sc: Score> {
    pub hash: String,
    pub iteration: u64,
    pub score: Sc,
}

/// FIFO list of move keys with an adaptive capacity in `[min_size, max_size]`.
///
/// The list never holds more than `current_size` entries and never holds
/// the same key twice.
///
/// # Example
///
/// ```
/// use planforge_core::HardSoftScore;
/// use planforge_solver::phase::localsearch::TabuList;
///
/// let mut list = TabuList::new(2, 4);
/// list.add("a".to_string(), 1, HardSoftScore::ZERO);
/// list.add("a".to_string(), 2, HardSoftScore::ZERO);
/// assert_eq!(list.len(), 1);
///
/// list.add("b".to_string(), 3, HardSoftScore::ZERO);
/// list.add("c".to_string(), 4, HardSoftScore::ZERO);
/// assert!(!list.contains("a"));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuList<Sc: Score> {
    min_size: usize,
    max_size: usize,
    current_size: usize,
    items: VecDeque<TabuItem<Sc>>,
    index: HashSet<String>,
}

impl<Sc: Score> TabuList<Sc> {
    /// Creates an empty list. `min_size` is raised to 1 and `max_size` to
    /// `min_size` when they are out of order.
    pub fn new(min_size: usize, max_size: usize) -> Self {
        let min_size = min_size.max(1);
        let max_size = max_size.max(min_size);
        Self {
            min_size,
            max_size,
            current_size: min_size,
            items: VecDeque::with_capacity(max_size),
            index: HashSet::with_capacity(max_size),
        }
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn current_size(&self) -> usize {
        self.current_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.index.contains(hash)
    }

    /// Inserts a key, evicting the oldest entries first if the list is
    /// full. A key already present only has its metadata refreshed.
    pub fn add(&mut self, hash: String, iteration: u64, score: Sc) {
        if self.index.contains(&hash) {
            if let Some(item) = self.items.iter_mut().find(|item| item.hash == hash) {
                item.iteration = iteration;
                item.score = score;
            }
            return;
        }
        while self.items.len() >= self.current_size {
            self.evict_oldest();
        }
        self.index.insert(hash.clone());
        self.items.push_back(TabuItem {
            hash,
            iteration,
            score,
        });
    }

    /// Shrinks the window while the search improves and grows it while the
    /// search regresses.
    pub fn adjust_size(&mut self, improvement: f64) {
        if improvement > SHRINK_THRESHOLD {
            self.current_size = self.current_size.saturating_sub(1).max(self.min_size);
            while self.items.len() > self.current_size {
                self.evict_oldest();
            }
        } else if improvement < GROW_THRESHOLD {
            self.current_size = (self.current_size + 1).min(self.max_size);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
        self.current_size = self.min_size;
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabuItem<Sc>> {
        self.items.iter()
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.items.pop_front() {
            self.index.remove(&oldest.hash);
        }
    }
}
