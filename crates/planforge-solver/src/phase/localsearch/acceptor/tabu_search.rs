//! Tabu search acceptor.

use planforge_config::AspirationCriterion;
use planforge_core::{PlanningSolution, Result, Score};
use rand::rngs::StdRng;

use super::tabu_list::TabuList;
use super::Acceptor;
use crate::heuristic::r#move::Move;

/// Weight of the newest sample in the smoothed improvement rate.
const RATE_SMOOTHING: f64 = 0.1;

/// Rejects moves whose key is in the tabu list unless an aspiration
/// criterion overrides the ban.
///
/// Aspiration criteria:
/// - `BestScore`: the move reaches the best score accepted so far
/// - `Improving`: the move reaches the current score
/// - `TimeBased`: `stagnation_steps` accepted moves passed without improvement
/// - `FrequencyBased`: `max_frequency` accepted moves passed without improvement
///
/// Every judged move feeds an exponentially smoothed improvement signal that
/// resizes the tabu list. A move whose key cannot be computed is rejected.
#[derive(Debug, Clone)]
pub struct TabuSearchAcceptor<Sc: Score> {
    tabu_list: TabuList<Sc>,
    aspiration: Vec<AspirationCriterion>,
    stagnation_steps: u64,
    max_frequency: u64,
    iteration: u64,
    last_improvement: u64,
    current_score: Option<Sc>,
    best_score: Option<Sc>,
    improvement_rate: f64,
}

impl<Sc: Score> TabuSearchAcceptor<Sc> {
    pub fn new(min_size: usize, max_size: usize, aspiration: Vec<AspirationCriterion>) -> Self {
        Self {
            tabu_list: TabuList::new(min_size, max_size),
            aspiration,
            stagnation_steps: 60,
            max_frequency: 10,
            iteration: 0,
            last_improvement: 0,
            current_score: None,
            best_score: None,
            improvement_rate: 0.0,
        }
    }

    /// Accepted moves without improvement before `TimeBased` aspiration fires.
    pub fn with_stagnation_steps(mut self, steps: u64) -> Self {
        self.stagnation_steps = steps;
        self
    }

    /// Accepted moves without improvement before `FrequencyBased` aspiration fires.
    pub fn with_max_frequency(mut self, frequency: u64) -> Self {
        self.max_frequency = frequency;
        self
    }

    pub fn tabu_list(&self) -> &TabuList<Sc> {
        &self.tabu_list
    }

    pub fn best_score(&self) -> Option<&Sc> {
        self.best_score.as_ref()
    }

    pub fn current_score(&self) -> Option<&Sc> {
        self.current_score.as_ref()
    }

    pub fn improvement_rate(&self) -> f64 {
        self.improvement_rate
    }

    /// Clears the tabu list and every tracker.
    pub fn clear(&mut self) {
        self.tabu_list.clear();
        self.iteration = 0;
        self.last_improvement = 0;
        self.current_score = None;
        self.best_score = None;
        self.improvement_rate = 0.0;
    }

    fn aspires(&self, criterion: AspirationCriterion, move_score: &Sc) -> bool {
        let stagnation = self.iteration.saturating_sub(self.last_improvement);
        match criterion {
            AspirationCriterion::BestScore => self
                .best_score
                .as_ref()
                .map_or(true, |best| !move_score.is_worse_than(best)),
            AspirationCriterion::Improving => self
                .current_score
                .as_ref()
                .map_or(true, |current| !move_score.is_worse_than(current)),
            AspirationCriterion::TimeBased => stagnation >= self.stagnation_steps,
            AspirationCriterion::FrequencyBased => stagnation >= self.max_frequency,
        }
    }
}

impl<S: PlanningSolution> Acceptor<S> for TabuSearchAcceptor<S::Score> {
    fn is_accepted<M: Move<S>>(
        &mut self,
        mv: &M,
        _last_step_score: &S::Score,
        move_score: &S::Score,
        _rng: &mut StdRng,
    ) -> Result<bool> {
        let key = mv.tabu_key()?;

        if let Some(current) = &self.current_score {
            let signal = move_score.level_delta(current).signum() as f64;
            self.improvement_rate =
                (1.0 - RATE_SMOOTHING) * self.improvement_rate + RATE_SMOOTHING * signal;
            self.tabu_list.adjust_size(self.improvement_rate);
        }

        if !self.tabu_list.contains(&key) {
            return Ok(true);
        }
        Ok(self
            .aspiration
            .iter()
            .any(|criterion| self.aspires(*criterion, move_score)))
    }

    fn move_accepted<M: Move<S>>(&mut self, mv: &M, move_score: &S::Score) -> Result<()> {
        let key = mv.tabu_key()?;
        self.iteration += 1;
        let improved = self
            .current_score
            .as_ref()
            .map_or(true, |current| move_score.is_better_than(current));
        if improved {
            self.last_improvement = self.iteration;
        }
        self.current_score = Some(*move_score);
        if self
            .best_score
            .as_ref()
            .map_or(true, |best| move_score.is_better_than(best))
        {
            self.best_score = Some(*move_score);
        }
        self.tabu_list.add(key, self.iteration, *move_score);
        Ok(())
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        self.clear();
        self.current_score = Some(*initial_score);
        self.best_score = Some(*initial_score);
    }
}
