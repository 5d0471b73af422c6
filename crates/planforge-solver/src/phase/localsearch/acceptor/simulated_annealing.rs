//! Simulated annealing acceptor.

use planforge_core::{PlanningSolution, Result, Score};
use rand::rngs::StdRng;
use rand::Rng;

use super::Acceptor;
use crate::heuristic::r#move::Move;

/// Accepts every non-worsening move and a worsening one with probability
/// `exp(delta / temperature)`.
///
/// `delta` is the first non-zero level difference between the move score
/// and the last step score, so it is negative for worsening moves. The
/// temperature is multiplied by the cooling rate after every step, accepted
/// or not. A temperature at or below zero rejects every worsening move.
///
/// # Example
///
/// ```
/// use planforge_solver::phase::localsearch::SimulatedAnnealingAcceptor;
///
/// let acceptor = SimulatedAnnealingAcceptor::new(1000.0, 0.99);
/// assert_eq!(acceptor.current_temperature(), 1000.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingAcceptor {
    starting_temperature: f64,
    current_temperature: f64,
    cooling_rate: f64,
}

impl SimulatedAnnealingAcceptor {
    pub fn new(starting_temperature: f64, cooling_rate: f64) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
            cooling_rate,
        }
    }

    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    /// Probability of accepting a move whose score differs by `delta`.
    pub fn acceptance_probability(&self, delta: i64) -> f64 {
        if delta >= 0 {
            return 1.0;
        }
        let temperature = self.current_temperature;
        if !temperature.is_finite() || temperature <= 0.0 {
            return 0.0;
        }
        (delta as f64 / temperature).exp()
    }
}

impl Default for SimulatedAnnealingAcceptor {
    fn default() -> Self {
        Self::new(1000.0, 0.99)
    }
}

impl<S: PlanningSolution> Acceptor<S> for SimulatedAnnealingAcceptor {
    fn is_accepted<M: Move<S>>(
        &mut self,
        _mv: &M,
        last_step_score: &S::Score,
        move_score: &S::Score,
        rng: &mut StdRng,
    ) -> Result<bool> {
        let delta = move_score.level_delta(last_step_score);
        if delta >= 0 {
            return Ok(true);
        }
        let probability = self.acceptance_probability(delta);
        Ok(probability > 0.0 && rng.random::<f64>() < probability)
    }

    fn phase_started(&mut self, _initial_score: &S::Score) {
        self.current_temperature = self.starting_temperature;
    }

    fn step_ended(&mut self, _step_score: &S::Score) {
        self.current_temperature *= self.cooling_rate;
    }
}
