// src/sim/player.rs

use std::cell::RefCell;

use bevy_prng::WyRand;

use crate::mechanics::stoch;

/// Seeded stand-in for a human player.
///
/// Latency is `mean_latency_ms * max(0, 1 + N(0,1) * jitter)`; an answer
/// slower than the allowed budget becomes a timeout (wrong, full budget).
pub struct SyntheticPlayer {
    pub mean_latency_ms: f64,
    pub jitter: f64,
    /// Probability of a correct answer when the player beats the clock.
    pub accuracy: f64,
    rng: RefCell<WyRand>,
}

impl SyntheticPlayer {
    pub fn new(mean_latency_ms: f64, jitter: f64, accuracy: f64, seed: u64) -> Self {
        Self { mean_latency_ms, jitter, accuracy, rng: stoch::seeded(seed) }
    }

    /// Never wrong, never varies.
    pub fn steady(mean_latency_ms: f64) -> Self {
        Self::new(mean_latency_ms, 0.0, 1.0, 0)
    }

    /// `(correct, response_time_ms)` for a question with `allowed_ms` on the clock.
    pub fn respond(&self, allowed_ms: f64) -> (bool, f64) {
        let latency = self.mean_latency_ms * stoch::jitter_factor(&self.rng, self.jitter);
        if latency > allowed_ms {
            return (false, allowed_ms);
        }
        (stoch::bernoulli(&self.rng, self.accuracy), latency)
    }
}
