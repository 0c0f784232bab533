// src/sim/mod.rs

//! # Simulator
//!
//! Drives an [`AdaptiveEngine`] with a [`SyntheticPlayer`] through the
//! crate's [`refine_det`] loop, one question per iteration, until the game
//! speed settles. Useful for checking an `AdaptiveConfig` offline: a good
//! config settles quickly and settles higher for faster players.
//!
//! Settling is a band, not an equality: the last `window` speeds must lie
//! within `tolerance` of each other. Don't shrink `tolerance` below one
//! speed step if the player is noisy; the speed will keep chattering.

pub mod player;
pub use player::*;

use std::cell::RefCell;

use crate::engine::{AdaptiveEngine, AdaptiveState};
use crate::mechanics::timing::{allowed_time_ms, base_time_ms};
use crate::refine_det;

#[derive(Clone, Copy, Debug)]
pub struct SettleBand {
    pub window: usize,
    pub tolerance: f64,
}

impl Default for SettleBand {
    fn default() -> Self {
        Self { window: 10, tolerance: 1e-9 }
    }
}

#[derive(Clone, Debug)]
pub struct SimOutcome {
    pub state: AdaptiveState,
    pub questions: usize,
    pub settled: bool,
    /// Game speed after each question.
    pub trace: Vec<f64>,
}

/// Play the engine's active minigame until the speed settles or
/// `max_questions` answers have been processed.
pub fn play_until_settled(
    engine: &mut AdaptiveEngine,
    player: &SyntheticPlayer,
    band: SettleBand,
    max_questions: usize,
) -> SimOutcome {
    let base_ms = base_time_ms(engine.current_game());
    let trace = RefCell::new(Vec::with_capacity(max_questions));
    let start = engine.state();

    let simulate = |st: &AdaptiveState| player.respond(allowed_time_ms(base_ms, st.game_speed) as f64);
    let measure = |answer: &(bool, f64)| *answer;
    let update = |_st: &AdaptiveState, &(correct, rt): &(bool, f64)| {
        let next = engine.process_answer(correct, rt);
        trace.borrow_mut().push(next.game_speed);
        next
    };
    let converged = |_a: &AdaptiveState, _b: &AdaptiveState| {
        let t = trace.borrow();
        if band.window == 0 || t.len() < band.window {
            return false;
        }
        let tail = &t[t.len() - band.window..];
        let lo = tail.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = tail.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        hi - lo <= band.tolerance
    };

    let run = refine_det(start, simulate, measure, update, converged, max_questions);

    tracing::debug!(
        questions = run.iters,
        settled = run.converged,
        speed = run.theta.game_speed,
        "simulation finished"
    );

    SimOutcome {
        state: run.theta,
        questions: run.iters,
        settled: run.converged,
        trace: trace.into_inner(),
    }
}
