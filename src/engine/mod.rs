// src/engine/mod.rs

//! # Adaptive engine
//!
//! [`AdaptiveEngine`] owns the per-session [`AdaptiveState`], the bounded
//! response history and the id of the minigame currently on screen. It has
//! no timers and no I/O; every transition happens synchronously inside
//! [`AdaptiveEngine::process_answer`].
//!
//! ## Call order
//! The engine is not reentrant. Answers must be reported one at a time in
//! the order they happened; guard against double taps at the call site.
//!
//! ## Timeouts
//! When the player lets a question run out, report it as a wrong answer that
//! used the whole budget. [`AdaptiveEngine::process_timeout`] does exactly that.

pub mod config;
pub mod controller;
pub mod state;

pub use config::*;
pub use controller::*;
pub use state::*;

use std::time::{Duration, Instant};

use crate::games::{DEFAULT_GAME, GameParams, game_params};
use crate::mechanics::classify::Phase;
use crate::mechanics::timing::{allowed_time_ms, base_time_ms};

#[derive(Clone, Debug)]
pub struct AdaptiveEngine {
    config: AdaptiveConfig,
    state: AdaptiveState,
    history: ResponseHistory,
    current_game: String,
}

impl Default for AdaptiveEngine {
    fn default() -> Self {
        Self::new(AdaptiveConfig::default())
    }
}

impl AdaptiveEngine {
    /// Engine over `config` as given. Use [`Self::try_with_overrides`] to
    /// have the config checked first.
    pub fn new(config: AdaptiveConfig) -> Self {
        let now = Instant::now();
        Self {
            config,
            state: AdaptiveState::initial(config.clamp_speed(INITIAL_SPEED), now),
            history: ResponseHistory::default(),
            current_game: DEFAULT_GAME.id().to_owned(),
        }
    }

    /// Defaults + `ov`, validated.
    pub fn try_with_overrides(ov: AdaptiveConfigOverride) -> Result<Self, ConfigError> {
        let config = AdaptiveConfig::with_overrides(ov);
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// Current snapshot.
    pub fn state(&self) -> AdaptiveState {
        self.state
    }

    pub fn current_game(&self) -> &str {
        &self.current_game
    }

    /// Switch the active minigame. Any id is accepted.
    pub fn set_current_game(&mut self, game_id: impl Into<String>) {
        self.current_game = game_id.into();
    }

    /// Feed one answer through the control law and return the new state.
    pub fn process_answer(&mut self, correct: bool, response_time_ms: f64) -> AdaptiveState {
        let prev = self.state;
        let step = next_speed(
            &self.config,
            prev.game_speed,
            base_time_ms(&self.current_game),
            correct,
            response_time_ms,
        );
        if correct {
            self.history.push(response_time_ms);
        }
        self.state = prev.with_speed(step.speed);

        tracing::debug!(
            game = %self.current_game,
            correct,
            response_time_ms,
            allowed_ms = step.allowed_ms,
            ratio = ?step.ratio,
            adjustment = ?step.adjustment,
            from = prev.game_speed,
            to = self.state.game_speed,
            "answer processed"
        );
        if self.state.phase != prev.phase {
            tracing::info!(
                from = %prev.phase,
                to = %self.state.phase,
                speed = self.state.game_speed,
                questions = self.state.questions_answered,
                "phase transition"
            );
        }
        if self.state.phase == Phase::Overdrive && prev.peak_game_speed < self.state.peak_game_speed {
            tracing::info!(peak = self.state.peak_game_speed, "new peak speed");
        }

        self.state
    }

    /// Report the current question as timed out: wrong, using the whole budget.
    pub fn process_timeout(&mut self) -> AdaptiveState {
        let budget = self.allowed_time() as f64;
        self.process_answer(false, budget)
    }

    /// Timer budget for the active minigame, in whole milliseconds.
    pub fn allowed_time(&self) -> u64 {
        allowed_time_ms(base_time_ms(&self.current_game), self.state.game_speed)
    }

    /// Tuning bundle for `game_id` at the current phase and difficulty.
    pub fn game_params(&self, game_id: &str) -> GameParams {
        game_params(game_id, self.state.phase, self.state.difficulty)
    }

    /// Start a new session now.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// Start a new session at `now`.
    pub fn reset_at(&mut self, now: Instant) {
        self.state = AdaptiveState::initial(self.config.clamp_speed(INITIAL_SPEED), now);
        self.history.clear();
        self.current_game = DEFAULT_GAME.id().to_owned();
        tracing::info!(speed = self.state.game_speed, "session reset");
    }

    pub fn session_duration(&self) -> Duration {
        self.state.session_start.elapsed()
    }

    /// Whole seconds since the session started.
    pub fn session_seconds(&self) -> u64 {
        self.session_duration().as_secs()
    }

    /// Whole seconds between session start and `now` (zero if `now` is earlier).
    pub fn session_seconds_at(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.state.session_start).as_secs()
    }

    /// Correct-answer latencies, oldest first, at most [`HISTORY_CAPACITY`].
    pub fn recent_response_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter()
    }

    pub fn mean_response_time_ms(&self) -> Option<f64> {
        self.history.mean()
    }

    pub fn session_report(&self) -> SessionReport {
        SessionReport {
            questions_answered: self.state.questions_answered,
            game_speed: self.state.game_speed,
            peak_game_speed: self.state.peak_game_speed,
            phase: self.state.phase,
            difficulty: self.state.difficulty,
            mean_response_time_ms: self.history.mean(),
            session_seconds: self.session_seconds(),
        }
    }
}
