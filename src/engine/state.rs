// src/engine/state.rs

use std::collections::VecDeque;
use std::time::Instant;

use serde::Serialize;

use crate::mechanics::classify::{MIN_DIFFICULTY, Phase, classify_difficulty, classify_phase};

/// Game speed every session starts at (clamped into the configured bounds).
pub const INITIAL_SPEED: f64 = 1.0;

/// Correct-answer latencies retained for reporting.
pub const HISTORY_CAPACITY: usize = 5;

/// Per-session adaptive record.
///
/// `phase` and `difficulty` are only ever written together with `game_speed`
/// (see [`AdaptiveState::with_speed`]), so they cannot drift from it once the
/// first answer is in. A fresh session starts at the lowest difficulty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveState {
    pub game_speed: f64,
    pub phase: Phase,
    pub difficulty: u8,
    pub questions_answered: u64,
    pub peak_game_speed: f64,
    pub session_start: Instant,
}

impl AdaptiveState {
    /// Fresh session state at `speed`, started at `now`, difficulty 1.
    pub fn initial(speed: f64, now: Instant) -> Self {
        Self {
            game_speed: speed,
            phase: classify_phase(speed),
            difficulty: MIN_DIFFICULTY,
            questions_answered: 0,
            peak_game_speed: speed,
            session_start: now,
        }
    }

    /// Next state after one processed answer that left the game at `speed`.
    pub fn with_speed(&self, speed: f64) -> Self {
        let phase = classify_phase(speed);
        Self {
            game_speed: speed,
            phase,
            difficulty: classify_difficulty(speed, phase),
            questions_answered: self.questions_answered + 1,
            peak_game_speed: self.peak_game_speed.max(speed),
            session_start: self.session_start,
        }
    }
}

/// Bounded FIFO of correct-answer latencies; oldest evicted first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseHistory {
    times: VecDeque<f64>,
}

impl ResponseHistory {
    pub fn push(&mut self, response_time_ms: f64) {
        if self.times.len() == HISTORY_CAPACITY {
            let _ = self.times.pop_front();
        }
        self.times.push_back(response_time_ms);
    }

    pub fn clear(&mut self) {
        self.times.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().copied()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.times.is_empty() {
            None
        } else {
            Some(self.times.iter().sum::<f64>() / self.times.len() as f64)
        }
    }
}

/// Serializable snapshot for external reporting.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub questions_answered: u64,
    pub game_speed: f64,
    pub peak_game_speed: f64,
    pub phase: Phase,
    pub difficulty: u8,
    pub mean_response_time_ms: Option<f64>,
    pub session_seconds: u64,
}
