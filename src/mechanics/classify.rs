//! Phase / difficulty classifier.
//!
//! Both functions are total over every `f64` the engine can hold and carry no
//! state. The thresholds are fixed; they are not part of `AdaptiveConfig`.

use serde::{Deserialize, Serialize};

/// Speed at which the game leaves warmup.
pub const RAMPING_AT: f64 = 1.2;
/// Speed at which the game enters overdrive.
pub const OVERDRIVE_AT: f64 = 1.5;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

/// Coarse pacing label derived from game speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Warmup,
    Ramping,
    Overdrive,
}

impl Phase {
    /// Difficulty bonus added on top of the speed-derived base.
    pub fn bonus(self) -> i64 {
        match self {
            Phase::Warmup => 0,
            Phase::Ramping => 1,
            Phase::Overdrive => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Warmup => "warmup",
            Phase::Ramping => "ramping",
            Phase::Overdrive => "overdrive",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `< 1.2` warmup, `[1.2, 1.5)` ramping, `>= 1.5` overdrive.
/// NaN lands in warmup.
#[inline]
pub fn classify_phase(speed: f64) -> Phase {
    if speed >= OVERDRIVE_AT {
        Phase::Overdrive
    } else if speed >= RAMPING_AT {
        Phase::Ramping
    } else {
        Phase::Warmup
    }
}

/// clamp(floor(speed * 4) + phase bonus, 1, 10).
#[inline]
pub fn classify_difficulty(speed: f64, phase: Phase) -> u8 {
    // `as` saturates and maps NaN to 0, which the clamp then lifts to 1.
    let base = (speed * 4.0).floor() as i64;
    base.saturating_add(phase.bonus())
        .clamp(MIN_DIFFICULTY as i64, MAX_DIFFICULTY as i64) as u8
}
