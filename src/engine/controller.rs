// src/engine/controller.rs

//! Speed control law.
//!
//! One answer moves the speed at most one step:
//! - wrong: multiply by `error_penalty` (response time ignored)
//! - correct and fast (ratio < `speed_up_threshold`): `+ speed_increment`
//! - correct and slow (ratio > `slow_down_threshold`): `- speed_decrement`
//! - otherwise hold; the dead zone between the thresholds keeps borderline
//!   answers from making the speed chatter.
//!
//! `ratio = response_time / (base_time / speed)`, i.e. measured against the
//! budget the player was actually given for that question.

use super::config::AdaptiveConfig;
use crate::mechanics::control;
use crate::mechanics::timing::allowed_time_exact;

/// Which branch of the control law fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjustment {
    SpeedUp,
    SlowDown,
    Hold,
    Penalty,
}

/// Outcome of one control step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedStep {
    pub speed: f64,
    pub adjustment: Adjustment,
    /// Unrounded budget the answer was judged against.
    pub allowed_ms: f64,
    /// `None` for wrong answers, which never look at timing.
    pub ratio: Option<f64>,
}

/// Pure control step from `speed` for one answer on a game with `base_ms`.
pub fn next_speed(
    cfg: &AdaptiveConfig,
    speed: f64,
    base_ms: u32,
    correct: bool,
    response_time_ms: f64,
) -> SpeedStep {
    let allowed_ms = allowed_time_exact(base_ms, speed);
    let (lo, hi) = (cfg.min_speed, cfg.max_speed);

    if !correct {
        let next = control::scale(speed, cfg.error_penalty, lo, hi.max(lo));
        return SpeedStep { speed: next, adjustment: Adjustment::Penalty, allowed_ms, ratio: None };
    }

    let ratio = control::budget_ratio(response_time_ms, allowed_ms);
    let (next, adjustment) = if ratio < cfg.speed_up_threshold {
        (control::nudge(speed, cfg.speed_increment, lo, hi.max(lo)), Adjustment::SpeedUp)
    } else if ratio > cfg.slow_down_threshold {
        (control::nudge(speed, -cfg.speed_decrement, lo, hi.max(lo)), Adjustment::SlowDown)
    } else {
        (cfg.clamp_speed(speed), Adjustment::Hold)
    };

    SpeedStep { speed: next, adjustment, allowed_ms, ratio: Some(ratio) }
}
