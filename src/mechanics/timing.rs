//! Per-game thinking-time table and allowed-time math.

use crate::games::GameKind;

/// Base time for any identifier not in the table.
pub const FALLBACK_BASE_TIME_MS: u32 = 5_000;

/// Base thinking time for a minigame id. Never fails: unknown ids get
/// [`FALLBACK_BASE_TIME_MS`].
#[inline]
pub fn base_time_ms(game_id: &str) -> u32 {
    GameKind::from_id(game_id).map_or(FALLBACK_BASE_TIME_MS, GameKind::base_time_ms)
}

/// Unrounded budget `base / speed`; this is what the control law compares against.
#[inline]
pub fn allowed_time_exact(base_ms: u32, speed: f64) -> f64 {
    base_ms as f64 / speed
}

/// Timer budget handed to minigames: floor(base / speed).
/// Saturates instead of overflowing for degenerate speeds.
#[inline]
pub fn allowed_time_ms(base_ms: u32, speed: f64) -> u64 {
    let t = allowed_time_exact(base_ms, speed).floor();
    if t.is_nan() { 0 } else { t as u64 }
}
