/*!
`reflex_pace` — adaptive difficulty engine for back-to-back reaction micro-games.

What it does
- Turns a stream of per-question outcomes (correct?, response latency) into a
  continuously updated game speed, a coarse phase, a 1..=10 difficulty and
  per-minigame tuning bundles.
- Holds exactly one piece of mutable state per play session
  ([`AdaptiveState`]) behind [`AdaptiveEngine`]; every other piece is a pure
  function of that state.

How to use (call surface only)
- Build an engine from defaults or a partial override:
  `AdaptiveEngine::default()` / `AdaptiveEngine::try_with_overrides(ov)?`.
- Tell it which minigame is on screen: `set_current_game("speedMath")`.
- Size timers with `allowed_time()`, size questions with `game_params(id)`.
- Report each answer: `process_answer(correct, response_time_ms)`.
- `reset()` once per new session.

What it does NOT do
- No timers, no I/O, no persistence, no rendering. Callers serialize calls
  and synthesize timeouts (or use `process_timeout`).

The generic refinement loop [`refine_det`] is what the `sim` module uses to
drive the engine with a synthetic player until the speed settles.
*/

/// Result of a refinement run.
#[derive(Clone, Debug)]
pub struct Refinement<T> {
    pub theta: T,
    pub iters: usize,
    pub converged: bool,
}

/// Deterministic refinement: θ_{t+1} = update(θ_t, measure(simulate(θ_t))).
/// Stops early once `converged(θ_t, θ_{t+1})` holds.
pub fn refine_det<T, D, M, Sim, Meas, Upd, Conv>(
    mut theta: T,
    mut simulate: Sim,
    mut measure: Meas,
    mut update: Upd,
    converged: Conv,
    max_iters: usize,
) -> Refinement<T>
where
    Sim: FnMut(&T) -> D,
    Meas: FnMut(&D) -> M,
    Upd: FnMut(&T, &M) -> T,
    Conv: Fn(&T, &T) -> bool,
{
    for i in 0..max_iters {
        let data = simulate(&theta);
        let pi = measure(&data);
        let theta_next = update(&theta, &pi);
        if converged(&theta, &theta_next) {
            return Refinement { theta: theta_next, iters: i + 1, converged: true };
        }
        theta = theta_next;
    }
    Refinement { theta, iters: max_iters, converged: false }
}

pub mod engine;
pub mod games;
pub mod mechanics;
#[cfg(feature = "sim")]
pub mod sim;

pub use engine::*;
pub use games::{GameKind, GameParams, game_params};
pub use mechanics::classify::{Phase, classify_difficulty, classify_phase};
pub use mechanics::timing::{FALLBACK_BASE_TIME_MS, allowed_time_ms, base_time_ms};
