/// Stochastic mechanics: seeded RNG helpers for the synthetic player.
/// Note: takes `&RefCell<WyRand>` so callers can keep `&self` methods and
/// `Fn` closures while advancing the RNG.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use std::cell::RefCell;

/// Fresh generator from a plain `u64` seed.
pub fn seeded(seed: u64) -> RefCell<WyRand> {
    RefCell::new(WyRand::from_seed(seed.to_le_bytes()))
}

/// Uniform [0, 1) with 53 bits of precision.
#[inline]
pub fn uniform01(rng: &RefCell<WyRand>) -> f64 {
    let v = rng.borrow_mut().next_u64();
    ((v >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Gaussian(0,1) via Box-Muller. Uses `1 - u` so the log never sees zero.
#[inline]
pub fn gaussian01(rng: &RefCell<WyRand>) -> f64 {
    let u1 = 1.0 - uniform01(rng);
    let u2 = uniform01(rng);
    let r = (-2.0 * u1.ln()).sqrt();
    let t = 2.0 * std::f64::consts::PI * u2;
    r * t.cos()
}

/// Bernoulli(p). `p >= 1` is always true, `p <= 0` always false.
#[inline]
pub fn bernoulli(rng: &RefCell<WyRand>, p: f64) -> bool {
    uniform01(rng) < p.clamp(0.0, 1.0)
}

/// Multiplicative jitter: max(0, 1 + N(0,1) * jitter). No draw when jitter is 0.
#[inline]
pub fn jitter_factor(rng: &RefCell<WyRand>, jitter: f64) -> f64 {
    if jitter <= 0.0 {
        return 1.0;
    }
    (1.0 + gaussian01(rng) * jitter).max(0.0)
}
