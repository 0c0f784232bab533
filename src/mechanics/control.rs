/// Control mechanics: clamped additive and multiplicative steps.

/// Additive step: x' = clamp(x + delta).
/// Unlike `f64::clamp` this never panics; NaN collapses to `lo`.
#[inline]
pub fn nudge(x: f64, delta: f64, lo: f64, hi: f64) -> f64 {
    (x + delta).max(lo).min(hi)
}

/// Multiplicative step: x' = clamp(x * factor).
#[inline]
pub fn scale(x: f64, factor: f64, lo: f64, hi: f64) -> f64 {
    (x * factor).max(lo).min(hi)
}

/// Share of a time budget that was used. Zero budget counts as fully used
/// when anything was spent, so the ratio never turns into NaN for a real answer.
#[inline]
pub fn budget_ratio(spent: f64, budget: f64) -> f64 {
    if budget > 0.0 {
        spent / budget
    } else if spent > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}
