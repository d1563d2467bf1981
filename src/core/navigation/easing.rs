/// Cubic ease-out: fast start, smooth settle. Maps `[0, 1]` onto `[0, 1]`
/// with `ease_out_cubic(1.0) == 1.0` exactly.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Eased progress after completing step `step` (0-based) of `steps`.
#[inline]
#[must_use]
pub fn eased_progress(step: u32, steps: u32) -> f64 {
    if steps == 0 {
        return 1.0;
    }

    ease_out_cubic(f64::from(step + 1) / f64::from(steps))
}
