use crate::core::actions::render_field::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time count for `c` under `z -> z² + c`, starting from `z = 0`.
///
/// Returns the 0-based iteration at which `|z|² > 4`, or `max_iterations`
/// when the orbit stays bounded for the whole budget. The sentinel is not an
/// escape step.
#[inline]
#[must_use]
pub fn escape(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z.square() + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm;

impl EscapeAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn escape(&self, c: Complex, max_iterations: u32) -> u32 {
        escape(c, max_iterations)
    }
}
