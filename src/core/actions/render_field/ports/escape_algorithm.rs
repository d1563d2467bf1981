use crate::core::data::complex::Complex;

/// Per-point classifier driven by the field renderer.
///
/// Implementations must be pure: the renderer calls them from many worker
/// threads at once and relies on identical inputs giving identical counts.
pub trait EscapeAlgorithm: Sync {
    fn escape(&self, c: Complex, max_iterations: u32) -> u32;
}
