/// Hard bounds the viewport enforces on every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    /// Floor for both region extents. Narrower views are re-centred to it.
    pub min_region_extent: f64,
    pub min_iterations: u32,
    pub max_iterations: u32,
    pub max_undo_depth: usize,
}

impl ViewLimits {
    #[must_use]
    pub fn clamp_iterations(&self, iterations: u32) -> u32 {
        let low = self.min_iterations.min(self.max_iterations);
        let high = self.min_iterations.max(self.max_iterations);

        iterations.clamp(low, high)
    }
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_region_extent: 1e-14,
            min_iterations: 10,
            max_iterations: 5000,
            max_undo_depth: 50,
        }
    }
}
