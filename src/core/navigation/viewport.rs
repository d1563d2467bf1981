use crate::core::data::region::Region;
use crate::core::navigation::limits::ViewLimits;
use crate::core::navigation::status::{ViewUpdateReport, ViewWarning};
use tracing::warn;

/// The visible region plus the iteration budget used to render it.
///
/// Every mutation goes through [`Viewport::set`], which re-centres any extent
/// that falls below [`ViewLimits::min_region_extent`]. The viewport never
/// returns an error: degenerate input is clamped, non-finite input is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    region: Region,
    max_iterations: u32,
    limits: ViewLimits,
}

impl Viewport {
    #[must_use]
    pub fn new(region: Region, max_iterations: u32, limits: ViewLimits) -> Self {
        Self {
            region: region.with_min_extent(limits.min_region_extent),
            max_iterations: limits.clamp_iterations(max_iterations),
            limits,
        }
    }

    #[must_use]
    pub fn current(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn limits(&self) -> &ViewLimits {
        &self.limits
    }

    pub fn set(&mut self, region: Region) -> ViewUpdateReport {
        if !region.is_finite() {
            warn!(%region, "rejected non-finite viewport region");
            return ViewUpdateReport::warn(ViewWarning::NonFiniteRejected);
        }

        let min_extent = self.limits.min_region_extent;
        if region.is_below_extent(min_extent) {
            self.region = region.with_min_extent(min_extent);
            warn!(
                width = region.width(),
                height = region.height(),
                min_extent,
                "viewport extent clamped"
            );
            return ViewUpdateReport::warn(ViewWarning::ExtentClamped);
        }

        self.region = region;
        ViewUpdateReport::default()
    }

    /// Raw translation by `(dx, dy)` in complex-plane units.
    pub fn pan(&mut self, dx: f64, dy: f64) -> ViewUpdateReport {
        match self.region.translated(dx, dy) {
            Some(region) => self.set(region),
            None => {
                warn!(dx, dy, "rejected non-finite pan");
                ViewUpdateReport::warn(ViewWarning::NonFiniteRejected)
            }
        }
    }

    /// Scales both extents by `factor` about `anchor`, defaulting to the
    /// current centre. `factor < 1` zooms in; the iteration budget is left
    /// untouched.
    pub fn zoom(&mut self, factor: f64, anchor: Option<(f64, f64)>) -> ViewUpdateReport {
        let anchor = anchor.unwrap_or_else(|| self.region.center());

        match self.region.scaled(factor, anchor) {
            Some(region) => self.set(region),
            None => {
                warn!(factor, "rejected zoom factor");
                ViewUpdateReport::warn(ViewWarning::NonFiniteRejected)
            }
        }
    }

    /// Stores the budget clamped to the allowed range and returns it.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> u32 {
        self.max_iterations = self.limits.clamp_iterations(max_iterations);
        self.max_iterations
    }
}
