use crate::core::data::region::Region;
use crate::core::navigation::limits::ViewLimits;
use crate::core::navigation::planner::StepPolicy;
use crate::core::navigation::presets::Preset;
use std::time::Duration;

/// Session settings for a [`Navigator`](crate::Navigator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorConfig {
    pub initial_region: Region,
    pub initial_max_iterations: u32,
    pub limits: ViewLimits,
    pub step_policy: StepPolicy,

    /// Resolution of the per-frame preview render while animating.
    pub preview_width: u32,
    pub preview_height: u32,
    /// Resolution of the render issued once a view settles.
    pub full_width: u32,
    pub full_height: u32,

    pub preset_steps: u32,
    pub preset_delay: Duration,

    /// Scale applied by one animated zoom-in; zoom-out uses its reciprocal.
    pub zoom_factor: f64,
    pub zoom_steps: u32,
    pub zoom_delay: Duration,

    /// Fraction of the current width or height moved by one discrete pan.
    pub pan_fraction: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            initial_region: Preset::Original.region(),
            initial_max_iterations: 1000,
            limits: ViewLimits::default(),
            step_policy: StepPolicy::Fixed,
            preview_width: 100,
            preview_height: 100,
            full_width: 800,
            full_height: 800,
            preset_steps: 60,
            preset_delay: Duration::from_millis(10),
            zoom_factor: 0.75,
            zoom_steps: 20,
            zoom_delay: Duration::from_millis(10),
            pan_fraction: 0.05,
        }
    }
}
