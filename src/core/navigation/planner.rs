use crate::core::data::region::Region;
use std::time::Duration;
use tracing::debug;

/// Centre offsets beyond this fraction of the current width pan first.
pub const PAN_THRESHOLD_FRACTION: f64 = 0.2;
/// Share of a pan-then-zoom plan's steps spent panning.
pub const PAN_STEP_SHARE: f64 = 0.5;

const ADAPTIVE_MIN_STEPS: u32 = 10;
const ADAPTIVE_STEPS_PER_LOG_ZOOM: f64 = 15.0;
const ADAPTIVE_BASE_DELAY: Duration = Duration::from_millis(20);
const ADAPTIVE_MIN_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Translate the centre at fixed size, then scale into the target.
    PanThenZoom,
    /// Interpolate all four bounds at once.
    DirectZoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPolicy {
    /// Use the requested step count and delay as given.
    #[default]
    Fixed,
    /// Derive step count and delay from the magnification change so the
    /// perceived speed stays roughly constant in log-zoom space.
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPlan {
    pub kind: TransitionKind,
    pub pan_steps: u32,
    pub zoom_steps: u32,
    pub delay_per_step: Duration,
}

impl TransitionPlan {
    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.pan_steps + self.zoom_steps
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionPlanner {
    policy: StepPolicy,
}

impl TransitionPlanner {
    #[must_use]
    pub fn new(policy: StepPolicy) -> Self {
        Self { policy }
    }

    /// Plans the move from `current` to `target`.
    ///
    /// A step count of zero is treated as one. Under
    /// [`StepPolicy::Adaptive`] the requested steps and delay are only used
    /// when the zoom ratio is undefined.
    #[must_use]
    pub fn plan(
        &self,
        current: &Region,
        target: &Region,
        total_steps: u32,
        delay: Duration,
    ) -> TransitionPlan {
        let (total_steps, delay_per_step) = match self.policy {
            StepPolicy::Fixed => (total_steps, delay),
            StepPolicy::Adaptive => {
                adaptive_schedule(current, target).unwrap_or((total_steps, delay))
            }
        };
        let total_steps = total_steps.max(1);

        let kind = classify(current, target);
        let pan_steps = match kind {
            TransitionKind::PanThenZoom => {
                (f64::from(total_steps) * PAN_STEP_SHARE).floor() as u32
            }
            TransitionKind::DirectZoom => 0,
        };

        let plan = TransitionPlan {
            kind,
            pan_steps,
            zoom_steps: total_steps - pan_steps,
            delay_per_step,
        };

        debug!(
            kind = ?plan.kind,
            pan_steps = plan.pan_steps,
            zoom_steps = plan.zoom_steps,
            delay_ms = plan.delay_per_step.as_secs_f64() * 1000.0,
            "planned transition"
        );

        plan
    }
}

/// Pan first when the centres are further apart than
/// [`PAN_THRESHOLD_FRACTION`] of the current width.
#[must_use]
pub fn classify(current: &Region, target: &Region) -> TransitionKind {
    let (current_x, current_y) = current.center();
    let (target_x, target_y) = target.center();
    let distance = (target_x - current_x).hypot(target_y - current_y);

    if distance > PAN_THRESHOLD_FRACTION * current.width() {
        TransitionKind::PanThenZoom
    } else {
        TransitionKind::DirectZoom
    }
}

/// Magnification change between the two regions, folded to be `>= 1` for
/// both zoom-in and zoom-out. `None` when either extent makes the ratio
/// non-positive or non-finite.
#[must_use]
pub fn zoom_ratio(current: &Region, target: &Region) -> Option<f64> {
    let ratio = (current.width() / target.width()).max(current.height() / target.height());

    if !ratio.is_finite() || ratio <= 0.0 {
        return None;
    }

    Some(if ratio < 1.0 { ratio.recip() } else { ratio })
}

/// `max(10, round(15 ln r))` steps at `max(1 ms, 20 ms / sqrt(r))` each.
#[must_use]
pub fn adaptive_schedule(current: &Region, target: &Region) -> Option<(u32, Duration)> {
    let ratio = zoom_ratio(current, target)?;

    let steps = (ADAPTIVE_STEPS_PER_LOG_ZOOM * ratio.ln()).round();
    let steps = if steps.is_finite() && steps > f64::from(ADAPTIVE_MIN_STEPS) {
        steps as u32
    } else {
        ADAPTIVE_MIN_STEPS
    };

    let delay = ADAPTIVE_BASE_DELAY.div_f64(ratio.sqrt()).max(ADAPTIVE_MIN_DELAY);

    Some((steps, delay))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(10);

    fn region(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Region {
        Region::new(x_min, x_max, y_min, y_max).unwrap()
    }

    fn current() -> Region {
        region(-2.0, 1.0, -1.0, 1.0)
    }

    #[test]
    fn far_target_pans_then_zooms() {
        // Centre moves from (-0.5, 0) to (0.5, 0): distance 1 > 0.2 * 3.
        let target = region(0.4, 0.6, -0.1, 0.1);

        let plan = TransitionPlanner::default().plan(&current(), &target, 60, DELAY);

        assert_eq!(plan.kind, TransitionKind::PanThenZoom);
        assert_eq!(plan.pan_steps, 30);
        assert_eq!(plan.zoom_steps, 30);
        assert_eq!(plan.delay_per_step, DELAY);
    }

    #[test]
    fn concentric_target_zooms_directly() {
        let target = region(-0.6, -0.4, -0.1, 0.1);

        let plan = TransitionPlanner::default().plan(&current(), &target, 60, DELAY);

        assert_eq!(plan.kind, TransitionKind::DirectZoom);
        assert_eq!(plan.pan_steps, 0);
        assert_eq!(plan.zoom_steps, 60);
    }

    #[test]
    fn offset_at_threshold_stays_direct() {
        // Offset 0.5 is below 0.2 * 3 = 0.6.
        let target = current().translated(0.5, 0.0).unwrap();

        assert_eq!(classify(&current(), &target), TransitionKind::DirectZoom);
    }

    #[test]
    fn odd_step_counts_give_the_extra_step_to_zoom() {
        let target = region(0.4, 0.6, -0.1, 0.1);

        let plan = TransitionPlanner::default().plan(&current(), &target, 61, DELAY);

        assert_eq!(plan.pan_steps, 30);
        assert_eq!(plan.zoom_steps, 31);
        assert_eq!(plan.total_steps(), 61);
    }

    #[test]
    fn tiny_step_counts_are_usable() {
        let target = region(0.4, 0.6, -0.1, 0.1);
        let planner = TransitionPlanner::default();

        let one = planner.plan(&current(), &target, 1, DELAY);
        let zero = planner.plan(&current(), &target, 0, DELAY);

        assert_eq!((one.pan_steps, one.zoom_steps), (0, 1));
        assert_eq!((zero.pan_steps, zero.zoom_steps), (0, 1));
    }

    #[test]
    fn zoom_ratio_is_symmetric() {
        let wide = region(-2.0, 2.0, -2.0, 2.0);
        let narrow = region(-0.02, 0.02, -0.02, 0.02);

        let zoom_in = zoom_ratio(&wide, &narrow).unwrap();
        let zoom_out = zoom_ratio(&narrow, &wide).unwrap();

        assert!((zoom_in - 100.0).abs() < 1e-9);
        assert!((zoom_out - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_ratio_rejects_degenerate_targets() {
        let flat = region(0.0, 0.0, -1.0, 1.0);
        let inverted = region(1.0, -1.0, 1.0, -1.0);

        assert_eq!(zoom_ratio(&current(), &flat), None);
        assert_eq!(zoom_ratio(&current(), &inverted), None);
    }

    #[test]
    fn adaptive_schedule_scales_with_log_zoom() {
        let wide = region(-2.0, 2.0, -2.0, 2.0);
        let narrow = region(-0.02, 0.02, -0.02, 0.02);

        let (steps, delay) = adaptive_schedule(&wide, &narrow).unwrap();

        // 15 * ln(100) = 69.08
        assert_eq!(steps, 69);
        assert!(delay > Duration::from_micros(1900) && delay < Duration::from_micros(2100));
    }

    #[test]
    fn adaptive_schedule_has_floors() {
        let same = current();
        let deep = region(-1e-9, 1e-9, -1e-9, 1e-9);

        assert_eq!(adaptive_schedule(&same, &same), Some((10, ADAPTIVE_BASE_DELAY)));
        assert_eq!(adaptive_schedule(&current(), &deep).unwrap().1, ADAPTIVE_MIN_DELAY);
    }

    #[test]
    fn adaptive_planner_falls_back_to_requested_schedule() {
        let planner = TransitionPlanner::new(StepPolicy::Adaptive);
        let flat = region(-0.5, -0.5, -1.0, 1.0);

        let plan = planner.plan(&current(), &flat, 42, DELAY);

        assert_eq!(plan.total_steps(), 42);
        assert_eq!(plan.delay_per_step, DELAY);
    }

    #[test]
    fn adaptive_planner_ignores_requested_steps() {
        let planner = TransitionPlanner::new(StepPolicy::Adaptive);
        let target = region(-0.53, -0.47, -0.03, 0.03);

        let plan = planner.plan(&current(), &target, 3, DELAY);

        // ratio = max(3 / 0.06, 2 / 0.06) = 50, 15 * ln(50) = 58.7
        assert_eq!(plan.kind, TransitionKind::DirectZoom);
        assert_eq!(plan.total_steps(), 59);
    }
}
