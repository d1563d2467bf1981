use crate::controllers::interactive::animation::controller::{
    AnimationController, AnimationState, TickOutcome, TransitionHandle,
};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::navigator_config::NavigatorConfig;
use crate::controllers::interactive::data::render_job::RenderJob;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::controllers::interactive::render_worker::RenderWorker;
use crate::core::actions::render_field::render_field_parallel_rayon::render;
use crate::core::data::region::Region;
use crate::core::navigation::planner::TransitionPlanner;
use crate::core::navigation::presets::Preset;
use crate::core::navigation::status::{ViewUpdateReport, ViewWarning};
use crate::core::navigation::undo::UndoStack;
use crate::core::navigation::viewport::Viewport;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Direction of one discrete pan. `Up` moves towards larger imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// One interactive exploration session.
///
/// Owns the viewport, the animation state machine and the undo history.
/// After every animation frame a preview is rendered on the caller's thread;
/// whenever the view settles a full-resolution frame is queued on a
/// [`RenderWorker`]. Both reach the [`FrameSink`] in generation order, and a
/// queued full render is dropped as soon as a newer frame exists.
///
/// Discrete operations (`pan`, `zoom`, `set_region`) that change the view
/// interrupt any running animation, record the previous region for
/// [`undo`](Navigator::undo) and queue a full render. Animated transitions
/// are forward only.
pub struct Navigator {
    config: NavigatorConfig,
    viewport: Viewport,
    animation: AnimationController,
    undo: UndoStack,
    sink: Arc<dyn FrameSink>,
    worker: RenderWorker,
    generation: u64,
}

impl Navigator {
    pub fn new(config: NavigatorConfig, sink: Arc<dyn FrameSink>) -> Self {
        Self {
            viewport: Viewport::new(
                config.initial_region,
                config.initial_max_iterations,
                config.limits,
            ),
            animation: AnimationController::new(TransitionPlanner::new(config.step_policy)),
            undo: UndoStack::new(config.limits.max_undo_depth),
            worker: RenderWorker::new(Arc::clone(&sink)),
            sink,
            generation: 0,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.viewport.current()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.viewport.max_iterations()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.animation.state(), AnimationState::Idle)
    }

    /// Delay to wait before the next [`tick`](Self::tick); `None` when idle.
    #[must_use]
    pub fn frame_delay(&self) -> Option<Duration> {
        self.animation.frame_delay()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Jumps to `region` without animating.
    pub fn set_region(&mut self, region: Region) -> ViewUpdateReport {
        self.apply_discrete(|viewport| viewport.set(region))
    }

    /// Clamps and stores a new iteration budget. When idle the view is
    /// re-rendered; a running animation picks the budget up on its next
    /// frame.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> u32 {
        let stored = self.viewport.set_max_iterations(max_iterations);

        if stored != max_iterations {
            warn!(requested = max_iterations, stored, "iteration budget clamped");
        }

        if !self.is_animating() {
            self.render_full();
        }

        stored
    }

    pub fn request_animated_transition(
        &mut self,
        target: Region,
        total_steps: u32,
        delay_hint: Duration,
    ) -> TransitionHandle {
        self.animation
            .request(target, total_steps, delay_hint, &self.viewport)
    }

    pub fn request_preset(&mut self, preset: Preset) -> TransitionHandle {
        info!(preset = preset.label(), "flying to preset");

        self.request_animated_transition(
            preset.region(),
            self.config.preset_steps,
            self.config.preset_delay,
        )
    }

    /// Stops the named animation at the next [`tick`](Self::tick), which then
    /// queues the last committed region at full resolution.
    pub fn cancel(&mut self, handle: TransitionHandle) -> bool {
        self.animation.cancel(handle)
    }

    /// Moves the view by fractions of its current width and height.
    pub fn pan(&mut self, dx_fraction: f64, dy_fraction: f64) -> ViewUpdateReport {
        let region = self.viewport.current();
        let dx = dx_fraction * region.width();
        let dy = dy_fraction * region.height();

        self.apply_discrete(|viewport| viewport.pan(dx, dy))
    }

    /// One arrow-key pan of [`NavigatorConfig::pan_fraction`].
    pub fn pan_step(&mut self, direction: PanDirection) -> ViewUpdateReport {
        let fraction = self.config.pan_fraction;

        match direction {
            PanDirection::Left => self.pan(-fraction, 0.0),
            PanDirection::Right => self.pan(fraction, 0.0),
            PanDirection::Up => self.pan(0.0, fraction),
            PanDirection::Down => self.pan(0.0, -fraction),
        }
    }

    /// Scales the view about its centre in one step.
    pub fn zoom(&mut self, factor: f64) -> ViewUpdateReport {
        self.apply_discrete(|viewport| viewport.zoom(factor, None))
    }

    /// Animated zoom about the current centre. Nothing is recorded for undo.
    /// `None` when `factor` is not a positive finite scale.
    pub fn zoom_animated(&mut self, factor: f64) -> Option<TransitionHandle> {
        let current = self.viewport.current();

        let Some(target) = current.scaled(factor, current.center()) else {
            warn!(factor, "rejected animated zoom factor");
            return None;
        };

        Some(self.request_animated_transition(
            target,
            self.config.zoom_steps,
            self.config.zoom_delay,
        ))
    }

    pub fn zoom_in_animated(&mut self) -> Option<TransitionHandle> {
        self.zoom_animated(self.config.zoom_factor)
    }

    pub fn zoom_out_animated(&mut self) -> Option<TransitionHandle> {
        self.zoom_animated(self.config.zoom_factor.recip())
    }

    /// Restores the region recorded before the last discrete change. With
    /// nothing recorded this is a no-op and a running animation carries on.
    pub fn undo(&mut self) -> Option<Region> {
        let region = self.undo.pop()?;

        self.interrupt();
        self.viewport.set(region);
        debug!(%region, remaining = self.undo.len(), "undo");
        self.render_full();

        Some(self.viewport.current())
    }

    /// Advances the animation by one frame and renders what it committed.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.animation.tick(&mut self.viewport);

        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Frame { settled, .. } => {
                self.render_preview();
                if settled {
                    self.render_full();
                }
            }
            TickOutcome::Cancelled { .. } => {
                self.render_full();
            }
        }

        outcome
    }

    /// Queues the current view at full resolution. Returns its generation.
    pub fn refresh(&mut self) -> u64 {
        self.render_full()
    }

    /// Blocks until the queued full-resolution render has been presented or
    /// dropped.
    pub fn flush(&self) {
        self.worker.wait_until_idle();
    }

    /// Ticks until the animation is idle, calling `wait` with the frame
    /// delay between frames, then flushes. Returns the number of ticks.
    pub fn settle(&mut self, mut wait: impl FnMut(Duration)) -> usize {
        let mut ticks = 0;

        while let Some(delay) = self.frame_delay() {
            self.tick();
            ticks += 1;

            if self.is_animating() {
                wait(delay);
            }
        }

        self.flush();

        ticks
    }

    fn apply_discrete(
        &mut self,
        update: impl FnOnce(&mut Viewport) -> ViewUpdateReport,
    ) -> ViewUpdateReport {
        let before = self.viewport.current();
        let report = update(&mut self.viewport);

        if report.warning == Some(ViewWarning::NonFiniteRejected) {
            return report;
        }

        self.interrupt();
        self.undo.push(before);
        self.render_full();

        report
    }

    /// Stops any animation right here, between frames, without rendering.
    /// Callers queue the full render themselves.
    fn interrupt(&mut self) {
        if self.animation.cancel_all() {
            self.animation.tick(&mut self.viewport);
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn render_full(&mut self) -> u64 {
        let generation = self.next_generation();
        let job = RenderJob {
            region: self.viewport.current(),
            width: self.config.full_width,
            height: self.config.full_height,
            max_iterations: self.viewport.max_iterations(),
            is_final: true,
        };

        debug!(generation, region = %job.region, "full render queued");
        self.worker.submit(generation, job);

        generation
    }

    fn render_preview(&mut self) -> u64 {
        let generation = self.next_generation();
        self.worker.supersede(generation);

        let (width, height) = (self.config.preview_width, self.config.preview_height);
        let region = self.viewport.current();
        let max_iterations = self.viewport.max_iterations();

        let start = Instant::now();
        let raster = render(region, width, height, max_iterations);
        let render_duration = start.elapsed();

        trace!(
            generation,
            width,
            height,
            render_ms = render_duration.as_secs_f64() * 1000.0,
            "preview rendered"
        );

        self.sink.present(FrameData {
            generation,
            raster,
            region,
            is_final: false,
            render_duration,
        });

        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        frames: Mutex<Vec<FrameData>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<FrameData> {
            std::mem::take(&mut *self.frames.lock().unwrap())
        }
    }

    impl FrameSink for RecordingSink {
        fn present(&self, frame: FrameData) {
            self.frames.lock().unwrap().push(frame);
        }
    }

    fn small_config() -> NavigatorConfig {
        NavigatorConfig {
            initial_max_iterations: 50,
            preview_width: 4,
            preview_height: 3,
            full_width: 8,
            full_height: 6,
            ..NavigatorConfig::default()
        }
    }

    fn navigator() -> (Navigator, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let navigator = Navigator::new(small_config(), Arc::clone(&sink) as Arc<dyn FrameSink>);

        (navigator, sink)
    }

    fn region(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Region {
        Region::new(x_min, x_max, y_min, y_max).unwrap()
    }

    #[test]
    fn refresh_presents_one_full_frame() {
        let (mut navigator, sink) = navigator();

        let generation = navigator.refresh();
        navigator.flush();
        let frames = sink.take();

        assert_eq!(generation, 1);
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_final);
        assert_eq!(frames[0].raster.shape(), (6, 8));
        assert_eq!(frames[0].region, navigator.region());
    }

    #[test]
    fn animation_renders_previews_then_one_full_frame() {
        let (mut navigator, sink) = navigator();
        let target = region(-0.6, -0.4, -0.1, 0.1);

        navigator.request_animated_transition(target, 12, Duration::ZERO);
        let ticks = navigator.settle(|_| {});
        let frames = sink.take();

        assert_eq!(ticks, 12);
        assert_eq!(frames.len(), 13);
        assert!(frames[..12].iter().all(|frame| !frame.is_final));
        assert!(frames[..12].iter().all(|frame| frame.raster.shape() == (3, 4)));
        assert!(frames[12].is_final);
        assert_eq!(frames[12].region, target);
        assert!(frames.windows(2).all(|pair| pair[1].generation > pair[0].generation));
    }

    #[test]
    fn settle_waits_between_frames_only() {
        let (mut navigator, _sink) = navigator();
        let mut waits = Vec::new();

        navigator.request_animated_transition(
            region(-0.6, -0.4, -0.1, 0.1),
            5,
            Duration::from_millis(7),
        );
        navigator.settle(|delay| waits.push(delay));

        assert_eq!(waits, vec![Duration::from_millis(7); 4]);
    }

    #[test]
    fn pan_moves_by_fraction_and_undo_restores() {
        let (mut navigator, sink) = navigator();
        let start = navigator.region();

        let report = navigator.pan(0.05, -0.05);
        navigator.flush();

        assert!(report.is_clean());
        let moved = navigator.region();
        assert!((moved.x_min() - (start.x_min() + 0.05 * start.width())).abs() < 1e-12);
        assert!((moved.y_min() - (start.y_min() - 0.05 * start.height())).abs() < 1e-12);
        assert_eq!(navigator.undo_depth(), 1);

        assert_eq!(navigator.undo(), Some(start));
        assert_eq!(navigator.region(), start);
        assert_eq!(navigator.undo(), None);
        navigator.flush();

        let frames = sink.take();
        assert_eq!(frames.len(), 2);
        assert!(frames.iter().all(|frame| frame.is_final));
        assert_eq!(frames[1].region, start);
    }

    #[test]
    fn pan_step_uses_configured_fraction() {
        let (mut navigator, _sink) = navigator();
        let start = navigator.region();

        navigator.pan_step(PanDirection::Right);
        navigator.pan_step(PanDirection::Down);

        let (x, y) = navigator.region().center();
        assert!((x - (start.center().0 + 0.05 * start.width())).abs() < 1e-12);
        assert!((y - (start.center().1 - 0.05 * start.height())).abs() < 1e-12);
        assert_eq!(navigator.undo_depth(), 2);
    }

    #[test]
    fn discrete_step_interrupts_animation() {
        let (mut navigator, sink) = navigator();

        navigator.request_preset(Preset::Minibrot);
        navigator.tick();
        navigator.tick();
        let mid_flight = navigator.region();
        sink.take();

        navigator.pan(0.05, 0.0);
        navigator.flush();

        assert!(!navigator.is_animating());
        assert_eq!(navigator.tick(), TickOutcome::Idle);
        let frames = sink.take();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_final);

        assert_eq!(navigator.undo(), Some(mid_flight));
    }

    #[test]
    fn animated_zoom_is_not_undoable() {
        let (mut navigator, _sink) = navigator();
        let start = navigator.region();

        assert!(navigator.zoom_in_animated().is_some());
        navigator.settle(|_| {});

        assert!((navigator.region().width() - start.width() * 0.75).abs() < 1e-12);
        assert_eq!(navigator.undo_depth(), 0);
        assert_eq!(navigator.undo(), None);
    }

    #[test]
    fn animated_zoom_rejects_bad_factor() {
        let (mut navigator, _sink) = navigator();

        assert!(navigator.zoom_animated(0.0).is_none());
        assert!(navigator.zoom_animated(f64::NAN).is_none());
        assert!(!navigator.is_animating());
    }

    #[test]
    fn discrete_zoom_is_undoable() {
        let (mut navigator, _sink) = navigator();
        let start = navigator.region();

        navigator.zoom(0.5);
        navigator.zoom(0.5);

        assert_eq!(navigator.undo_depth(), 2);
        navigator.undo();
        navigator.undo();
        assert_eq!(navigator.region(), start);
    }

    #[test]
    fn rejected_region_is_not_recorded() {
        let (mut navigator, sink) = navigator();
        let start = navigator.region();
        let overflowing = region(-f64::MAX, f64::MAX, -1.0, 1.0);

        let report = navigator.set_region(overflowing);

        assert_eq!(report.warning, Some(ViewWarning::NonFiniteRejected));
        assert_eq!(navigator.region(), start);
        assert_eq!(navigator.undo_depth(), 0);
        navigator.flush();
        assert!(sink.take().is_empty());
    }

    #[test]
    fn empty_undo_leaves_animation_running() {
        let (mut navigator, sink) = navigator();

        navigator.request_preset(Preset::Minibrot);
        navigator.tick();
        navigator.tick();
        sink.take();

        assert_eq!(navigator.undo(), None);
        assert!(navigator.is_animating());

        navigator.settle(|_| {});
        let finals: Vec<FrameData> = sink
            .take()
            .into_iter()
            .filter(|frame| frame.is_final)
            .collect();
        assert_eq!(finals.len(), 1);
        assert_eq!(finals[0].region, Preset::Minibrot.region());
    }

    #[test]
    fn rejected_region_leaves_animation_running() {
        let (mut navigator, sink) = navigator();

        navigator.request_preset(Preset::Bulb);
        navigator.tick();
        sink.take();

        let report = navigator.set_region(region(-f64::MAX, f64::MAX, -1.0, 1.0));

        assert_eq!(report.warning, Some(ViewWarning::NonFiniteRejected));
        assert!(navigator.is_animating());
        assert_eq!(navigator.undo_depth(), 0);

        navigator.settle(|_| {});
        let frames = sink.take();
        assert_eq!(frames.last().map(|frame| frame.is_final), Some(true));
        assert_eq!(
            frames.last().map(|frame| frame.region),
            Some(Preset::Bulb.region())
        );
    }

    #[test]
    fn rapid_discrete_steps_end_on_the_newest_full_frame() {
        let (mut navigator, sink) = navigator();

        for _ in 0..10 {
            navigator.pan_step(PanDirection::Left);
        }
        navigator.flush();
        let frames = sink.take();

        assert!(!frames.is_empty());
        assert!(frames.windows(2).all(|pair| pair[1].generation > pair[0].generation));
        assert_eq!(frames.last().map(|frame| frame.region), Some(navigator.region()));
    }

    #[test]
    fn frames_reach_the_sink_in_generation_order() {
        let (mut navigator, sink) = navigator();

        navigator.refresh();
        navigator.request_animated_transition(
            region(-0.6, -0.4, -0.1, 0.1),
            3,
            Duration::ZERO,
        );
        navigator.settle(|_| {});
        let frames = sink.take();

        assert!(frames.windows(2).all(|pair| pair[1].generation > pair[0].generation));
        assert_eq!(frames.iter().filter(|frame| !frame.is_final).count(), 3);
        assert_eq!(frames.last().map(|frame| frame.is_final), Some(true));
    }

    #[test]
    fn cancel_renders_last_committed_frame_in_full() {
        let (mut navigator, sink) = navigator();

        let handle = navigator.request_preset(Preset::Bulb);
        for _ in 0..3 {
            navigator.tick();
        }
        let committed = navigator.region();
        sink.take();

        assert!(navigator.cancel(handle));
        assert_eq!(
            navigator.tick(),
            TickOutcome::Cancelled { region: committed }
        );
        navigator.flush();

        let frames = sink.take();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_final);
        assert_eq!(frames[0].region, committed);
        assert!(!navigator.is_animating());
    }

    #[test]
    fn set_max_iterations_clamps_and_rerenders_when_idle() {
        let (mut navigator, sink) = navigator();

        assert_eq!(navigator.set_max_iterations(1), 10);
        assert_eq!(navigator.max_iterations(), 10);
        navigator.flush();
        let frames = sink.take();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].raster.as_slice().iter().all(|&count| count <= 10));

        navigator.request_preset(Preset::Minibrot);
        navigator.set_max_iterations(200);
        navigator.flush();
        assert!(sink.take().is_empty());
        assert_eq!(navigator.undo_depth(), 0);
    }
}
