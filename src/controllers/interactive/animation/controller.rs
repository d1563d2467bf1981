use crate::core::data::region::Region;
use crate::core::navigation::easing::eased_progress;
use crate::core::navigation::planner::{TransitionPlan, TransitionPlanner};
use crate::core::navigation::viewport::Viewport;
use std::time::Duration;
use tracing::{debug, info};

/// Identifies one call to [`AnimationController::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionHandle(u64);

impl TransitionHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    pub handle: TransitionHandle,
    pub target: Region,
    pub total_steps: u32,
    pub delay_hint: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Pan,
    Zoom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningAnimation {
    pub handle: TransitionHandle,
    pub target: Region,
    pub plan: TransitionPlan,
    pub phase: AnimationPhase,
    /// Steps already committed in the current phase.
    pub step: u32,
    /// Region committed when the current phase began.
    pub phase_start: Region,
}

impl RunningAnimation {
    fn begin(handle: TransitionHandle, target: Region, plan: TransitionPlan, start: Region) -> Self {
        let phase = if plan.pan_steps > 0 {
            AnimationPhase::Pan
        } else {
            AnimationPhase::Zoom
        };

        Self {
            handle,
            target,
            plan,
            phase,
            step: 0,
            phase_start: start,
        }
    }

    fn next_region(&self) -> Region {
        match self.phase {
            AnimationPhase::Pan => {
                let t = eased_progress(self.step, self.plan.pan_steps);
                let (start_x, start_y) = self.phase_start.center();
                let (target_x, target_y) = self.target.center();

                Region::from_center(
                    start_x + (target_x - start_x) * t,
                    start_y + (target_y - start_y) * t,
                    self.phase_start.width(),
                    self.phase_start.height(),
                )
                .unwrap_or(self.phase_start)
            }
            AnimationPhase::Zoom => {
                let t = eased_progress(self.step, self.plan.zoom_steps);

                self.phase_start.lerp(&self.target, t)
            }
        }
    }

    /// Moves past the frame just committed. Returns `true` once every step of
    /// the plan has been committed.
    fn advance(&mut self, committed: Region) -> bool {
        self.step += 1;

        match self.phase {
            AnimationPhase::Pan if self.step >= self.plan.pan_steps => {
                self.phase = AnimationPhase::Zoom;
                self.step = 0;
                self.phase_start = committed;
                false
            }
            AnimationPhase::Pan => false,
            AnimationPhase::Zoom => self.step >= self.plan.zoom_steps,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    Idle,
    Running(RunningAnimation),
    /// Cancellation requested; observed on the next frame boundary.
    Cancelling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing is animating.
    Idle,
    /// A cancellation took effect. `region` is the last committed frame.
    Cancelled { region: Region },
    /// A frame was committed to the viewport. `settled` marks the last frame
    /// of the last plan in a chain, after which the host renders at full
    /// resolution.
    Frame { region: Region, settled: bool },
}

/// Drives the viewport through transition plans, one frame per [`tick`].
///
/// The controller is a cooperative state machine: the host calls `tick` from
/// its own timer or frame callback and renders whatever the outcome names.
/// At most one plan runs at a time. A request arriving mid-flight becomes the
/// single pending target (last write wins) and replaces the running plan's
/// remaining steps at the next frame boundary.
///
/// [`tick`]: AnimationController::tick
#[derive(Debug)]
pub struct AnimationController {
    state: AnimationState,
    pending: Option<TransitionRequest>,
    planner: TransitionPlanner,
    next_handle: u64,
}

impl AnimationController {
    #[must_use]
    pub fn new(planner: TransitionPlanner) -> Self {
        Self {
            state: AnimationState::Idle,
            pending: None,
            planner,
            next_handle: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running(_))
    }

    #[must_use]
    pub fn current_plan(&self) -> Option<TransitionPlan> {
        match self.state {
            AnimationState::Running(running) => Some(running.plan),
            _ => None,
        }
    }

    #[must_use]
    pub fn pending_target(&self) -> Option<Region> {
        self.pending.map(|request| request.target)
    }

    /// How long the host should wait before the next [`tick`](Self::tick).
    #[must_use]
    pub fn frame_delay(&self) -> Option<Duration> {
        match self.state {
            AnimationState::Running(running) => Some(running.plan.delay_per_step),
            AnimationState::Cancelling => Some(Duration::ZERO),
            AnimationState::Idle => None,
        }
    }

    pub fn request(
        &mut self,
        target: Region,
        total_steps: u32,
        delay_hint: Duration,
        viewport: &Viewport,
    ) -> TransitionHandle {
        self.next_handle += 1;
        let handle = TransitionHandle(self.next_handle);
        let request = TransitionRequest {
            handle,
            target,
            total_steps,
            delay_hint,
        };

        match self.state {
            AnimationState::Running(_) => {
                if let Some(replaced) = self.pending.replace(request) {
                    debug!(
                        replaced = replaced.handle.id(),
                        handle = handle.id(),
                        "pending transition replaced"
                    );
                } else {
                    debug!(handle = handle.id(), "transition queued");
                }
            }
            AnimationState::Idle | AnimationState::Cancelling => {
                self.start(request, viewport.current());
            }
        }

        handle
    }

    /// Cancels the animation if `handle` names the running or pending
    /// request. Returns whether anything was cancelled.
    pub fn cancel(&mut self, handle: TransitionHandle) -> bool {
        let running = matches!(self.state, AnimationState::Running(running) if running.handle == handle);
        let pending = self.pending.is_some_and(|request| request.handle == handle);

        if !running && !pending {
            return false;
        }

        self.cancel_all()
    }

    /// Stops whatever is animating at the next frame boundary and drops the
    /// pending target. Idempotent.
    pub fn cancel_all(&mut self) -> bool {
        self.pending = None;

        match self.state {
            AnimationState::Running(running) => {
                debug!(handle = running.handle.id(), "transition cancelled");
                self.state = AnimationState::Cancelling;
                true
            }
            AnimationState::Idle | AnimationState::Cancelling => false,
        }
    }

    /// Commits one frame to `viewport`.
    pub fn tick(&mut self, viewport: &mut Viewport) -> TickOutcome {
        let mut running = match self.state {
            AnimationState::Idle => return TickOutcome::Idle,
            AnimationState::Cancelling => {
                self.state = AnimationState::Idle;
                return TickOutcome::Cancelled {
                    region: viewport.current(),
                };
            }
            AnimationState::Running(running) => running,
        };

        viewport.set(running.next_region());
        let committed = viewport.current();
        let finished = running.advance(committed);

        if let Some(next) = self.pending.take() {
            debug!(
                from = running.handle.id(),
                to = next.handle.id(),
                "chaining to pending transition"
            );
            self.start(next, committed);
            return TickOutcome::Frame {
                region: committed,
                settled: false,
            };
        }

        if finished {
            info!(handle = running.handle.id(), region = %committed, "transition settled");
            self.state = AnimationState::Idle;
        } else {
            self.state = AnimationState::Running(running);
        }

        TickOutcome::Frame {
            region: committed,
            settled: finished,
        }
    }

    fn start(&mut self, request: TransitionRequest, current: Region) {
        let plan = self.planner.plan(
            &current,
            &request.target,
            request.total_steps,
            request.delay_hint,
        );

        debug!(
            handle = request.handle.id(),
            to = %request.target,
            total_steps = plan.total_steps(),
            "transition started"
        );

        self.state = AnimationState::Running(RunningAnimation::begin(
            request.handle,
            request.target,
            plan,
            current,
        ));
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(TransitionPlanner::default())
    }
}
