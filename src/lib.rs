mod controllers;
mod core;
mod presenters;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_field::linspace::linspace;
pub use crate::core::actions::render_field::ports::escape_algorithm::EscapeAlgorithm;
pub use crate::core::actions::render_field::render_field_parallel_rayon::{
    render, render_cancelable, render_field_parallel_rayon, render_field_parallel_rayon_cancelable,
};
pub use crate::core::actions::render_field::render_field_serial::render_field_serial;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::raster::Raster;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape};
pub use crate::core::navigation::easing::{ease_out_cubic, eased_progress};
pub use crate::core::navigation::planner::{classify, zoom_ratio};
pub use crate::core::navigation::{
    Preset, StepPolicy, TransitionKind, TransitionPlan, TransitionPlanner, UndoStack, ViewLimits,
    ViewUpdateReport, ViewWarning, Viewport,
};

pub use crate::controllers::interactive::{
    AnimationController, AnimationState, FrameData, FrameSink, Navigator, NavigatorConfig,
    PanDirection, RenderJob, RenderWorker, TickOutcome, TransitionHandle,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;

pub use crate::presenters::file::ppm::PpmFilePresenter;
