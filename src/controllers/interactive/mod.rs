//! Interactive controllers for real-time fractal navigation.
//!
//! This module is the application layer between a host (window, terminal,
//! headless driver) and the pure domain in `core/`.
//!
//! # Architecture
//!
//! The interactive controllers follow the ports & adapters pattern:
//! - **Input**: calls on [`Navigator`] describing what the user asked for
//! - **Background**: [`RenderWorker`] renders full-resolution frames off the
//!   caller's thread
//! - **Output**: the [`FrameSink`] trait receiving rendered frames
//! - **Core**: rendering and viewport rules come from `core/`

pub mod animation;
pub mod data;
mod navigator;
pub mod ports;
mod render_worker;

pub use animation::{AnimationController, AnimationState, TickOutcome, TransitionHandle};
pub use data::frame_data::FrameData;
pub use data::navigator_config::NavigatorConfig;
pub use data::render_job::RenderJob;
pub use navigator::{Navigator, PanDirection};
pub use ports::FrameSink;
pub use render_worker::RenderWorker;
