//! Port definitions for the interactive controllers.
//!
//! The host implements these to receive rendered frames; the controllers
//! never talk to a window, a file or a widget directly.

pub mod frame_sink;

pub use frame_sink::FrameSink;
