pub mod controller;

pub use controller::{
    AnimationController, AnimationPhase, AnimationState, RunningAnimation, TickOutcome,
    TransitionHandle, TransitionRequest,
};
