pub mod easing;
pub mod limits;
pub mod planner;
pub mod presets;
pub mod status;
pub mod undo;
pub mod viewport;

pub use limits::ViewLimits;
pub use planner::{StepPolicy, TransitionKind, TransitionPlan, TransitionPlanner};
pub use presets::Preset;
pub use status::{ViewUpdateReport, ViewWarning};
pub use undo::UndoStack;
pub use viewport::Viewport;
