use crate::core::data::region::Region;

/// Snapshot of everything one background render needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderJob {
    pub region: Region,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub is_final: bool,
}
