use crate::core::data::raster::Raster;
use crate::core::data::region::Region;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    /// Increases with every frame a producer presents.
    pub generation: u64,
    pub raster: Raster,
    /// Region the raster was sampled from.
    pub region: Region,
    /// Full-resolution frame of a settled view, as opposed to a preview.
    pub is_final: bool,
    pub render_duration: Duration,
}
