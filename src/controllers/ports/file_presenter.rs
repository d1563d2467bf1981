use std::path::Path;

use crate::core::data::raster::Raster;

pub trait FilePresenterPort {
    fn present(
        &self,
        raster: &Raster,
        max_iterations: u32,
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()>;
}
