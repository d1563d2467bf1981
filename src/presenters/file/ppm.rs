use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes rasters as binary PPM images on a grey ramp, interior points black.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(
        &self,
        raster: &Raster,
        max_iterations: u32,
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        let file = File::create(filepath)?;
        let mut writer = BufWriter::new(file);

        self.encode(raster, max_iterations, &mut writer)?;
        writer.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode<W: Write>(
        &self,
        raster: &Raster,
        max_iterations: u32,
        mut out: W,
    ) -> std::io::Result<()> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", raster.width(), raster.height())?;
        writeln!(out, "255")?;

        let pixels: Vec<u8> = raster
            .as_slice()
            .iter()
            .flat_map(|&count| {
                let shade = grey_level(count, max_iterations);
                [shade, shade, shade]
            })
            .collect();

        out.write_all(&pixels)
    }
}

fn grey_level(count: u32, max_iterations: u32) -> u8 {
    if count >= max_iterations {
        return 0;
    }

    (u64::from(count) * 255 / u64::from(max_iterations)) as u8
}
