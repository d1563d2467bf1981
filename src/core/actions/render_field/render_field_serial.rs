use crate::core::actions::render_field::linspace::linspace;
use crate::core::actions::render_field::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::raster::Raster;
use crate::core::data::region::Region;

/// Single-threaded reference renderer. Same sampling as the parallel path.
pub fn render_field_serial<Alg: EscapeAlgorithm>(
    algorithm: &Alg,
    region: Region,
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Raster {
    let xs = linspace(region.x_min(), region.x_max(), width as usize);
    let ys = linspace(region.y_min(), region.y_max(), height as usize);

    let counts = ys
        .iter()
        .flat_map(|&y| {
            xs.iter()
                .map(move |&x| algorithm.escape(Complex::new(x, y), max_iterations))
        })
        .collect();

    Raster::from_counts(width, height, counts)
}
