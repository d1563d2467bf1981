use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_field::linspace::linspace;
use crate::core::actions::render_field::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::raster::Raster;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Renders the Mandelbrot escape counts of `region` into a `height x width`
/// raster, rows computed in parallel on rayon's pool.
///
/// Pixel `(i, j)` samples `complex(xs[j], ys[i])` where `xs`/`ys` are
/// [`linspace`] grids over the region's bounds. Deterministic for identical
/// inputs.
#[must_use]
pub fn render(region: Region, width: u32, height: u32, max_iterations: u32) -> Raster {
    render_field_parallel_rayon(&MandelbrotAlgorithm, region, width, height, max_iterations)
}

/// Like [`render`], but abandons the work when `cancel` fires.
///
/// A cancelled render returns [`Cancelled`]; callers never observe a
/// partially filled raster.
pub fn render_cancelable<C: CancelToken>(
    region: Region,
    width: u32,
    height: u32,
    max_iterations: u32,
    cancel: &C,
) -> Result<Raster, Cancelled> {
    render_field_parallel_rayon_cancelable(
        &MandelbrotAlgorithm,
        region,
        width,
        height,
        max_iterations,
        cancel,
    )
}

pub fn render_field_parallel_rayon<Alg: EscapeAlgorithm>(
    algorithm: &Alg,
    region: Region,
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Raster {
    match render_field_parallel_rayon_cancelable(
        algorithm,
        region,
        width,
        height,
        max_iterations,
        &NeverCancel,
    ) {
        Ok(raster) => raster,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Each rayon task owns one output row, so workers write disjoint slices
/// and no locking is needed. Cancellation is polled at every row start and
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
pub fn render_field_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    region: Region,
    width: u32,
    height: u32,
    max_iterations: u32,
    cancel: &C,
) -> Result<Raster, Cancelled>
where
    Alg: EscapeAlgorithm,
    C: CancelToken,
{
    let mut raster = Raster::zeroed(width, height);
    if raster.is_empty() {
        return Ok(raster);
    }

    let xs = linspace(region.x_min(), region.x_max(), width as usize);
    let ys = linspace(region.y_min(), region.y_max(), height as usize);

    raster
        .as_mut_slice()
        .par_chunks_mut(width as usize)
        .zip(ys.par_iter())
        .try_for_each(|(row, &y)| {
            for (i, (count, &x)) in row.iter_mut().zip(&xs).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                *count = algorithm.escape(Complex::new(x, y), max_iterations);
            }

            Ok(())
        })?;

    Ok(raster)
}
