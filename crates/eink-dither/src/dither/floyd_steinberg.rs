//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::canvas::Canvas;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOutcome, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic error diffusion algorithm, distributing 100% of quantization
/// error to 4 neighboring pixels:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
///
/// Pixels are visited in raster order and the canvas is overwritten, so
/// [`Dither::dither`] always reports [`DitherOutcome::MutatedInPlace`].
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, canvas: &mut Canvas, palette: &Palette) -> DitherOutcome {
        dither_with_kernel(canvas, palette, &FLOYD_STEINBERG);
        DitherOutcome::MutatedInPlace
    }
}
