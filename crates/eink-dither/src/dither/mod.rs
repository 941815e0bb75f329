//! Error diffusion dithering onto a two-color palette.
//!
//! # Architecture
//!
//! Algorithms implement the [`Dither`] trait and report what they did with
//! the canvas through [`DitherOutcome`]. Callers normalize the outcome with
//! [`DitherOutcome::resolve`] and never have to guess whether the input was
//! modified or a new canvas was produced.
//!
//! # Example
//!
//! ```
//! use eink_dither::{Canvas, Dither, FloydSteinberg, Palette, Rgba16};
//!
//! let mut canvas = Canvas::filled(4, 4, Rgba16::opaque(0x8000, 0x8000, 0x8000));
//! let outcome = FloydSteinberg.dither(&mut canvas, &Palette::black_white());
//! let dithered = outcome.resolve(canvas);
//! assert_eq!(dithered.dimensions(), (4, 4));
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;

use crate::canvas::Canvas;
use crate::color::LinearRgb;
use crate::palette::Palette;

/// What a dithering pass did with the canvas it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherOutcome {
    /// The result is a new canvas; the input is untouched.
    Dithered(Canvas),
    /// The input canvas now holds the result.
    MutatedInPlace,
}

impl DitherOutcome {
    /// Normalize to the dithered canvas.
    ///
    /// `source` must be the canvas that was passed to the dithering pass.
    /// It is returned as the result for [`DitherOutcome::MutatedInPlace`]
    /// and dropped otherwise.
    pub fn resolve(self, source: Canvas) -> Canvas {
        match self {
            DitherOutcome::Dithered(canvas) => canvas,
            DitherOutcome::MutatedInPlace => source,
        }
    }
}

/// Trait for dithering algorithms.
///
/// Error diffusion works by:
/// 1. For each pixel, find the nearest palette color
/// 2. Compute the quantization error (desired - actual)
/// 3. Distribute that error to neighboring unvisited pixels
/// 4. Repeat, with accumulated error influencing future decisions
pub trait Dither {
    /// Dither `canvas` so that every pixel is one of the palette colors.
    fn dither(&self, canvas: &mut Canvas, palette: &Palette) -> DitherOutcome;

    /// Dither a copy of `canvas`, leaving the input untouched.
    fn dither_copy(&self, canvas: &Canvas, palette: &Palette) -> DitherOutcome {
        let mut copy = canvas.clone();
        let outcome = self.dither(&mut copy, palette);
        DitherOutcome::Dithered(outcome.resolve(copy))
    }
}

/// Error buffer for efficient error diffusion.
///
/// Manages a sliding window of error rows, storing only the rows that
/// the diffusion kernel can reach (determined by `max_dy`).
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Read accumulated error with `get_accumulated(x)`
///    b. After processing pixel, distribute error with `add_error(x, dy, error)`
///    c. After row complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Error rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a new error buffer tracking `row_depth` rows of `width` pixels.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Accumulated error for pixel `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a future pixel.
    ///
    /// `row_offset` 0 is the current row. Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Advance to the next row.
    ///
    /// Rotates the row buffer: the first row is discarded, subsequent rows
    /// shift forward, and a zeroed row is added at the end.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Error diffusion loop shared by all kernels.
///
/// Visits pixels in raster order (left-to-right, top-to-bottom), replaces
/// each with its nearest palette color and diffuses the quantization error
/// in linear RGB. The canvas is overwritten in place.
///
/// Accumulated values are left unbounded: saturated colors need error
/// well past `1.0` in one channel before white becomes the nearest entry.
pub(crate) fn dither_with_kernel(canvas: &mut Canvas, palette: &Palette, kernel: &Kernel) {
    let (width, height) = canvas.dimensions();
    let image: Vec<LinearRgb> = canvas.pixels().iter().map(|&p| LinearRgb::from(p)).collect();
    let pixels = canvas.pixels_mut();

    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;

            let accumulated = error_buf.get_accumulated(x);
            let pixel = LinearRgb::new(
                image[idx].r + accumulated[0],
                image[idx].g + accumulated[1],
                image[idx].b + accumulated[2],
            );

            let (nearest_idx, _dist) = palette.find_nearest(pixel);
            pixels[idx] = palette.color(nearest_idx);

            let nearest_linear = palette.linear(nearest_idx);
            let error = [
                pixel.r - nearest_linear.r,
                pixel.g - nearest_linear.g,
                pixel.b - nearest_linear.b,
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx >= 0 && (nx as usize) < width && y + (dy as usize) < height {
                    let w = weight as f32 / divisor;
                    error_buf.add_error(
                        nx as usize,
                        dy as usize,
                        [error[0] * w, error[1] * w, error[2] * w],
                    );
                }
            }
        }

        error_buf.advance_row();
    }
}
