//! EinkDitherer builder -- the primary entry point for the crate.
//!
//! [`EinkDitherer`] wraps resize → dither → pack behind a small fluent
//! configuration.

use crate::canvas::Canvas;
use crate::dither::{Dither, FloydSteinberg};
use crate::output::{pack_bits, BitBuffer};
use crate::palette::Palette;
use crate::preprocess::resize_nearest;

/// High-level converter from an arbitrary canvas to a packed e-ink bitmap.
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self`, so one converter can be
///   reused across images
///
/// # Example
///
/// ```
/// use eink_dither::{Canvas, EinkDitherer, Palette, Rgba16};
///
/// let source = Canvas::filled(50, 50, Rgba16::WHITE);
/// let bits = EinkDitherer::new(Palette::black_white())
///     .resize(120, 128)
///     .render(&source);
///
/// assert_eq!(bits.len(), 1920);
/// assert!(bits.as_bytes().iter().all(|&b| b == 0));
/// ```
#[derive(Debug, Clone)]
pub struct EinkDitherer {
    palette: Palette,
    target: Option<(usize, usize)>,
}

impl EinkDitherer {
    /// Create a new converter with the given palette.
    ///
    /// Without [`resize()`](Self::resize) the source dimensions are kept.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            target: None,
        }
    }

    /// Set target dimensions for nearest-neighbor resize.
    #[inline]
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        self.target = Some((width, height));
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resize (if configured) and dither `source` with Floyd-Steinberg.
    ///
    /// Every pixel of the returned canvas is one of the palette colors.
    pub fn dither(&self, source: &Canvas) -> Canvas {
        let mut canvas = match self.target {
            Some((width, height)) => resize_nearest(source, width, height),
            None => resize_nearest(source, source.width(), source.height()),
        };
        let outcome = FloydSteinberg.dither(&mut canvas, &self.palette);
        outcome.resolve(canvas)
    }

    /// Resize, dither and pack `source` into a column-major bitmap.
    pub fn render(&self, source: &Canvas) -> BitBuffer {
        pack_bits(&self.dither(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba16;

    #[test]
    fn test_render_profile_dimensions() {
        let source = Canvas::filled(10, 10, Rgba16::opaque(0x4000, 0x4000, 0x4000));
        let bits = EinkDitherer::new(Palette::black_white())
            .resize(120, 128)
            .render(&source);
        assert_eq!((bits.width(), bits.height()), (120, 128));
        assert_eq!(bits.len(), 1920);
    }

    #[test]
    fn test_render_splash_dimensions() {
        let source = Canvas::filled(10, 10, Rgba16::WHITE);
        let bits = EinkDitherer::new(Palette::black_white())
            .resize(246, 128)
            .render(&source);
        assert_eq!(bits.len(), 3936);
    }

    #[test]
    fn test_dither_without_resize_keeps_size() {
        let source = Canvas::filled(7, 3, Rgba16::opaque(0x8000, 0x8000, 0x8000));
        let result = EinkDitherer::new(Palette::black_white()).dither(&source);
        assert_eq!(result.dimensions(), (7, 3));
    }

    #[test]
    fn test_dither_transparent_source_is_black() {
        // Transparent pixels composite over the black backdrop.
        let source = Canvas::new(4, 4);
        let result = EinkDitherer::new(Palette::black_white())
            .resize(8, 8)
            .dither(&source);
        assert!(result.pixels().iter().all(|&p| p == Rgba16::BLACK));
    }

    #[test]
    fn test_builder_is_reusable() {
        let ditherer = EinkDitherer::new(Palette::black_white())
            .resize(16, 16);
        let a = ditherer.render(&Canvas::filled(3, 3, Rgba16::WHITE));
        let b = ditherer.render(&Canvas::filled(3, 3, Rgba16::BLACK));
        assert!(a.as_bytes().iter().all(|&x| x == 0x00));
        assert!(b.as_bytes().iter().all(|&x| x == 0xff));
    }
}
