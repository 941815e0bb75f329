//! Two-color palette with nearest-color matching.
//!
//! Colors are stored both as [`Rgba16`] (what gets written back to the
//! canvas) and as precomputed [`LinearRgb`] (what the ditherer compares and
//! diffuses error against).

use super::error::PaletteError;
use crate::color::{LinearRgb, Rgba16};

/// Number of entries every palette holds.
pub const PALETTE_SIZE: usize = 2;

/// An ordered pair of quantization targets.
///
/// The order defines the palette indices reported by
/// [`find_nearest()`](Palette::find_nearest). The canonical palette is
/// [`Palette::black_white()`]: index 0 is black, index 1 is white.
///
/// # Example
///
/// ```
/// use eink_dither::{Palette, Rgba16};
///
/// let palette = Palette::black_white();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color(0), Rgba16::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Rgba16; PALETTE_SIZE],
    linear: [LinearRgb; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from exactly two distinct colors.
    ///
    /// Colors are forced opaque.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::WrongSize`] if `colors.len() != 2`
    /// - [`PaletteError::DuplicateColor`] if both entries are the same color
    pub fn new(colors: &[Rgba16]) -> Result<Self, PaletteError> {
        let colors: [Rgba16; PALETTE_SIZE] = colors
            .iter()
            .map(|c| Rgba16::opaque(c.r, c.g, c.b))
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|v: Vec<Rgba16>| PaletteError::WrongSize { len: v.len() })?;

        if colors[0] == colors[1] {
            return Err(PaletteError::DuplicateColor { index: 1 });
        }

        Ok(Self {
            linear: colors.map(LinearRgb::from),
            colors,
        })
    }

    /// The `{Black, White}` palette used for monochrome e-ink output.
    pub fn black_white() -> Self {
        let colors = [Rgba16::BLACK, Rgba16::WHITE];
        Self {
            linear: colors.map(LinearRgb::from),
            colors,
        }
    }

    /// Always [`PALETTE_SIZE`].
    #[inline]
    pub fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// A palette is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The color written to the canvas for palette index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 2`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgba16 {
        self.colors[idx]
    }

    /// Precomputed linear value of palette index `idx`.
    #[inline]
    pub fn linear(&self, idx: usize) -> LinearRgb {
        self.linear[idx]
    }

    /// Index of `color` in the palette, if it is an entry.
    pub fn index_of(&self, color: Rgba16) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Find the entry nearest to `pixel` by squared Euclidean distance in
    /// linear RGB.
    ///
    /// Ties go to the lower index.
    ///
    /// # Returns
    ///
    /// `(index, squared_distance)`.
    #[inline]
    pub fn find_nearest(&self, pixel: LinearRgb) -> (usize, f32) {
        let d0 = pixel.distance_sq(self.linear[0]);
        let d1 = pixel.distance_sq(self.linear[1]);
        if d1 < d0 {
            (1, d1)
        } else {
            (0, d0)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::black_white()
    }
}
