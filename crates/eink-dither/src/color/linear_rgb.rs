//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Error diffusion and nearest-color distance are computed here.

use super::lut::channel_to_linear;
use super::rgba16::Rgba16;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but intermediate values
/// carrying accumulated dither error may leave that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance to another color.
    #[inline]
    pub fn distance_sq(self, other: LinearRgb) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }
}

impl From<Rgba16> for LinearRgb {
    /// Gamma-decode the color channels. Alpha is ignored; canvases are
    /// opaque by the time they reach the ditherer.
    fn from(px: Rgba16) -> Self {
        Self {
            r: channel_to_linear(px.r),
            g: channel_to_linear(px.g),
            b: channel_to_linear(px.b),
        }
    }
}
