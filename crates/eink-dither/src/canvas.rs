//! Pixel canvas shared by every pipeline stage.

use crate::color::Rgba16;

/// A rectangular grid of [`Rgba16`] pixels stored in row-major order.
///
/// The canvas is created by the decoder, replaced by the resizer's output,
/// mutated in place by the ditherer and finally read by the bit packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba16>,
}

impl Canvas {
    /// Create a canvas filled with a single color.
    pub fn filled(width: usize, height: usize, color: Rgba16) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Create a fully transparent canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgba16::TRANSPARENT)
    }

    /// Wrap existing row-major pixels.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba16>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba16 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgba16) {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = color;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba16] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba16] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let canvas = Canvas::new(3, 2);
        assert_eq!(canvas.dimensions(), (3, 2));
        assert_eq!(canvas.pixels().len(), 6);
        assert!(canvas.pixels().iter().all(|&p| p == Rgba16::TRANSPARENT));
    }

    #[test]
    fn test_get_set_row_major() {
        let mut canvas = Canvas::filled(3, 2, Rgba16::WHITE);
        canvas.set(2, 1, Rgba16::BLACK);
        assert_eq!(canvas.get(2, 1), Rgba16::BLACK);
        assert_eq!(canvas.pixels()[5], Rgba16::BLACK);
        assert_eq!(canvas.get(1, 1), Rgba16::WHITE);
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(Canvas::from_pixels(2, 2, vec![Rgba16::BLACK; 3]).is_none());
        assert!(Canvas::from_pixels(2, 2, vec![Rgba16::BLACK; 4]).is_some());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let canvas = Canvas::new(2, 2);
        let _ = canvas.get(2, 0);
    }
}
