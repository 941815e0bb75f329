//! One-bit-per-pixel packing in display scan order.
//!
//! The badge display refreshes column by column, top to bottom within each
//! column. Packed bits follow that order: pixel (x, y) of a `W`×`H` canvas
//! lands at bit `x * H + y`, most significant bit first within each byte.
//! Changing this mapping breaks every firmware image built against it.

use crate::canvas::Canvas;

/// Number of bytes needed for `width * height` one-bit pixels.
#[inline]
pub fn packed_len(width: usize, height: usize) -> usize {
    (width * height).div_ceil(8)
}

/// Bit position of pixel (`x`, `y`) in a column-major bitmap of the given
/// `height`.
#[inline]
pub const fn bit_index(x: usize, y: usize, height: usize) -> usize {
    x * height + y
}

/// Mask selecting bit `k` inside its byte, MSB first.
#[inline]
const fn bit_mask(k: usize) -> u8 {
    1 << (7 - k % 8)
}

/// A packed monochrome bitmap.
///
/// Set bits are black pixels. Padding bits past `width * height` are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    width: usize,
    height: usize,
}

impl BitBuffer {
    /// An all-white bitmap.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bytes: vec![0; packed_len(width, height)],
            width,
            height,
        }
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
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte length, always `ceil(width * height / 8)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether pixel (`x`, `y`) is black.
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        let k = bit_index(x, y, self.height);
        self.bytes[k / 8] & bit_mask(k) != 0
    }

    fn set_black(&mut self, x: usize, y: usize) {
        let k = bit_index(x, y, self.height);
        self.bytes[k / 8] |= bit_mask(k);
    }
}

/// Pack a dithered canvas into a [`BitBuffer`].
///
/// A pixel is black (bit set) when its red, green and blue channels sum to
/// zero; any other color packs as white.
pub fn pack_bits(canvas: &Canvas) -> BitBuffer {
    let (width, height) = canvas.dimensions();
    let mut bits = BitBuffer::new(width, height);

    // Outer loop over columns to walk bits sequentially.
    for x in 0..width {
        for y in 0..height {
            if canvas.get(x, y).channel_sum() == 0 {
                bits.set_black(x, y);
            }
        }
    }

    bits
}
