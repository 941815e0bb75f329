//! Output encoding for the dithering pipeline.
//!
//! [`pack_bits`] turns a dithered canvas into a [`BitBuffer`]: one bit per
//! pixel, column-major, MSB first, black = 1.

mod bitmap;

pub use bitmap::{bit_index, pack_bits, packed_len, BitBuffer};
