#![allow(clippy::needless_range_loop)]

//! eink-dither: two-color dithering and bit packing for monochrome e-ink
//! displays
//!
//! # Quick Start
//!
//! The [`EinkDitherer`] builder is the primary entry point:
//!
//! ```
//! use eink_dither::{Canvas, EinkDitherer, Palette, Rgba16};
//!
//! let source = Canvas::filled(50, 50, Rgba16::BLACK);
//! let bits = EinkDitherer::new(Palette::black_white())
//!     .resize(120, 128)
//!     .render(&source);
//!
//! assert_eq!(bits.len(), 1920);
//! assert!(bits.as_bytes().iter().all(|&b| b == 0xff));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Canvas (any size, Rgba16, may carry alpha)
//!     |
//!     v
//! resize_nearest           (center sampling, Over onto opaque black)
//!     |
//!     v
//! FloydSteinberg           (raster order, error in linear RGB,
//!     |                     result reported as DitherOutcome)
//!     v
//! pack_bits                (column-major, MSB first, black = 1)
//!     |
//!     v
//! BitBuffer                (ceil(W*H/8) bytes)
//! ```
//!
//! ## Why Error Diffusion Stays in Linear RGB
//!
//! Quantization error represents the difference between the desired
//! light output and the chosen palette color's light output. Light adds
//! linearly, so this difference is computed and propagated in linear RGB.
//! Diffusing in sRGB would render mid-tones far too bright: sRGB 50% gray
//! is only about 21% linear light.

pub mod api;
pub mod canvas;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::EinkDitherer;
pub use canvas::Canvas;
pub use color::{LinearRgb, Rgba16};
pub use dither::{Dither, DitherOutcome, FloydSteinberg};
pub use output::{bit_index, pack_bits, packed_len, BitBuffer};
pub use palette::{Palette, PaletteError};
pub use preprocess::resize_nearest;
