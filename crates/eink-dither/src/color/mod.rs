//! Color types and conversion utilities
//!
//! - [`Rgba16`]: 16-bit sRGB pixel stored on a [`Canvas`](crate::Canvas)
//! - [`LinearRgb`]: linear light intensity, used by the ditherer for error
//!   accumulation and nearest-color matching

mod linear_rgb;
mod lut;
mod rgba16;

pub use linear_rgb::LinearRgb;
pub use lut::channel_to_linear;
pub use rgba16::Rgba16;
