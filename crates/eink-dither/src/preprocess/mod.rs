//! Canvas preprocessing ahead of dithering.
//!
//! Only geometric scaling lives here: [`resize_nearest`] fits a decoded
//! canvas onto the fixed target resolution of the display.

mod resize;

pub use resize::{nearest_source, resize_nearest};
