//! Palette type and validation errors.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, PALETTE_SIZE};
