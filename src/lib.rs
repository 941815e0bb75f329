//! inkbadge - images to 1-bit bitmaps for e-ink badge firmware.
//!
//! Decodes an image, fits it onto a fixed profile resolution, dithers it to
//! black and white and emits the packed bitmap as a `.bin` file, Go source
//! and base64. This library exposes modules for integration testing.

pub mod emit;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
