//! Image decoding into a 16-bit RGBA canvas.
//!
//! The container format is detected from the stream's magic bytes; file
//! extensions are ignored. PNG, JPEG, BMP and WebP are supported.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use eink_dither::{Canvas, Rgba16};
use image::{DynamicImage, ImageReader};

use crate::error::ConvertError;

/// Decode the image file at `path`.
pub fn decode_file(path: &Path) -> Result<Canvas, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    decode_reader(BufReader::new(file))
}

/// Decode an in-memory encoded image.
pub fn decode_bytes(bytes: &[u8]) -> Result<Canvas, ConvertError> {
    decode_reader(Cursor::new(bytes))
}

fn decode_reader<R: BufRead + Seek>(reader: R) -> Result<Canvas, ConvertError> {
    let reader = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| ConvertError::Decode(e.to_string()))?;

    let format = reader.format().ok_or(ConvertError::UnknownFormat)?;
    let image = reader
        .decode()
        .map_err(|e| ConvertError::Decode(e.to_string()))?;

    tracing::debug!(
        ?format,
        width = image.width(),
        height = image.height(),
        "Decoded source image"
    );

    to_canvas(image)
}

/// Widen a decoded image to 16 bits per channel.
pub fn to_canvas(image: DynamicImage) -> Result<Canvas, ConvertError> {
    let rgba = image.into_rgba16();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    let pixels = rgba
        .pixels()
        .map(|px| {
            let [r, g, b, a] = px.0;
            Rgba16::new(r, g, b, a)
        })
        .collect();

    Canvas::from_pixels(width, height, pixels)
        .ok_or_else(|| ConvertError::Decode(format!("pixel data does not fill {width}x{height}")))
}
