//! Image → bitmap pipeline: decode, resize, dither, pack.

pub mod decode;

pub use decode::{decode_bytes, decode_file, to_canvas};

use eink_dither::{BitBuffer, Canvas, EinkDitherer, Palette};

use crate::models::ImageProfile;

/// Resize `source` to the profile's dimensions, dither it to black and
/// white and pack it in display scan order.
pub fn image_to_bits(source: &Canvas, profile: ImageProfile) -> BitBuffer {
    let bits = EinkDitherer::new(Palette::black_white())
        .resize(profile.width(), profile.height())
        .render(source);

    tracing::debug!(
        profile = %profile,
        src_width = source.width(),
        src_height = source.height(),
        bytes = bits.len(),
        "Packed bitmap"
    );

    bits
}
