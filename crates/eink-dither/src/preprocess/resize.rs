//! Nearest-neighbor canvas scaling.

use crate::canvas::Canvas;

/// Map a destination coordinate to the source coordinate whose pixel center
/// is nearest to the destination pixel center.
///
/// `src = floor((2 * dst + 1) * src_len / (2 * dst_len))`
#[inline]
pub fn nearest_source(dst: usize, src_len: usize, dst_len: usize) -> usize {
    ((2 * dst as u64 + 1) * src_len as u64 / (2 * dst_len as u64)) as usize
}

/// Scale `src` onto a new `width`×`height` canvas with nearest-neighbor
/// sampling.
///
/// Each destination pixel takes the color of a single source pixel; nothing
/// is blended. Both axes scale independently, up or down. The source is
/// composited `Over` an opaque black backdrop, so the result is fully opaque
/// even when the source carries alpha.
///
/// # Panics (debug only)
///
/// Debug-asserts that neither target dimension is zero.
pub fn resize_nearest(src: &Canvas, width: usize, height: usize) -> Canvas {
    debug_assert!(
        width > 0 && height > 0,
        "resize_nearest: degenerate target {width}x{height}"
    );

    let (src_w, src_h) = src.dimensions();
    let mut dst = Canvas::new(width, height);
    if src_w == 0 || src_h == 0 {
        return dst;
    }

    let columns: Vec<usize> = (0..width)
        .map(|x| nearest_source(x, src_w, width))
        .collect();

    for y in 0..height {
        let sy = nearest_source(y, src_h, height);
        let src_row = &src.pixels()[sy * src_w..(sy + 1) * src_w];
        let dst_row = &mut dst.pixels_mut()[y * width..(y + 1) * width];
        for (out, &sx) in dst_row.iter_mut().zip(&columns) {
            *out = src_row[sx].over_black();
        }
    }

    dst
}
