//! 16-bit-per-channel RGBA pixel.

/// One canvas pixel with four 16-bit channels (0..=65535).
///
/// Color channels are sRGB encoded and not premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(u16::MAX, u16::MAX, u16::MAX);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, u16::MAX)
    }

    /// Widen 8-bit channels by bit replication (0xAB -> 0xABAB).
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            (r as u16) * 257,
            (g as u16) * 257,
            (b as u16) * 257,
            (a as u16) * 257,
        )
    }

    /// Sum of the three color channels.
    ///
    /// Widened to `u32` so three full channels cannot overflow.
    #[inline]
    pub fn channel_sum(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    /// Composite this pixel over an opaque black backdrop.
    ///
    /// The result carries the color premultiplied by alpha and is fully
    /// opaque. Opaque pixels come back unchanged.
    #[inline]
    pub fn over_black(self) -> Self {
        if self.a == u16::MAX {
            return self;
        }
        let a = self.a as u32;
        let scale = |c: u16| ((c as u32 * a + 0x7fff) / 0xffff) as u16;
        Self::opaque(scale(self.r), scale(self.g), scale(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_replicates_bits() {
        let px = Rgba16::from_u8(0xff, 0x80, 0x00, 0xff);
        assert_eq!(px, Rgba16::new(0xffff, 0x8080, 0x0000, 0xffff));
    }

    #[test]
    fn test_channel_sum_does_not_overflow() {
        assert_eq!(Rgba16::WHITE.channel_sum(), 3 * 65535);
        assert_eq!(Rgba16::BLACK.channel_sum(), 0);
    }

    #[test]
    fn test_over_black_keeps_opaque_pixels() {
        let px = Rgba16::opaque(100, 200, 300);
        assert_eq!(px.over_black(), px);
    }

    #[test]
    fn test_over_black_transparent_becomes_black() {
        assert_eq!(Rgba16::TRANSPARENT.over_black(), Rgba16::BLACK);
        assert_eq!(
            Rgba16::new(u16::MAX, u16::MAX, u16::MAX, 0).over_black(),
            Rgba16::BLACK
        );
    }

    #[test]
    fn test_over_black_half_alpha_halves_color() {
        let px = Rgba16::new(u16::MAX, 0, 0, 0x8000).over_black();
        assert_eq!(px.a, u16::MAX);
        assert_eq!(px.r, 0x8000);
        assert_eq!(px.g, 0);
    }
}
