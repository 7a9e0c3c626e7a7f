//! Packed RGBA colors and linear blending along path progress.

/// A packed 32-bit RGBA color.
///
/// Byte 0 (least significant) is red, byte 1 green, byte 2 blue, byte 3
/// alpha — the layout a little-endian RGBA byte stream expects. Every
/// constructor and blend forces the alpha channel to fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(u32);

/// Bit offset of the alpha channel.
const ALPHA_SHIFT: u32 = 24;
/// Opaque alpha in packed position.
const OPAQUE: u32 = 0xff << ALPHA_SHIFT;

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// An opaque color from its channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(OPAQUE | (blue as u32) << 16 | (green as u32) << 8 | red as u32)
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        self.0 as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Linear interpolation toward `other` by `progress` in `[0, 1]`.
    ///
    /// Each of the red/green/blue channels is interpolated independently in
    /// 8.8 fixed point, which keeps the identities exact:
    /// `c.blend(c, k) == c`, `a.blend(b, 0.0) == a`, `a.blend(b, 1.0) == b`.
    /// The result is always opaque.
    pub fn blend(self, other: Self, progress: f64) -> Self {
        let t = (progress.clamp(0.0, 1.0) * 256.0) as u32;
        let inv = 256 - t;
        let channel =
            |a: u8, b: u8| -> u8 { ((u32::from(a) * inv + u32::from(b) * t) >> 8) as u8 };
        Self::rgb(
            channel(self.red(), other.red()),
            channel(self.green(), other.green()),
            channel(self.blue(), other.blue()),
        )
    }

    /// The packed little-endian RGBA bytes.
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}
