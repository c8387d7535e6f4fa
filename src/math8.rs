use crate::color::Rgb;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math; `scale8(v, 255) == v` and `scale8(v, 0) == 0`.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale every channel of a color by a factor (0-255 = 0.0-1.0)
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}
