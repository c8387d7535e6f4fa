pub use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Map a mode value onto the hue wheel at full saturation and value.
///
/// The 0-255 value is used directly as the hue, matching the 0-255 circle
/// of `smart_leds::hsv::Hsv`.
#[inline]
pub fn value_to_hue(value: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue: value,
        sat: 255,
        val: 255,
    })
}
