use super::Rgb;

/// Red channel coefficients, highest power first
const RED: [f32; 4] = [0.000_007_437_35, -0.002_849_64, 0.006_387_55, 255.0];
/// Green channel coefficients, highest power first
const GREEN: [f32; 4] = [0.0, 0.0, 0.5583, 55.743];
/// Blue channel coefficients, highest power first
const BLUE: [f32; 4] = [-0.000_031_610_7, 0.012_087_6, -0.026_826_9, 5.026];

#[inline]
fn cubic(coefficients: [f32; 4], x: f32) -> f32 {
    let [a, b, c, d] = coefficients;
    ((a * x + b) * x + c) * x + d
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(coefficients: [f32; 4], x: f32) -> u8 {
    libm::roundf(cubic(coefficients, x)).clamp(0.0, 255.0) as u8
}

/// Convert a temperature mode value to an RGB color
///
/// 0 is the warmest (amber) end of the curve, 255 the coolest. Each channel
/// is a cubic approximation clamped to 0-255.
pub fn value_to_temperature(value: u8) -> Rgb {
    let x = f32::from(value);
    Rgb {
        r: channel(RED, x),
        g: channel(GREEN, x),
        b: channel(BLUE, x),
    }
}
