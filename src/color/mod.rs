mod temperature;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use temperature::value_to_temperature;
pub use utils::{hsv2rgb, value_to_hue};

pub type Rgb = RGB8;
pub type Hsv = HSV;
