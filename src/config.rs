use embassy_time::Duration;

/// Default number of LEDs on the strip
pub const DEFAULT_LED_COUNT: usize = 30;

/// Default period between two commands of a ramp
pub const DEFAULT_RAMP_PERIOD: Duration = Duration::from_millis(50);

/// Default brightness change per command
pub const DEFAULT_BRIGHTNESS_STEP: u8 = 5;

/// Default mode value change per command
pub const DEFAULT_INTENSITY_STEP: u8 = 5;

/// Default pause of a poll loop when its channel is empty
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Configuration for the lamp control loops
#[derive(Debug, Clone)]
pub struct LampConfig {
    /// Number of LEDs driven, must not exceed the frame capacity
    pub led_count: usize,
    /// Period of repeated commands while a button is held
    pub ramp_period: Duration,
    pub brightness_step: u8,
    pub intensity_step: u8,
    /// Sleep between polls of an empty channel
    pub poll_interval: Duration,
    /// Send `SetMode` to the LED controller on mode clicks
    pub forward_mode_changes: bool,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            ramp_period: DEFAULT_RAMP_PERIOD,
            brightness_step: DEFAULT_BRIGHTNESS_STEP,
            intensity_step: DEFAULT_INTENSITY_STEP,
            poll_interval: DEFAULT_POLL_INTERVAL,
            forward_mode_changes: true,
        }
    }
}

/// Convert a configured duration for use with `std::thread`
pub(crate) fn to_std(duration: Duration) -> std::time::Duration {
    std::time::Duration::from_micros(duration.as_micros())
}
