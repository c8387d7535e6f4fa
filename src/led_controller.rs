//! LED controller - owns the lamp state and renders it to the backend.

use std::thread;

use heapless::Vec;
use log::{debug, info, warn};

use crate::LedBackend;
use crate::channel::TryReceiveError;
use crate::color::{Rgb, value_to_hue, value_to_temperature};
use crate::command::{CommandReceiver, LedCommand};
use crate::config::{LampConfig, to_std};
use crate::error::LampError;
use crate::math8::scale_color;
use crate::mode::{LampMode, MODE_COUNT};

/// Lamp state, mutated only by the LED controller
///
/// `MAX_LEDS` is the frame buffer capacity.
#[derive(Debug, Clone)]
pub struct LampState<const MAX_LEDS: usize> {
    brightness: u8,
    values: [u8; MODE_COUNT],
    mode: LampMode,
    is_on: bool,
    last_frame: Vec<Rgb, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> LampState<MAX_LEDS> {
    /// Global dimmer (0-255)
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Value of the given mode (0-255)
    pub const fn value(&self, mode: LampMode) -> u8 {
        self.values[mode.index()]
    }

    pub const fn mode(&self) -> LampMode {
        self.mode
    }

    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Last unscaled frame passed to `fill`
    pub fn last_frame(&self) -> &[Rgb] {
        &self.last_frame
    }
}

/// Translates LED commands into frames for the backend
pub struct LedController<B: LedBackend, const MAX_LEDS: usize> {
    backend: B,
    led_count: usize,
    brightness_step: u8,
    intensity_step: u8,
    poll_interval: std::time::Duration,
    state: LampState<MAX_LEDS>,
}

impl<B: LedBackend, const MAX_LEDS: usize> LedController<B, MAX_LEDS> {
    /// Create the controller and render the initial state
    ///
    /// The lamp starts on, in temperature mode, at full brightness with all
    /// mode values at 0.
    pub fn new(backend: B, config: &LampConfig) -> Result<Self, LampError> {
        if config.led_count > MAX_LEDS {
            return Err(LampError::LedCountExceedsCapacity {
                count: config.led_count,
                capacity: MAX_LEDS,
            });
        }

        let mut last_frame = Vec::new();
        last_frame
            .resize(config.led_count, Rgb::default())
            .map_err(|()| LampError::LedCountExceedsCapacity {
                count: config.led_count,
                capacity: MAX_LEDS,
            })?;

        let mut controller = Self {
            backend,
            led_count: config.led_count,
            brightness_step: config.brightness_step,
            intensity_step: config.intensity_step,
            poll_interval: to_std(config.poll_interval),
            state: LampState {
                brightness: 255,
                values: [0; MODE_COUNT],
                mode: LampMode::Temperature,
                is_on: true,
                last_frame,
            },
        };
        controller.render()?;

        Ok(controller)
    }

    pub const fn state(&self) -> &LampState<MAX_LEDS> {
        &self.state
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub fn into_state(self) -> LampState<MAX_LEDS> {
        self.state
    }

    /// Decode and apply a command wire code
    pub fn on_raw_command(&mut self, raw: u8) -> Result<(), LampError> {
        let command = LedCommand::try_from(raw)?;
        self.on_command(command)
    }

    /// Apply a command to the lamp state
    pub fn on_command(&mut self, command: LedCommand) -> Result<(), LampError> {
        debug!("led controller: got {:?}", command);
        match command {
            LedCommand::SwitchOff => {
                if self.state.is_on {
                    self.backend.off(self.led_count);
                    self.state.is_on = false;
                }
                Ok(())
            }
            LedCommand::SwitchOn => {
                if !self.state.is_on {
                    self.state.is_on = true;
                    let frame = self.state.last_frame.clone();
                    self.fill(&frame)?;
                }
                Ok(())
            }
            LedCommand::SetMode(mode) => {
                self.state.mode = mode;
                self.render()
            }
            LedCommand::BrightnessUp => {
                self.state.brightness = self.state.brightness.saturating_add(self.brightness_step);
                debug!("led controller: brightness {}", self.state.brightness);
                self.render()
            }
            LedCommand::BrightnessDown => {
                self.state.brightness = self.state.brightness.saturating_sub(self.brightness_step);
                debug!("led controller: brightness {}", self.state.brightness);
                self.render()
            }
            LedCommand::IntensityUp => {
                let value = &mut self.state.values[self.state.mode.index()];
                *value = value.saturating_add(self.intensity_step);
                debug!("led controller: value {}", *value);
                self.render()
            }
            LedCommand::IntensityDown => {
                let value = &mut self.state.values[self.state.mode.index()];
                *value = value.saturating_sub(self.intensity_step);
                debug!("led controller: value {}", *value);
                self.render()
            }
        }
    }

    /// Render the current mode and its value onto the whole strip
    ///
    /// Dynamic color and effects modes do not render yet; the strip keeps
    /// its previous frame.
    fn render(&mut self) -> Result<(), LampError> {
        let value = self.state.value(self.state.mode);
        let color = match self.state.mode {
            LampMode::Temperature => value_to_temperature(value),
            LampMode::Color => value_to_hue(value),
            LampMode::DynamicColor | LampMode::Effects => return Ok(()),
        };
        self.fill_color(color)
    }

    /// Fill the whole strip with a single color
    pub fn fill_color(&mut self, color: Rgb) -> Result<(), LampError> {
        let frame: Vec<Rgb, MAX_LEDS> = core::iter::repeat_n(color, self.led_count).collect();
        self.fill(&frame)
    }

    /// Show a frame on the strip
    ///
    /// The frame must have exactly one color per LED. It is stored unscaled
    /// as the last frame and written scaled by the global brightness,
    /// whether the lamp is on or off.
    pub fn fill(&mut self, frame: &[Rgb]) -> Result<(), LampError> {
        if frame.len() != self.led_count {
            return Err(LampError::InvalidFrameSize {
                expected: self.led_count,
                actual: frame.len(),
            });
        }

        self.state.last_frame.clear();
        // Length equals led_count, which fits the buffer
        let _ = self.state.last_frame.extend_from_slice(frame);

        let brightness = self.state.brightness;
        let scaled: Vec<Rgb, MAX_LEDS> = frame
            .iter()
            .map(|color| scale_color(*color, brightness))
            .collect();
        self.backend.write(&scaled);

        Ok(())
    }

    /// Poll the command channel until it is closed and drained
    ///
    /// Failures of a single command are logged and never stop the loop.
    pub fn run(&mut self, commands: CommandReceiver<'_>) {
        info!("led controller: running");
        loop {
            match commands.try_receive() {
                Ok(raw) => {
                    if let Err(e) = self.on_raw_command(raw) {
                        warn!("led controller: {}", e);
                    }
                }
                Err(TryReceiveError::Empty) => thread::sleep(self.poll_interval),
                Err(TryReceiveError::Closed) => break,
            }
        }
        info!("led controller: command channel closed, stopping");
    }
}
