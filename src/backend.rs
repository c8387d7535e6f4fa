//! LED output backends.
//!
//! The LED controller writes finished frames to a [`LedBackend`]. Real
//! strips are reached through any `smart_leds::SmartLedsWrite` driver; when
//! no strip is attached, frames go to the log instead.

use core::fmt;

use log::{info, warn};
use smart_leds::SmartLedsWrite;

use crate::LedBackend;
use crate::color::Rgb;

/// Backend that logs every frame instead of driving hardware
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBackend;

impl LedBackend for LogBackend {
    fn write(&mut self, colors: &[Rgb]) {
        info!("led backend: out {:?}", colors);
    }

    fn off(&mut self, count: usize) {
        info!("led backend: off ({} leds)", count);
    }
}

/// Backend driving a physical strip through a `smart-leds` driver
pub struct SmartLedsBackend<W> {
    writer: W,
}

impl<W> SmartLedsBackend<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LedBackend for SmartLedsBackend<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(e) = self.writer.write(colors.iter().copied()) {
            warn!("led backend: write failed: {:?}", e);
        }
    }

    fn off(&mut self, count: usize) {
        let black = core::iter::repeat_n(Rgb::default(), count);
        if let Err(e) = self.writer.write(black) {
            warn!("led backend: off failed: {:?}", e);
        }
    }
}

/// Hardware backend with a logging fallback
pub enum OutputBackend<W> {
    Hardware(SmartLedsBackend<W>),
    Log(LogBackend),
}

impl<W> OutputBackend<W> {
    /// Pick the hardware driver if one was found, the log backend otherwise.
    pub fn detect(hardware: Option<W>) -> Self {
        match hardware {
            Some(writer) => Self::Hardware(SmartLedsBackend::new(writer)),
            None => {
                info!("led backend: no strip attached, logging frames");
                Self::Log(LogBackend)
            }
        }
    }

    pub const fn is_hardware(&self) -> bool {
        matches!(self, Self::Hardware(_))
    }
}

impl<W> LedBackend for OutputBackend<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb]) {
        match self {
            Self::Hardware(backend) => backend.write(colors),
            Self::Log(backend) => backend.write(colors),
        }
    }

    fn off(&mut self, count: usize) {
        match self {
            Self::Hardware(backend) => backend.off(count),
            Self::Log(backend) => backend.off(count),
        }
    }
}
