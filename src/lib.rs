//! Two-button lamp controller.
//!
//! Three loops talk over bounded channels: a gesture source feeds the
//! [`MainController`], which sends [`LedCommand`]s to the [`LedController`],
//! which renders frames to a [`LedBackend`].

pub mod backend;
pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod gesture;
pub mod led_controller;
pub mod main_controller;
pub mod math8;
pub mod mode;
mod ramp;
pub mod supervisor;

pub use backend::{LogBackend, OutputBackend, SmartLedsBackend};
pub use command::{
    CommandChannel, CommandReceiver, CommandSender, GestureChannel, GestureReceiver,
    GestureSender, LedCommand,
};
pub use config::LampConfig;
pub use error::LampError;
pub use gesture::GestureEvent;
pub use led_controller::{LampState, LedController};
pub use main_controller::MainController;
pub use mode::LampMode;
pub use supervisor::{GestureSource, LampChannels, Supervisor};

pub use color::{Hsv, Rgb};
pub use embassy_time::Duration;

/// Abstract LED output trait
///
/// Implement this trait to support different hardware platforms.
/// The LED controller is generic over this trait.
pub trait LedBackend {
    /// Write colors to the LED strip, one per LED
    fn write(&mut self, colors: &[Rgb]);

    /// Turn the first `count` LEDs off
    fn off(&mut self, count: usize);
}
