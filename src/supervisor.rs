//! Process supervisor - wires the channels and starts the three loops.
//!
//! ```ignore
//! static CHANNELS: LampChannels = LampChannels::new();
//!
//! let backend = OutputBackend::detect(open_strip());
//! let lamp = supervisor::spawn::<_, _, 64>(&LampConfig::default(), &CHANNELS, source, backend)?;
//! let state = lamp.join()?;
//! ```

use std::thread::{self, JoinHandle};

use log::{error, info};

use crate::LedBackend;
use crate::channel::Channel;
use crate::command::{CommandChannel, GestureChannel, GestureSender};
use crate::config::LampConfig;
use crate::error::LampError;
use crate::led_controller::{LampState, LedController};
use crate::main_controller::MainController;

/// Producer of classified gestures, such as a button driver
///
/// `run` owns its thread; returning from it closes the gesture channel and
/// shuts the lamp down.
pub trait GestureSource: Send + 'static {
    fn run(self, gestures: GestureSender<'static>);
}

/// The two channels connecting the loops
pub struct LampChannels {
    pub gestures: GestureChannel,
    pub commands: CommandChannel,
}

impl LampChannels {
    pub const fn new() -> Self {
        Self {
            gestures: GestureChannel::new(),
            commands: CommandChannel::new(),
        }
    }
}

impl Default for LampChannels {
    fn default() -> Self {
        Self::new()
    }
}

/// Closes a channel when dropped, so a panicking loop still shuts its consumer down
struct CloseOnDrop<'a, T, const SIZE: usize>(&'a Channel<T, SIZE>);

impl<T, const SIZE: usize> Drop for CloseOnDrop<'_, T, SIZE> {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// Handles of the running loops
pub struct Supervisor<const MAX_LEDS: usize> {
    source: JoinHandle<()>,
    main: JoinHandle<()>,
    led: JoinHandle<LampState<MAX_LEDS>>,
}

/// Start the gesture source, main controller and LED controller threads
///
/// Fails before anything is spawned if the LED controller rejects the
/// configuration.
pub fn spawn<S, B, const MAX_LEDS: usize>(
    config: &LampConfig,
    channels: &'static LampChannels,
    source: S,
    backend: B,
) -> Result<Supervisor<MAX_LEDS>, LampError>
where
    S: GestureSource,
    B: LedBackend + Send + 'static,
{
    let mut led_controller: LedController<B, MAX_LEDS> = LedController::new(backend, config)?;
    let main_controller = MainController::new(channels.commands.sender(), config);

    let led = thread::Builder::new()
        .name("led-controller".into())
        .spawn(move || {
            led_controller.run(channels.commands.receiver());
            led_controller.into_state()
        })?;

    let main = thread::Builder::new()
        .name("main-controller".into())
        .spawn(move || {
            let _close = CloseOnDrop(&channels.commands);
            main_controller.run(channels.gestures.receiver());
        })
        .inspect_err(|_| channels.commands.close())?;

    let source = thread::Builder::new()
        .name("gesture-source".into())
        .spawn(move || {
            let _close = CloseOnDrop(&channels.gestures);
            source.run(channels.gestures.sender());
        })
        .inspect_err(|_| channels.gestures.close())?;

    info!("supervisor: lamp started");
    Ok(Supervisor { source, main, led })
}

impl<const MAX_LEDS: usize> Supervisor<MAX_LEDS> {
    /// Wait for all loops to exit and return the final lamp state
    pub fn join(self) -> Result<LampState<MAX_LEDS>, LampError> {
        if self.source.join().is_err() {
            error!("supervisor: gesture source panicked");
        }
        if self.main.join().is_err() {
            error!("supervisor: main controller panicked");
        }
        self.led.join().map_err(|_| {
            error!("supervisor: led controller panicked");
            LampError::TaskPanicked("led-controller")
        })
    }
}
