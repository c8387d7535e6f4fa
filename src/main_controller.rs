//! Main controller - turns button gestures into lamp commands.

use std::thread;

use log::{debug, info, warn};

use crate::channel::{TryReceiveError, TrySendError};
use crate::command::{CommandSender, GestureReceiver, LedCommand};
use crate::config::{LampConfig, to_std};
use crate::error::LampError;
use crate::gesture::GestureEvent;
use crate::mode::LampMode;
use crate::ramp::Ramp;

/// Decides what each gesture does and drives held-button ramps
///
/// Ramps follow a stop-before-start policy: starting a ramp while another
/// runs stops and joins the old one first, so at most one ramp thread
/// exists at any time.
pub struct MainController {
    commands: CommandSender<'static>,
    config: LampConfig,
    mode: LampMode,
    ramp: Option<Ramp>,
}

impl MainController {
    pub fn new(commands: CommandSender<'static>, config: &LampConfig) -> Self {
        Self {
            commands,
            config: config.clone(),
            mode: LampMode::default(),
            ramp: None,
        }
    }

    /// Currently selected mode
    pub const fn mode(&self) -> LampMode {
        self.mode
    }

    /// Command repeated by the running ramp, if any
    pub fn ramp_command(&self) -> Option<LedCommand> {
        self.ramp.as_ref().map(Ramp::command)
    }

    pub const fn is_ramping(&self) -> bool {
        self.ramp.is_some()
    }

    /// Decode and handle a gesture wire code
    pub fn on_raw_gesture(&mut self, raw: u8) -> Result<(), LampError> {
        let gesture = GestureEvent::try_from(raw)?;
        self.on_gesture(gesture)
    }

    /// Handle a single gesture
    pub fn on_gesture(&mut self, gesture: GestureEvent) -> Result<(), LampError> {
        debug!("main controller: got {:?}", gesture);
        match gesture {
            GestureEvent::LeftClick => self.select_mode(self.mode.predecessor()),
            GestureEvent::RightClick => self.select_mode(self.mode.successor()),
            GestureEvent::LeftHoldStart => self.start_ramp(LedCommand::BrightnessDown)?,
            GestureEvent::RightHoldStart => self.start_ramp(LedCommand::BrightnessUp)?,
            GestureEvent::LeftClickHold => self.start_ramp(LedCommand::IntensityDown)?,
            GestureEvent::RightClickHold => self.start_ramp(LedCommand::IntensityUp)?,
            GestureEvent::LeftHoldEnd | GestureEvent::RightHoldEnd => self.stop_ramp(),
            GestureEvent::LeftSwipe | GestureEvent::RightSwipe => {
                // Reserved
            }
        }
        Ok(())
    }

    fn select_mode(&mut self, mode: LampMode) {
        self.mode = mode;
        info!("main controller: mode {}", mode.as_str());
        if self.config.forward_mode_changes {
            self.send(LedCommand::SetMode(mode));
        }
    }

    fn send(&self, command: LedCommand) {
        match self.commands.try_send(command.as_raw()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!("main controller: command channel full, dropping {:?}", command);
            }
            Err(TrySendError::Closed(_)) => {
                warn!("main controller: command channel closed, dropping {:?}", command);
            }
        }
    }

    fn start_ramp(&mut self, command: LedCommand) -> Result<(), LampError> {
        self.stop_ramp();
        self.ramp = Some(Ramp::start(
            command,
            self.commands,
            self.config.ramp_period,
        )?);
        Ok(())
    }

    /// Stop the running ramp and wait until it has exited. No-op without one.
    pub fn stop_ramp(&mut self) {
        if let Some(ramp) = self.ramp.take() {
            ramp.stop();
        }
    }

    /// Poll the gesture channel until it is closed and drained
    ///
    /// On exit any ramp is stopped and the command channel is closed, which
    /// in turn stops the LED controller.
    pub fn run(mut self, gestures: GestureReceiver<'_>) {
        info!("main controller: running");
        let poll_interval = to_std(self.config.poll_interval);
        loop {
            match gestures.try_receive() {
                Ok(raw) => {
                    if let Err(e) = self.on_raw_gesture(raw) {
                        warn!("main controller: {}", e);
                    }
                }
                Err(TryReceiveError::Empty) => thread::sleep(poll_interval),
                Err(TryReceiveError::Closed) => break,
            }
        }
        info!("main controller: gesture channel closed, stopping");
        self.stop_ramp();
        self.commands.close();
    }
}

impl Drop for MainController {
    fn drop(&mut self) {
        self.stop_ramp();
    }
}
