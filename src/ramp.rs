//! Repeating command sender used while a button is held.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use embassy_time::Duration;
use log::{debug, error, warn};

use crate::channel::TrySendError;
use crate::command::{CommandSender, LedCommand};
use crate::config::to_std;
use crate::error::LampError;

/// A running ramp: one background thread sending the same command every period
///
/// The liveness flag is set before the thread starts, so a ramp stopped
/// right after it was started never outlives [`Ramp::stop`].
pub(crate) struct Ramp {
    command: LedCommand,
    active: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Ramp {
    /// Spawn the ramp thread. The first command is sent immediately.
    pub(crate) fn start(
        command: LedCommand,
        commands: CommandSender<'static>,
        period: Duration,
    ) -> Result<Self, LampError> {
        let active = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&active);
        let period = to_std(period);

        let handle = thread::Builder::new()
            .name("ramp".into())
            .spawn(move || {
                while flag.load(Ordering::Acquire) {
                    match commands.try_send(command.as_raw()) {
                        Ok(()) => debug!("ramp: sent {:?}", command),
                        Err(TrySendError::Full(_)) => {
                            warn!("ramp: command channel full, dropping {:?}", command);
                        }
                        Err(TrySendError::Closed(_)) => {
                            debug!("ramp: command channel closed");
                            return;
                        }
                    }

                    // Parked rather than slept so `stop` can wake us early
                    let deadline = Instant::now() + period;
                    while flag.load(Ordering::Acquire) {
                        let now = Instant::now();
                        if now >= deadline {
                            break;
                        }
                        thread::park_timeout(deadline - now);
                    }
                }
            })?;

        Ok(Self {
            command,
            active,
            handle,
        })
    }

    pub(crate) const fn command(&self) -> LedCommand {
        self.command
    }

    /// Clear the liveness flag and wait for the thread to exit.
    ///
    /// No command of this ramp is sent after `stop` returns.
    pub(crate) fn stop(self) {
        self.active.store(false, Ordering::Release);
        self.handle.thread().unpark();
        if self.handle.join().is_err() {
            error!("ramp: {:?} task panicked", self.command);
        }
    }
}
