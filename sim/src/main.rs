//! Terminal simulator for myrtio-lamp
//!
//! Reads gestures from stdin, one per line, and runs the full controller
//! stack. When stdout is a terminal the strip is drawn as colored blocks,
//! otherwise frames are logged.
//!
//! Input lines:
//! - a gesture name, e.g. `right_click`, `left_hold_start`, `left_hold_end`
//! - a raw gesture code, e.g. `3`
//! - `on` / `off` to send power commands straight to the LED controller.
//!   This is a simulator-only debug path: the buttons have no power gesture,
//!   so these lines bypass the main controller and write the command channel
//!   directly.
//! - `quit` (or end of input) to shut down

use std::fmt::Write as _;
use std::io::{self, BufRead, IsTerminal, Write as _};

use log::{info, warn};
use myrtio_lamp::{
    CommandSender, GestureEvent, GestureSender, GestureSource, LampChannels, LampConfig,
    LampError, LedCommand, OutputBackend, Rgb, supervisor,
};
use smart_leds::SmartLedsWrite;

/// Maximum number of LEDs the controller supports
const MAX_LEDS: usize = 64;

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 24;

static CHANNELS: LampChannels = LampChannels::new();

/// Strip drawn with ANSI true-color blocks
#[derive(Default)]
struct TerminalStrip;

impl SmartLedsWrite for TerminalStrip {
    type Error = io::Error;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut line = String::new();
        for color in iterator {
            let color: Rgb = color.into();
            let _ = write!(line, "\x1b[48;2;{};{};{}m  ", color.r, color.g, color.b);
        }
        line.push_str("\x1b[0m\n");

        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.flush()
    }
}

/// Gesture source reading stdin line by line
///
/// Also holds a command sender for the `on`/`off` debug inputs.
struct StdinSource {
    commands: CommandSender<'static>,
}

impl StdinSource {
    fn parse_gesture(input: &str) -> Option<u8> {
        GestureEvent::parse_from_str(input)
            .map(GestureEvent::as_raw)
            .or_else(|| input.parse().ok())
    }
}

impl GestureSource for StdinSource {
    fn run(self, gestures: GestureSender<'static>) {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let input = line.trim();

            let sent = match input {
                "" => continue,
                "quit" => break,
                "on" => self.commands.try_send(LedCommand::SwitchOn.as_raw()).is_ok(),
                "off" => self.commands.try_send(LedCommand::SwitchOff.as_raw()).is_ok(),
                _ => match Self::parse_gesture(input) {
                    Some(raw) => gestures.try_send(raw).is_ok(),
                    None => {
                        warn!("sim: unknown input {:?}", input);
                        continue;
                    }
                },
            };
            if !sent {
                warn!("sim: channel full, dropped {:?}", input);
            }
        }
        info!("sim: input closed");
    }
}

fn main() -> Result<(), LampError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LampConfig {
        led_count: LED_COUNT,
        ..LampConfig::default()
    };
    let strip = io::stdout().is_terminal().then(TerminalStrip::default);
    let backend = OutputBackend::detect(strip);
    let source = StdinSource {
        commands: CHANNELS.commands.sender(),
    };

    let lamp = supervisor::spawn::<_, _, MAX_LEDS>(&config, &CHANNELS, source, backend)?;
    let state = lamp.join()?;

    info!(
        "sim: final state on={} mode={} brightness={} value={}",
        state.is_on(),
        state.mode().as_str(),
        state.brightness(),
        state.value(state.mode())
    );
    Ok(())
}
