//! LED commands and the channels that carry them.

use crate::channel::{Channel, Receiver, Sender};
use crate::error::LampError;
use crate::mode::LampMode;

const COMMAND_ID_SWITCH_ON: u8 = 0;
const COMMAND_ID_SWITCH_OFF: u8 = 1;
const COMMAND_ID_MODE_TEMPERATURE: u8 = 2;
const COMMAND_ID_MODE_COLOR: u8 = 3;
const COMMAND_ID_MODE_DYNAMIC_COLOR: u8 = 4;
const COMMAND_ID_MODE_EFFECTS: u8 = 5;
const COMMAND_ID_BRIGHTNESS_UP: u8 = 6;
const COMMAND_ID_BRIGHTNESS_DOWN: u8 = 7;
const COMMAND_ID_INTENSITY_UP: u8 = 8;
const COMMAND_ID_INTENSITY_DOWN: u8 = 9;

/// Commands consumed by the LED controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    /// Restore the last frame if the strip is off. No-op while on.
    SwitchOn,
    /// Blank the strip if it is on. No-op while off.
    SwitchOff,
    /// Switch the rendering mode
    SetMode(LampMode),
    /// Raise the global dimmer by one step
    BrightnessUp,
    /// Lower the global dimmer by one step
    BrightnessDown,
    /// Raise the current mode's value by one step
    IntensityUp,
    /// Lower the current mode's value by one step
    IntensityDown,
}

impl LedCommand {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COMMAND_ID_SWITCH_ON => Self::SwitchOn,
            COMMAND_ID_SWITCH_OFF => Self::SwitchOff,
            COMMAND_ID_MODE_TEMPERATURE => Self::SetMode(LampMode::Temperature),
            COMMAND_ID_MODE_COLOR => Self::SetMode(LampMode::Color),
            COMMAND_ID_MODE_DYNAMIC_COLOR => Self::SetMode(LampMode::DynamicColor),
            COMMAND_ID_MODE_EFFECTS => Self::SetMode(LampMode::Effects),
            COMMAND_ID_BRIGHTNESS_UP => Self::BrightnessUp,
            COMMAND_ID_BRIGHTNESS_DOWN => Self::BrightnessDown,
            COMMAND_ID_INTENSITY_UP => Self::IntensityUp,
            COMMAND_ID_INTENSITY_DOWN => Self::IntensityDown,
            _ => return None,
        })
    }

    /// Wire code of the command
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::SwitchOn => COMMAND_ID_SWITCH_ON,
            Self::SwitchOff => COMMAND_ID_SWITCH_OFF,
            Self::SetMode(LampMode::Temperature) => COMMAND_ID_MODE_TEMPERATURE,
            Self::SetMode(LampMode::Color) => COMMAND_ID_MODE_COLOR,
            Self::SetMode(LampMode::DynamicColor) => COMMAND_ID_MODE_DYNAMIC_COLOR,
            Self::SetMode(LampMode::Effects) => COMMAND_ID_MODE_EFFECTS,
            Self::BrightnessUp => COMMAND_ID_BRIGHTNESS_UP,
            Self::BrightnessDown => COMMAND_ID_BRIGHTNESS_DOWN,
            Self::IntensityUp => COMMAND_ID_INTENSITY_UP,
            Self::IntensityDown => COMMAND_ID_INTENSITY_DOWN,
        }
    }
}

impl TryFrom<u8> for LedCommand {
    type Error = LampError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(LampError::UnrecognizedCommand(value))
    }
}

impl From<LedCommand> for u8 {
    fn from(command: LedCommand) -> Self {
        command.as_raw()
    }
}

/// Capacity of the gesture channel
pub const GESTURE_CHANNEL_SIZE: usize = 8;

/// Capacity of the command channel
pub const COMMAND_CHANNEL_SIZE: usize = 16;

/// Type alias for the gesture channel (raw gesture codes)
pub type GestureChannel = Channel<u8, GESTURE_CHANNEL_SIZE>;

/// Type alias for gesture sender
pub type GestureSender<'a> = Sender<'a, u8, GESTURE_CHANNEL_SIZE>;

/// Type alias for gesture receiver
pub type GestureReceiver<'a> = Receiver<'a, u8, GESTURE_CHANNEL_SIZE>;

/// Type alias for the command channel (raw command codes)
pub type CommandChannel = Channel<u8, COMMAND_CHANNEL_SIZE>;

/// Type alias for command sender
pub type CommandSender<'a> = Sender<'a, u8, COMMAND_CHANNEL_SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a> = Receiver<'a, u8, COMMAND_CHANNEL_SIZE>;
