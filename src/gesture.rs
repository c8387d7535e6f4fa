//! Classified button gestures.
//!
//! Gestures arrive from the button hardware already classified. On the
//! gesture channel they travel as single-byte wire codes.

use crate::error::LampError;

const GESTURE_ID_LEFT_CLICK: u8 = 0;
const GESTURE_ID_RIGHT_CLICK: u8 = 1;
const GESTURE_ID_LEFT_HOLD_START: u8 = 2;
const GESTURE_ID_RIGHT_HOLD_START: u8 = 3;
const GESTURE_ID_LEFT_HOLD_END: u8 = 4;
const GESTURE_ID_RIGHT_HOLD_END: u8 = 5;
const GESTURE_ID_LEFT_CLICK_HOLD: u8 = 6;
const GESTURE_ID_RIGHT_CLICK_HOLD: u8 = 7;
const GESTURE_ID_LEFT_SWIPE: u8 = 8;
const GESTURE_ID_RIGHT_SWIPE: u8 = 9;

const GESTURE_NAME_LEFT_CLICK: &str = "left_click";
const GESTURE_NAME_RIGHT_CLICK: &str = "right_click";
const GESTURE_NAME_LEFT_HOLD_START: &str = "left_hold_start";
const GESTURE_NAME_RIGHT_HOLD_START: &str = "right_hold_start";
const GESTURE_NAME_LEFT_HOLD_END: &str = "left_hold_end";
const GESTURE_NAME_RIGHT_HOLD_END: &str = "right_hold_end";
const GESTURE_NAME_LEFT_CLICK_HOLD: &str = "left_click_hold";
const GESTURE_NAME_RIGHT_CLICK_HOLD: &str = "right_click_hold";
const GESTURE_NAME_LEFT_SWIPE: &str = "left_swipe";
const GESTURE_NAME_RIGHT_SWIPE: &str = "right_swipe";

/// A discrete button interaction on the left or right button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GestureEvent {
    LeftClick = GESTURE_ID_LEFT_CLICK,
    RightClick = GESTURE_ID_RIGHT_CLICK,
    /// Button pressed and held
    LeftHoldStart = GESTURE_ID_LEFT_HOLD_START,
    RightHoldStart = GESTURE_ID_RIGHT_HOLD_START,
    /// Held button released
    LeftHoldEnd = GESTURE_ID_LEFT_HOLD_END,
    RightHoldEnd = GESTURE_ID_RIGHT_HOLD_END,
    /// Click immediately followed by a hold
    LeftClickHold = GESTURE_ID_LEFT_CLICK_HOLD,
    RightClickHold = GESTURE_ID_RIGHT_CLICK_HOLD,
    LeftSwipe = GESTURE_ID_LEFT_SWIPE,
    RightSwipe = GESTURE_ID_RIGHT_SWIPE,
}

impl GestureEvent {
    pub const ALL: [Self; 10] = [
        Self::LeftClick,
        Self::RightClick,
        Self::LeftHoldStart,
        Self::RightHoldStart,
        Self::LeftHoldEnd,
        Self::RightHoldEnd,
        Self::LeftClickHold,
        Self::RightClickHold,
        Self::LeftSwipe,
        Self::RightSwipe,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            GESTURE_ID_LEFT_CLICK => Self::LeftClick,
            GESTURE_ID_RIGHT_CLICK => Self::RightClick,
            GESTURE_ID_LEFT_HOLD_START => Self::LeftHoldStart,
            GESTURE_ID_RIGHT_HOLD_START => Self::RightHoldStart,
            GESTURE_ID_LEFT_HOLD_END => Self::LeftHoldEnd,
            GESTURE_ID_RIGHT_HOLD_END => Self::RightHoldEnd,
            GESTURE_ID_LEFT_CLICK_HOLD => Self::LeftClickHold,
            GESTURE_ID_RIGHT_CLICK_HOLD => Self::RightClickHold,
            GESTURE_ID_LEFT_SWIPE => Self::LeftSwipe,
            GESTURE_ID_RIGHT_SWIPE => Self::RightSwipe,
            _ => return None,
        })
    }

    /// Wire code of the gesture
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftClick => GESTURE_NAME_LEFT_CLICK,
            Self::RightClick => GESTURE_NAME_RIGHT_CLICK,
            Self::LeftHoldStart => GESTURE_NAME_LEFT_HOLD_START,
            Self::RightHoldStart => GESTURE_NAME_RIGHT_HOLD_START,
            Self::LeftHoldEnd => GESTURE_NAME_LEFT_HOLD_END,
            Self::RightHoldEnd => GESTURE_NAME_RIGHT_HOLD_END,
            Self::LeftClickHold => GESTURE_NAME_LEFT_CLICK_HOLD,
            Self::RightClickHold => GESTURE_NAME_RIGHT_CLICK_HOLD,
            Self::LeftSwipe => GESTURE_NAME_LEFT_SWIPE,
            Self::RightSwipe => GESTURE_NAME_RIGHT_SWIPE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gesture| gesture.as_str() == s)
    }
}

impl TryFrom<u8> for GestureEvent {
    type Error = LampError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(LampError::UnrecognizedGesture(value))
    }
}

impl From<GestureEvent> for u8 {
    fn from(gesture: GestureEvent) -> Self {
        gesture.as_raw()
    }
}
