//! Error types for the lamp controller

use core::fmt;

/// Error type for lamp operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampError {
    /// Gesture wire code outside the known set
    UnrecognizedGesture(u8),
    /// Command wire code outside the known set
    UnrecognizedCommand(u8),
    /// Frame length differs from the configured LED count
    InvalidFrameSize { expected: usize, actual: usize },
    /// Configured LED count does not fit the frame buffer
    LedCountExceedsCapacity { count: usize, capacity: usize },
    /// A loop or ramp thread could not be started
    TaskSpawn(std::io::ErrorKind),
    /// A loop thread panicked
    TaskPanicked(&'static str),
}

impl fmt::Display for LampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LampError::UnrecognizedGesture(code) => write!(f, "Unrecognized gesture: {}", code),
            LampError::UnrecognizedCommand(code) => write!(f, "Unrecognized command: {}", code),
            LampError::InvalidFrameSize { expected, actual } => write!(
                f,
                "Invalid frame size: expected {} LEDs, got {}",
                expected, actual
            ),
            LampError::LedCountExceedsCapacity { count, capacity } => write!(
                f,
                "LED count {} exceeds frame capacity {}",
                count, capacity
            ),
            LampError::TaskSpawn(kind) => write!(f, "Failed to spawn task: {}", kind),
            LampError::TaskPanicked(task) => write!(f, "Task panicked: {}", task),
        }
    }
}

impl core::error::Error for LampError {}

impl From<std::io::Error> for LampError {
    fn from(e: std::io::Error) -> Self {
        LampError::TaskSpawn(e.kind())
    }
}
