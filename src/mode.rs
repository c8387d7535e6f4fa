//! Lamp rendering modes.

const MODE_NAME_TEMPERATURE: &str = "temperature";
const MODE_NAME_COLOR: &str = "color";
const MODE_NAME_DYNAMIC_COLOR: &str = "dynamic_color";
const MODE_NAME_EFFECTS: &str = "effects";

/// Number of lamp modes.
pub const MODE_COUNT: usize = 4;

/// Mutually exclusive rendering modes, ordered and cyclic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LampMode {
    /// White light along a warm-to-cool temperature curve
    #[default]
    Temperature = 1,
    /// Fully saturated colour picked on the hue wheel
    Color = 2,
    /// Reserved, renders nothing yet
    DynamicColor = 3,
    /// Reserved, renders nothing yet
    Effects = 4,
}

impl LampMode {
    /// All modes in cycle order.
    pub const ALL: [Self; MODE_COUNT] = [
        Self::Temperature,
        Self::Color,
        Self::DynamicColor,
        Self::Effects,
    ];

    /// Look a mode up by its ordinal (1-based).
    pub const fn from_ordinal(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::Temperature,
            2 => Self::Color,
            3 => Self::DynamicColor,
            4 => Self::Effects,
            _ => return None,
        })
    }

    /// 1-based ordinal of the mode.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// 0-based index, used for per-mode tables.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Next mode, wrapping from the last back to the first.
    pub const fn successor(self) -> Self {
        match self {
            Self::Temperature => Self::Color,
            Self::Color => Self::DynamicColor,
            Self::DynamicColor => Self::Effects,
            Self::Effects => Self::Temperature,
        }
    }

    /// Previous mode, wrapping from the first back to the last.
    pub const fn predecessor(self) -> Self {
        match self {
            Self::Temperature => Self::Effects,
            Self::Color => Self::Temperature,
            Self::DynamicColor => Self::Color,
            Self::Effects => Self::DynamicColor,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => MODE_NAME_TEMPERATURE,
            Self::Color => MODE_NAME_COLOR,
            Self::DynamicColor => MODE_NAME_DYNAMIC_COLOR,
            Self::Effects => MODE_NAME_EFFECTS,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_TEMPERATURE => Some(Self::Temperature),
            MODE_NAME_COLOR => Some(Self::Color),
            MODE_NAME_DYNAMIC_COLOR => Some(Self::DynamicColor),
            MODE_NAME_EFFECTS => Some(Self::Effects),
            _ => None,
        }
    }
}
