//! Well known colors for the cube

const COLOR_NAME_RED: &str = "red";
const COLOR_NAME_ORANGE: &str = "orange";
const COLOR_NAME_YELLOW: &str = "yellow";
const COLOR_NAME_GREEN: &str = "green";
const COLOR_NAME_BLUE: &str = "blue";
const COLOR_NAME_INDIGO: &str = "indigo";
const COLOR_NAME_VIOLET: &str = "violet";
const COLOR_NAME_PURPLE: &str = "purple";
const COLOR_NAME_WHITE: &str = "white";
const COLOR_NAME_BLACK: &str = "black";

/// Named colors with their literal packed values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
#[allow(clippy::unreadable_literal)]
pub enum NamedColor {
    Red = 0xFF0000,
    Orange = 0xFFA500,
    Yellow = 0xFFFF00,
    Green = 0x00FF00,
    Blue = 0x0000FF,
    Indigo = 0x4b0082,
    Violet = 0x8a2be2,
    Purple = 0xFF00FF,
    White = 0xFFFFFF,
    Black = 0x000000,
}

impl NamedColor {
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    /// Packed `0xRRGGBB` value of the color
    pub const fn rgb(self) -> u32 {
        self as u32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => COLOR_NAME_RED,
            Self::Orange => COLOR_NAME_ORANGE,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Green => COLOR_NAME_GREEN,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Indigo => COLOR_NAME_INDIGO,
            Self::Violet => COLOR_NAME_VIOLET,
            Self::Purple => COLOR_NAME_PURPLE,
            Self::White => COLOR_NAME_WHITE,
            Self::Black => COLOR_NAME_BLACK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_ORANGE => Some(Self::Orange),
            COLOR_NAME_YELLOW => Some(Self::Yellow),
            COLOR_NAME_GREEN => Some(Self::Green),
            COLOR_NAME_BLUE => Some(Self::Blue),
            COLOR_NAME_INDIGO => Some(Self::Indigo),
            COLOR_NAME_VIOLET => Some(Self::Violet),
            COLOR_NAME_PURPLE => Some(Self::Purple),
            COLOR_NAME_WHITE => Some(Self::White),
            COLOR_NAME_BLACK => Some(Self::Black),
            _ => None,
        }
    }
}

/// Gets the RGB value of a known color
pub const fn colors(color: NamedColor) -> u32 {
    color.rgb()
}
