//! Foreground colors and intensity variants
//!
//! Colors use the classic SGR numbering (30-37). The variant is emitted in
//! front of the color as a second SGR parameter.

use serde::{Deserialize, Serialize};

/// One of the eight base foreground colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForegroundColor {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

impl ForegroundColor {
    /// All colors in SGR order
    pub const ALL: [ForegroundColor; 8] = [
        ForegroundColor::Black,
        ForegroundColor::Red,
        ForegroundColor::Green,
        ForegroundColor::Yellow,
        ForegroundColor::Blue,
        ForegroundColor::Magenta,
        ForegroundColor::Cyan,
        ForegroundColor::White,
    ];

    /// SGR parameter for this color
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// Intensity attribute applied alongside a foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorVariant {
    #[default]
    Normal = 0,
    Bright = 1,
    Dim = 2,
}

impl ColorVariant {
    pub const ALL: [ColorVariant; 3] = [ColorVariant::Normal, ColorVariant::Bright, ColorVariant::Dim];

    /// SGR parameter for this variant
    pub fn code(self) -> u16 {
        self as u16
    }
}
