//! Escape Sequence Catalog
//!
//! Every control operation maps to exactly one template in [`TEMPLATES`],
//! indexed by the operation's ordinal. Templates are written without the
//! leading escape byte and use `{}` for positional numeric parameters,
//! consumed left to right.
//!
//! Callers never deal with templates directly: a [`Sequence`] carries the
//! typed parameters of one operation, so the number of arguments always
//! matches the template it is rendered into.

use std::fmt;

use crate::color::{ColorVariant, ForegroundColor};

/// Escape introducer (0x1B)
pub const ESC: &str = "\x1b";

/// Positional parameter marker inside a template
pub const PLACEHOLDER: &str = "{}";

/// Control operations, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Reset attributes
    Reset = 0,
    /// Cursor to the top-left corner
    MoveHome,
    /// Clear from cursor to end of screen
    ClearBelow,
    /// Clear from start of screen to cursor
    ClearAbove,
    /// Erase from cursor to end of line
    EraseEndOfLine,
    /// Erase from start of line to cursor
    EraseStartOfLine,
    /// Erase the whole current line
    EraseLine,
    /// Absolute cursor position (row;col)
    MoveTo,
    MoveUpBy,
    MoveDownBy,
    MoveRightBy,
    MoveLeftBy,
    /// Two-parameter SGR (variant;color)
    SetAttributes,
}

/// Templates indexed by `Control as usize`
pub const TEMPLATES: [&str; Control::COUNT] = [
    "s",
    "[H",
    "[J",
    "[1J",
    "[K",
    "[1K",
    "[2K",
    "[{};{}H",
    "[{}A",
    "[{}B",
    "[{}C",
    "[{}D",
    "[{};{}m",
];

impl Control {
    /// Number of control operations
    pub const COUNT: usize = 13;

    /// Every operation in ordinal order
    pub const ALL: [Control; Control::COUNT] = [
        Control::Reset,
        Control::MoveHome,
        Control::ClearBelow,
        Control::ClearAbove,
        Control::EraseEndOfLine,
        Control::EraseStartOfLine,
        Control::EraseLine,
        Control::MoveTo,
        Control::MoveUpBy,
        Control::MoveDownBy,
        Control::MoveRightBy,
        Control::MoveLeftBy,
        Control::SetAttributes,
    ];

    /// The template for this operation, without the escape byte
    pub fn template(self) -> &'static str {
        TEMPLATES[self as usize]
    }

    /// Number of numeric parameters the template consumes
    pub fn arity(self) -> usize {
        match self {
            Control::MoveTo | Control::SetAttributes => 2,
            Control::MoveUpBy | Control::MoveDownBy | Control::MoveRightBy | Control::MoveLeftBy => 1,
            _ => 0,
        }
    }
}

/// Parameterless operations, the only ones accepted by concatenated emission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bare {
    Reset,
    MoveHome,
    ClearBelow,
    ClearAbove,
    EraseEndOfLine,
    EraseStartOfLine,
    EraseLine,
}

impl Bare {
    pub fn control(self) -> Control {
        match self {
            Bare::Reset => Control::Reset,
            Bare::MoveHome => Control::MoveHome,
            Bare::ClearBelow => Control::ClearBelow,
            Bare::ClearAbove => Control::ClearAbove,
            Bare::EraseEndOfLine => Control::EraseEndOfLine,
            Bare::EraseStartOfLine => Control::EraseStartOfLine,
            Bare::EraseLine => Control::EraseLine,
        }
    }
}

impl From<Bare> for Control {
    fn from(bare: Bare) -> Self {
        bare.control()
    }
}

impl fmt::Display for Bare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ESC)?;
        f.write_str(self.control().template())
    }
}

/// One control operation together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Bare(Bare),
    /// 1-indexed absolute position
    MoveTo { col: u16, row: u16 },
    MoveUp(u16),
    MoveDown(u16),
    MoveRight(u16),
    MoveLeft(u16),
    SetColor {
        color: ForegroundColor,
        variant: ColorVariant,
    },
}

impl Sequence {
    pub fn control(&self) -> Control {
        match self {
            Sequence::Bare(bare) => bare.control(),
            Sequence::MoveTo { .. } => Control::MoveTo,
            Sequence::MoveUp(_) => Control::MoveUpBy,
            Sequence::MoveDown(_) => Control::MoveDownBy,
            Sequence::MoveRight(_) => Control::MoveRightBy,
            Sequence::MoveLeft(_) => Control::MoveLeftBy,
            Sequence::SetColor { .. } => Control::SetAttributes,
        }
    }

    /// Parameters in template order
    ///
    /// Cursor positioning is row-major on the wire, so `MoveTo` yields the
    /// row before the column.
    pub fn params(&self) -> Params {
        match *self {
            Sequence::Bare(_) => Params::none(),
            Sequence::MoveTo { col, row } => Params::two(row, col),
            Sequence::MoveUp(n)
            | Sequence::MoveDown(n)
            | Sequence::MoveRight(n)
            | Sequence::MoveLeft(n) => Params::one(n),
            Sequence::SetColor { color, variant } => Params::two(variant.code(), color.code()),
        }
    }
}

impl From<Bare> for Sequence {
    fn from(bare: Bare) -> Self {
        Sequence::Bare(bare)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let control = self.control();
        let params = self.params();
        debug_assert_eq!(params.len(), control.arity());

        let mut values = params.as_slice().iter();
        let mut pieces = control.template().split(PLACEHOLDER);

        f.write_str(ESC)?;
        if let Some(head) = pieces.next() {
            f.write_str(head)?;
        }
        for piece in pieces {
            if let Some(value) = values.next() {
                write!(f, "{}", value)?;
            }
            f.write_str(piece)?;
        }
        Ok(())
    }
}

/// Fixed-capacity parameter list (no template takes more than two)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    values: [u16; 2],
    len: usize,
}

impl Params {
    fn none() -> Self {
        Self {
            values: [0; 2],
            len: 0,
        }
    }

    fn one(a: u16) -> Self {
        Self {
            values: [a, 0],
            len: 1,
        }
    }

    fn two(a: u16, b: u16) -> Self {
        Self {
            values: [a, b],
            len: 2,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.values[..self.len]
    }
}
