//! Console
//!
//! The high-level control surface. Each method formats exactly one
//! operation and writes it straight away; the console keeps no state
//! between calls besides its writer and device handles.

use std::io::{self, Stdout, Write};

use crate::color::{ColorVariant, ForegroundColor};
use crate::emit::{write_bare, write_sequence};
use crate::error::TtyResult;
use crate::geometry::Size2D;
use crate::sequence::{Bare, Sequence};
use crate::size::{query_size, SystemDevice, TerminalDevice};

/// Terminal control surface writing to `W` and querying geometry from `D`
#[derive(Debug)]
pub struct Console<W: Write = Stdout, D: TerminalDevice = SystemDevice> {
    out: W,
    device: D,
}

impl Console {
    /// Console on the process's stdout and real terminal
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            device: SystemDevice,
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Console<W> {
    /// Console writing to an arbitrary sink, sizing from the real terminal
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            device: SystemDevice,
        }
    }
}

impl<W: Write, D: TerminalDevice> Console<W, D> {
    pub fn with_parts(out: W, device: D) -> Self {
        Self { out, device }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consume the console, returning its writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write any single sequence
    pub fn emit(&mut self, seq: Sequence) -> io::Result<()> {
        write_sequence(&mut self.out, &seq)
    }

    /// Write parameterless sequences back to back
    pub fn emit_bare(&mut self, controls: &[Bare]) -> io::Result<()> {
        write_bare(&mut self.out, controls)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Reset attributes
    pub fn reset(&mut self) -> io::Result<()> {
        self.emit_bare(&[Bare::Reset])
    }

    /// Size of the controlling terminal in character cells
    pub fn size(&self) -> TtyResult<Size2D> {
        query_size(&self.device)
    }

    /// Move the cursor to a 1-indexed column and row
    pub fn move_xy(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.emit(Sequence::MoveTo { col, row })
    }

    pub fn move_up_by(&mut self, lines: u16) -> io::Result<()> {
        self.emit(Sequence::MoveUp(lines))
    }

    pub fn move_down_by(&mut self, lines: u16) -> io::Result<()> {
        self.emit(Sequence::MoveDown(lines))
    }

    pub fn move_right_by(&mut self, chars: u16) -> io::Result<()> {
        self.emit(Sequence::MoveRight(chars))
    }

    pub fn move_left_by(&mut self, chars: u16) -> io::Result<()> {
        self.emit(Sequence::MoveLeft(chars))
    }

    /// Clear the whole screen: home the cursor, then clear below it
    pub fn clear(&mut self) -> io::Result<()> {
        self.emit_bare(&[Bare::MoveHome, Bare::ClearBelow])
    }

    pub fn move_home(&mut self) -> io::Result<()> {
        self.emit_bare(&[Bare::MoveHome])
    }

    pub fn clear_below(&mut self) -> io::Result<()> {
        self.emit_bare(&[Bare::ClearBelow])
    }

    pub fn clear_above(&mut self) -> io::Result<()> {
        self.emit_bare(&[Bare::ClearAbove])
    }

    pub fn erase_end_of_line(&mut self) -> io::Result<()> {
        self.emit_bare(&[Bare::EraseEndOfLine])
    }

    pub fn erase_start_of_line(&mut self) -> io::Result<()> {
        self.emit_bare(&[Bare::EraseStartOfLine])
    }

    pub fn erase_current_line(&mut self) -> io::Result<()> {
        self.emit_bare(&[Bare::EraseLine])
    }

    /// Set the foreground color with normal intensity
    pub fn set_fg_color(&mut self, color: ForegroundColor) -> io::Result<()> {
        self.set_fg_color_variant(color, ColorVariant::Normal)
    }

    pub fn set_fg_color_variant(&mut self, color: ForegroundColor, variant: ColorVariant) -> io::Result<()> {
        self.emit(Sequence::SetColor { color, variant })
    }
}
