//! Escape emission
//!
//! Each call renders its sequences into one buffer and hands it to the
//! writer with a single `write_all`. Nothing is flushed here; buffering is
//! whatever the writer itself does.

use std::io::{self, Write};

use tracing::trace;

use crate::sequence::{Bare, Sequence};

/// Write one parametrized sequence
pub fn write_sequence<W: Write + ?Sized>(out: &mut W, seq: &Sequence) -> io::Result<()> {
    let mut buf = Vec::with_capacity(16);
    write!(buf, "{}", seq)?;
    trace!(control = ?seq.control(), bytes = buf.len(), "emit");
    out.write_all(&buf)
}

/// Write parameterless sequences back to back, in the order given
pub fn write_bare<W: Write + ?Sized>(out: &mut W, controls: &[Bare]) -> io::Result<()> {
    if controls.is_empty() {
        return Ok(());
    }
    let mut buf = Vec::with_capacity(controls.len() * 4);
    for control in controls {
        write!(buf, "{}", control)?;
    }
    trace!(?controls, bytes = buf.len(), "emit bare");
    out.write_all(&buf)
}
