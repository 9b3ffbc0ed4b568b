//! Mochi TTY
//!
//! A small terminal control surface: query the size of the attached
//! terminal and emit cursor movement, erase and color escape sequences
//! without dealing with their encoding.
//!
//! - `sequence`: escape sequence catalog and typed sequences
//! - `emit`: writing sequences to an output stream
//! - `size`: terminal detection and window size query
//! - `console`: the high-level operations
//!
//! ```no_run
//! use mochi_tty::{ColorVariant, Console, ForegroundColor};
//!
//! let mut console = Console::new();
//! let size = console.size()?;
//! console.clear()?;
//! console.move_xy(size.width / 2, size.height / 2)?;
//! console.set_fg_color_variant(ForegroundColor::Green, ColorVariant::Bright)?;
//! println!("hello");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color;
pub mod console;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod sequence;
pub mod size;

pub use color::{ColorVariant, ForegroundColor};
pub use console::Console;
pub use error::{TtyError, TtyResult};
pub use geometry::{Point2D, Size2D};
pub use sequence::{Bare, Control, Sequence};
pub use size::{query_size, StdStream, SystemDevice, TerminalDevice};
