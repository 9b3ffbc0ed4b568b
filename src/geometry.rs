//! Screen coordinates and terminal dimensions

use serde::{Deserialize, Serialize};

/// A screen coordinate in character cells
///
/// Not produced by any operation yet; reserved for cursor position reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: u16,
    pub y: u16,
}

impl Point2D {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size2D {
    /// Number of columns
    pub width: u16,
    /// Number of rows
    pub height: u16,
}

impl Size2D {
    /// Create a new size from columns and rows
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<nix::libc::winsize> for Size2D {
    fn from(ws: nix::libc::winsize) -> Self {
        Self {
            width: ws.ws_col,
            height: ws.ws_row,
        }
    }
}
