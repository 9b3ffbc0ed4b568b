//! Terminal size query
//!
//! The window geometry is read from the first standard stream attached to
//! a terminal, probing stdout, then stdin, then stderr. Stdout is preferred
//! because it is where the control sequences go; the other two cover
//! redirected output such as `prog > file` run from an interactive shell.

use std::fmt;
use std::os::unix::io::RawFd;

use nix::libc;
use tracing::debug;

use crate::error::{TtyError, TtyResult};
use crate::geometry::Size2D;

/// A standard stream of the current process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StdStream {
    Stdout,
    Stdin,
    Stderr,
}

impl StdStream {
    /// Order in which streams are probed for a terminal
    pub const PROBE_ORDER: [StdStream; 3] = [StdStream::Stdout, StdStream::Stdin, StdStream::Stderr];

    pub fn fd(self) -> RawFd {
        match self {
            StdStream::Stdin => libc::STDIN_FILENO,
            StdStream::Stdout => libc::STDOUT_FILENO,
            StdStream::Stderr => libc::STDERR_FILENO,
        }
    }
}

impl fmt::Display for StdStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StdStream::Stdout => "stdout",
            StdStream::Stdin => "stdin",
            StdStream::Stderr => "stderr",
        })
    }
}

/// Access to terminal devices behind the standard streams
pub trait TerminalDevice {
    /// Whether the stream is connected to a terminal
    fn is_terminal(&self, stream: StdStream) -> bool;

    /// Window geometry of a terminal stream
    fn window_size(&self, stream: StdStream) -> nix::Result<Size2D>;
}

/// The process's real standard streams
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDevice;

impl TerminalDevice for SystemDevice {
    fn is_terminal(&self, stream: StdStream) -> bool {
        is_terminal_fd(stream.fd())
    }

    fn window_size(&self, stream: StdStream) -> nix::Result<Size2D> {
        get_window_size(stream.fd())
    }
}

/// Check whether a file descriptor refers to a terminal
///
/// A closed or invalid descriptor counts as not a terminal.
pub fn is_terminal_fd(fd: RawFd) -> bool {
    nix::unistd::isatty(fd).unwrap_or(false)
}

/// Get the window size from a terminal file descriptor
pub fn get_window_size(fd: RawFd) -> nix::Result<Size2D> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ is a valid ioctl for getting window size
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };

    if result < 0 {
        Err(nix::errno::Errno::last())
    } else {
        Ok(Size2D::from(ws))
    }
}

/// Query the size of the controlling terminal
///
/// Only the first terminal stream in [`StdStream::PROBE_ORDER`] is queried,
/// and its geometry is returned as reported.
pub fn query_size<D: TerminalDevice + ?Sized>(device: &D) -> TtyResult<Size2D> {
    let stream = StdStream::PROBE_ORDER
        .into_iter()
        .find(|&stream| device.is_terminal(stream))
        .ok_or(TtyError::NoControllingTerminal)?;

    let size = device
        .window_size(stream)
        .map_err(|source| TtyError::WindowSize { stream, source })?;

    debug!(%stream, width = size.width, height = size.height, "terminal size");
    Ok(size)
}
