//! Error types for terminal queries

use thiserror::Error;

use crate::size::StdStream;

/// Terminal query error type
#[derive(Error, Debug)]
pub enum TtyError {
    /// None of stdout, stdin or stderr is attached to a terminal
    #[error("None of the standard streams is associated with a terminal, cannot get the window size")]
    NoControllingTerminal,

    /// The window size ioctl failed on a terminal stream
    ///
    /// Only raised after `isatty` reported the stream as a terminal; streams
    /// that are not terminals are skipped and end in `NoControllingTerminal`.
    #[error("Failed to get window size of {stream}: {source}")]
    WindowSize {
        stream: StdStream,
        #[source]
        source: nix::Error,
    },
}

/// Result type for terminal queries
pub type TtyResult<T> = Result<T, TtyError>;
