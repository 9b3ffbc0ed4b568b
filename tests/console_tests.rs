//! Console integration tests
//!
//! The size query runs against a scripted device so the probe order and
//! the error path can be checked without a real terminal. Emission is
//! checked byte for byte against in-memory and file sinks.

use std::cell::RefCell;
use std::io::{Read, Seek, SeekFrom};

use mochi_tty::{
    query_size, Bare, ColorVariant, Console, ForegroundColor, Sequence, Size2D, StdStream, TerminalDevice,
    TtyError,
};

/// Device with a fixed set of attached streams that records every query
struct ScriptedDevice {
    attached: Vec<StdStream>,
    sizes: Vec<(StdStream, Size2D)>,
    fail: bool,
    probed: RefCell<Vec<StdStream>>,
    queried: RefCell<Vec<StdStream>>,
}

impl ScriptedDevice {
    fn new(attached: &[StdStream]) -> Self {
        Self {
            attached: attached.to_vec(),
            sizes: vec![
                (StdStream::Stdout, Size2D::new(80, 24)),
                (StdStream::Stdin, Size2D::new(132, 43)),
                (StdStream::Stderr, Size2D::new(100, 30)),
            ],
            fail: false,
            probed: RefCell::new(Vec::new()),
            queried: RefCell::new(Vec::new()),
        }
    }

    fn failing(attached: &[StdStream]) -> Self {
        Self {
            fail: true,
            ..Self::new(attached)
        }
    }
}

impl TerminalDevice for ScriptedDevice {
    fn is_terminal(&self, stream: StdStream) -> bool {
        self.probed.borrow_mut().push(stream);
        self.attached.contains(&stream)
    }

    fn window_size(&self, stream: StdStream) -> nix::Result<Size2D> {
        self.queried.borrow_mut().push(stream);
        if self.fail {
            return Err(nix::Error::ENOTTY);
        }
        Ok(self
            .sizes
            .iter()
            .find(|(s, _)| *s == stream)
            .map(|(_, size)| *size)
            .unwrap_or_default())
    }
}

#[test]
fn test_no_terminal_fails_without_query() {
    let device = ScriptedDevice::new(&[]);
    let err = query_size(&device).unwrap_err();

    assert!(matches!(err, TtyError::NoControllingTerminal));
    assert_eq!(
        *device.probed.borrow(),
        vec![StdStream::Stdout, StdStream::Stdin, StdStream::Stderr]
    );
    assert!(device.queried.borrow().is_empty());
}

#[test]
fn test_stdout_preferred() {
    let device = ScriptedDevice::new(&[StdStream::Stdout, StdStream::Stdin, StdStream::Stderr]);
    assert_eq!(query_size(&device).unwrap(), Size2D::new(80, 24));
    assert_eq!(*device.probed.borrow(), vec![StdStream::Stdout]);
    assert_eq!(*device.queried.borrow(), vec![StdStream::Stdout]);
}

#[test]
fn test_stdin_fallback() {
    let device = ScriptedDevice::new(&[StdStream::Stdin]);
    assert_eq!(query_size(&device).unwrap(), Size2D::new(132, 43));
    assert_eq!(*device.queried.borrow(), vec![StdStream::Stdin]);
}

#[test]
fn test_stdin_wins_over_stderr() {
    let device = ScriptedDevice::new(&[StdStream::Stdin, StdStream::Stderr]);
    assert_eq!(query_size(&device).unwrap(), Size2D::new(132, 43));
    assert_eq!(*device.queried.borrow(), vec![StdStream::Stdin]);
}

#[test]
fn test_stderr_last_resort() {
    let device = ScriptedDevice::new(&[StdStream::Stderr]);
    assert_eq!(query_size(&device).unwrap(), Size2D::new(100, 30));
}

#[test]
fn test_ioctl_failure_names_stream() {
    let device = ScriptedDevice::failing(&[StdStream::Stdin]);
    match query_size(&device).unwrap_err() {
        TtyError::WindowSize { stream, source } => {
            assert_eq!(stream, StdStream::Stdin);
            assert_eq!(source, nix::Error::ENOTTY);
        },
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_no_terminal_message() {
    let msg = TtyError::NoControllingTerminal.to_string();
    assert!(msg.contains("None of the standard streams"));
}

#[test]
fn test_console_size_uses_device() {
    let console = Console::with_parts(Vec::new(), ScriptedDevice::new(&[StdStream::Stderr]));
    assert_eq!(console.size().unwrap(), Size2D::new(100, 30));
    assert!(console.writer().is_empty());
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = Console::with_writer(Vec::new());
    once.reset().unwrap();
    let once = once.into_inner();

    let mut twice = Console::with_writer(Vec::new());
    twice.reset().unwrap();
    twice.reset().unwrap();
    let twice = twice.into_inner();

    assert_eq!(once, b"\x1bs");
    assert_eq!(twice, [once.clone(), once].concat());
}

#[test]
fn test_emit_matches_high_level_calls() {
    let mut low = Console::with_writer(Vec::new());
    low.emit(Sequence::MoveTo { col: 3, row: 7 }).unwrap();
    low.emit_bare(&[Bare::MoveHome, Bare::ClearBelow]).unwrap();

    let mut high = Console::with_writer(Vec::new());
    high.move_xy(3, 7).unwrap();
    high.clear().unwrap();

    assert_eq!(low.into_inner(), high.into_inner());
}

#[test]
fn test_color_grid() {
    let mut console = Console::with_writer(Vec::new());
    for color in ForegroundColor::ALL {
        console.set_fg_color(color).unwrap();
    }
    let expected: String = (30..=37).map(|code| format!("\x1b[0;{}m", code)).collect();
    assert_eq!(console.into_inner(), expected.into_bytes());
}

#[test]
fn test_non_terminal_sink_still_receives_sequences() {
    let file = tempfile::tempfile().unwrap();
    let mut console = Console::with_writer(file);
    console.clear().unwrap();
    console
        .set_fg_color_variant(ForegroundColor::Cyan, ColorVariant::Dim)
        .unwrap();
    console.erase_current_line().unwrap();
    console.flush().unwrap();

    let mut file = console.into_inner();
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut contents = Vec::new();
    file.read_to_end(&mut contents).unwrap();
    assert_eq!(contents, b"\x1b[H\x1b[J\x1b[2;36m\x1b[2K");
}
