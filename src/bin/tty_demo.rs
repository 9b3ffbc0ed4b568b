//! Mochi TTY Demo
//!
//! Walks through the control surface on the current terminal: reports the
//! size, clears the screen, moves the cursor and draws a color grid.
//! Press Enter to advance between steps.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use mochi_tty::{ColorVariant, Console, ForegroundColor, Size2D};
use tracing::{error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Demo settings taken from the command line
#[derive(Debug, Clone)]
struct DemoConfig {
    /// Skip waiting for Enter between steps
    no_pause: bool,
    /// Print the size as JSON and exit
    json: bool,
    /// Columns between grid columns
    spacing: u16,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            no_pause: false,
            json: false,
            spacing: 10,
        }
    }
}

enum Args {
    Run(DemoConfig),
    Help,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match parse_args(std::env::args().skip(1)) {
        Args::Run(config) => config,
        Args::Help => {
            print_help();
            return ExitCode::SUCCESS;
        },
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Args {
    let mut config = DemoConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-pause" => config.no_pause = true,
            "-j" | "--json" => config.json = true,
            "-s" | "--spacing" => {
                if let Some(value) = args.next() {
                    match value.parse() {
                        Ok(spacing) => config.spacing = spacing,
                        Err(e) => warn!("Ignoring invalid spacing '{}': {}", value, e),
                    }
                }
            },
            "-h" | "--help" => return Args::Help,
            _ => {},
        }
    }

    Args::Run(config)
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut console = Console::new();
    let size = console.size()?;

    if config.json {
        println!("{}", serde_json::to_string(&size)?);
        return Ok(());
    }

    report(&size);
    pause(config)?;

    console.clear()?;
    report(&size);
    pause(config)?;

    console.move_xy(10, 5)?;
    report(&size);
    pause(config)?;

    console.clear()?;
    let mut col: u16 = 0;
    for variant in [ColorVariant::Bright, ColorVariant::Normal, ColorVariant::Dim] {
        for (row, color) in (0u16..).zip(ForegroundColor::ALL) {
            console.move_xy(col, row)?;
            console.set_fg_color_variant(color, variant)?;
            print!("COLOR");
        }
        col = col.saturating_add(config.spacing);
    }
    console.flush()?;
    pause(config)?;

    console.reset()?;
    console.flush()?;
    Ok(())
}

fn report(size: &Size2D) {
    println!("Columns: {} Rows: {}", size.width, size.height);
}

fn pause(config: &DemoConfig) -> io::Result<()> {
    if config.no_pause {
        return Ok(());
    }
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn print_help() {
    println!(
        r#"tty-demo - exercise the Mochi TTY control surface

USAGE:
    tty-demo [OPTIONS]

OPTIONS:
    --no-pause          Do not wait for Enter between steps
    -j, --json          Print the terminal size as JSON and exit
    -s, --spacing <N>   Columns between color grid columns (default: 10)
    -h, --help          Print this help message

ENVIRONMENT:
    RUST_LOG            Log filter (default: warn)"#
    );
}
