use crate::error::{CliError, Result};
use std::fs::File;
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{
        self,
        format::{DefaultFields, FmtSpan, Format},
    },
    prelude::*,
};

/// Console level for the `-v` count; `-q` silences the console only.
fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// The log file records at least `DEBUG`, whatever the console level.
fn file_level(console: LevelFilter) -> LevelFilter {
    console.max(LevelFilter::DEBUG)
}

/// Plain-text layer that also reports when the instrumented bond list
/// operations (construction, selection, traversal) finish, with their timings.
fn file_layer<S>(file: File) -> fmt::Layer<S, DefaultFields, Format, File> {
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
}

/// Installs the global logger.
///
/// Logs always go to stderr, leaving stdout to the tables and atom lists the
/// commands print.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let console = level_filter(verbosity, quiet);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .with_filter(console);

    let file_output = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(CliError::Io)?;
            Some(file_layer(file).with_filter(file_level(console)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_output)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}
