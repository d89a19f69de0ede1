//! Tracing subscriber setup.

use tracing::Level;

/// Maps `-v` count and `--quiet` to a maximum log level.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global fmt subscriber, logging to stderr.
///
/// Stdout stays reserved for command output so `--json` remains parseable.
/// Calling this more than once is harmless.
pub fn init(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
