//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the schema document. The level is
//! chosen by `-v` alone; the environment is not consulted.

use tracing::Level;

pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

pub fn init(verbosity: u8) {
    // a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
