//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with status output on stdout.
//! `VIBEJAM_LOG` takes an `EnvFilter` directive; otherwise `-v` flags raise
//! the level from the default `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive (e.g. `vibejam=debug`).
pub const LOG_ENV: &str = "VIBEJAM_LOG";

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "vibejam=info,warn",
        2 => "vibejam=debug,info",
        _ => "vibejam=trace,debug",
    }
}

/// Install the global stderr subscriber. Later calls are ignored.
pub fn init(verbosity: u8, color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(verbosity > 1)
        .without_time()
        .try_init();
}
