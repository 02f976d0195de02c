//! Logging setup

use log::LevelFilter;
use std::env;

/// Initialize logging for the CLI.
///
/// Info level by default, Debug when `verbose` is set; `RUST_LOG` overrides
/// both when present.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
