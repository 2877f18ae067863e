use log::{LevelFilter, SetLoggerError};

/// Install the global logger.
///
/// `level` is the default filter; `RUST_LOG`, when set, takes precedence.
/// Log lines go to stderr so they never mix with rendered results.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init()
}
