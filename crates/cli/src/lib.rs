// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use file_stats_engine::{FileStatsAnalyzer, FileStatsResult, ReadError};
use log::info;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of analyzing every configured path.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Vec<FileStatsResult>,
    pub errors: Vec<ReadError>,
}

/// Analyze each configured path in order.
///
/// # Errors
///
/// In strict mode the first read failure is returned. Otherwise failures are
/// collected in [`RunResult::errors`] and the remaining paths are still
/// analyzed.
pub fn run(config: &Config) -> Result<RunResult> {
    let analyzer = FileStatsAnalyzer::new();
    let mut result = RunResult::default();

    for path in &config.paths {
        match analyzer.analyze(path) {
            Ok(stats) => {
                info!("{}: {}", path.display(), stats.size_display());
                result.stats.push(stats);
            }
            Err(e) if config.strict => return Err(e.into()),
            Err(e) => result.errors.push(e),
        }
    }

    Ok(result)
}
