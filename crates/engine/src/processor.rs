use std::path::Path;

use log::{debug, warn};

use crate::error::Result;
use crate::filesystem::{FileSource, StdFileSource};
use crate::stats::FileStatsResult;
use crate::text::TextStats;

/// Analyze a file on the local filesystem.
///
/// # Errors
///
/// Returns [`ReadError`](crate::error::ReadError) when the path is missing,
/// unreadable, not a regular file, or reading fails part way through. No
/// partial result is produced in any of these cases.
pub fn analyze(path: impl AsRef<Path>) -> Result<FileStatsResult> {
    analyze_with(&StdFileSource, path)
}

/// Analyze a file through an arbitrary [`FileSource`].
///
/// # Errors
///
/// Propagates the first error reported by `source`.
pub fn analyze_with<S>(source: &S, path: impl AsRef<Path>) -> Result<FileStatsResult>
where
    S: FileSource + ?Sized,
{
    let path = path.as_ref();
    debug!("analyzing {}", path.display());

    let size = source.byte_len(path).inspect_err(|e| warn!("{e}"))?;
    let lines = source.read_lines(path).inspect_err(|e| warn!("{e}"))?;
    let text = TextStats::from_lines(&lines);

    let result = FileStatsResult::new(path.to_path_buf(), size, text);
    debug!(
        "{}: {} bytes, {} lines, {} words, {} chars",
        path.display(),
        result.size_bytes(),
        result.line_count(),
        result.word_count(),
        result.char_count()
    );
    Ok(result)
}

/// Reusable analyzer bound to one [`FileSource`].
#[derive(Debug, Clone, Default)]
pub struct FileStatsAnalyzer<S = StdFileSource> {
    source: S,
}

impl FileStatsAnalyzer {
    pub const fn new() -> Self {
        Self {
            source: StdFileSource,
        }
    }
}

impl<S: FileSource> FileStatsAnalyzer<S> {
    pub const fn with_source(source: S) -> Self {
        Self { source }
    }

    /// See [`analyze_with`].
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by the source.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<FileStatsResult> {
        analyze_with(&self.source, path)
    }
}
