//! File analysis engine: byte size, line/word/character counts and average
//! word length of a single file.
//!
//! ```no_run
//! let stats = file_stats_engine::analyze("notes.txt")?;
//! println!("{} words, {}", stats.word_count(), stats.size_display());
//! # Ok::<(), file_stats_engine::error::ReadError>(())
//! ```

pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;
pub mod text;

pub use crate::error::{ReadError, Result};
pub use crate::filesystem::{FileSource, StdFileSource};
pub use crate::processor::{FileStatsAnalyzer, analyze, analyze_with};
pub use crate::stats::{FileStatsResult, format_size};
pub use crate::text::TextStats;
