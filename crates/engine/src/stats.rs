use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::text::TextStats;

const KIB: f64 = 1024.0;

/// Human readable size: KB below one megabyte, MB from there on.
///
/// Both units are shown with two fractional digits.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / KIB;
    let mb = kb / KIB;
    if mb >= 1.0 {
        format!("{mb:.2} MB")
    } else {
        format!("{kb:.2} KB")
    }
}

/// Statistics of a single analyzed file.
///
/// Built once by the analyzer and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileStatsResult {
    path: PathBuf,
    size_bytes: u64,
    size_display: String,
    line_count: usize,
    word_count: usize,
    char_count: usize,
    avg_word_length: f64,
    longest_word: String,
}

impl FileStatsResult {
    pub fn new(path: PathBuf, size_bytes: u64, text: TextStats) -> Self {
        let avg_word_length = text.avg_word_length();
        Self {
            path,
            size_bytes,
            size_display: format_size(size_bytes),
            line_count: text.lines,
            word_count: text.words,
            char_count: text.chars,
            avg_word_length,
            longest_word: text.longest_word,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn size_display(&self) -> &str {
        &self.size_display
    }

    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    pub const fn char_count(&self) -> usize {
        self.char_count
    }

    pub const fn avg_word_length(&self) -> f64 {
        self.avg_word_length
    }

    pub fn longest_word(&self) -> &str {
        &self.longest_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_kb_below_one_mb() {
        assert_eq!(format_size(0), "0.00 KB");
        assert_eq!(format_size(512), "0.50 KB");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1024.00 KB");
    }

    #[test]
    fn test_format_size_mb_from_one_mb() {
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 / 2), "2.50 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1024.00 MB");
    }

    #[test]
    fn test_result_from_text_stats() {
        let text = TextStats::from_lines(["hello world"]);
        let result = FileStatsResult::new(PathBuf::from("dir/hello.txt"), 11, text);

        assert_eq!(result.name(), "hello.txt");
        assert_eq!(result.size_bytes(), 11);
        assert_eq!(result.size_display(), "0.01 KB");
        assert_eq!(result.line_count(), 1);
        assert_eq!(result.word_count(), 2);
        assert_eq!(result.char_count(), 10);
        assert!((result.avg_word_length() - 5.0).abs() < f64::EPSILON);
        assert_eq!(result.longest_word(), "hello");
    }
}
