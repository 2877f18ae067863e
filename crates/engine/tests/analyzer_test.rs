//! Analyzer behaviour against an in-memory [`FileSource`].

use std::cell::Cell;
use std::io;
use std::path::{Path, PathBuf};

use file_stats_engine::{FileSource, FileStatsAnalyzer, ReadError, analyze_with};

// ============================================================================
// MockFileSource
// ============================================================================

enum ReadBehavior {
    Lines(Vec<String>),
    FailMidRead,
}

struct MockFileSource {
    size: u64,
    behavior: ReadBehavior,
    reads: Cell<usize>,
}

impl MockFileSource {
    fn with_lines(size: u64, lines: &[&str]) -> Self {
        Self {
            size,
            behavior: ReadBehavior::Lines(lines.iter().map(ToString::to_string).collect()),
            reads: Cell::new(0),
        }
    }

    fn failing(size: u64) -> Self {
        Self {
            size,
            behavior: ReadBehavior::FailMidRead,
            reads: Cell::new(0),
        }
    }
}

impl FileSource for MockFileSource {
    fn byte_len(&self, _path: &Path) -> file_stats_engine::Result<u64> {
        Ok(self.size)
    }

    fn read_lines(&self, path: &Path) -> file_stats_engine::Result<Vec<String>> {
        self.reads.set(self.reads.get() + 1);
        match &self.behavior {
            ReadBehavior::Lines(lines) => Ok(lines.clone()),
            ReadBehavior::FailMidRead => Err(ReadError::from_io(
                path,
                io::Error::other("mock device failure"),
            )),
        }
    }
}

struct DeniedSource;

impl FileSource for DeniedSource {
    fn byte_len(&self, path: &Path) -> file_stats_engine::Result<u64> {
        Err(ReadError::from_io(
            path,
            io::Error::from(io::ErrorKind::PermissionDenied),
        ))
    }

    fn read_lines(&self, _path: &Path) -> file_stats_engine::Result<Vec<String>> {
        unreachable!("size is queried before content")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_size_comes_from_source_not_content() {
    // 2 MiB reported by metadata, tiny decoded content
    let source = MockFileSource::with_lines(2 * 1024 * 1024, &["short"]);
    let stats = analyze_with(&source, "big.bin").unwrap();

    assert_eq!(stats.size_bytes(), 2 * 1024 * 1024);
    assert_eq!(stats.size_display(), "2.00 MB");
    assert_eq!(stats.word_count(), 1);
    assert_eq!(stats.char_count(), 5);
}

#[test]
fn test_mid_read_failure_yields_no_result() {
    let source = MockFileSource::failing(10);
    let err = analyze_with(&source, "broken.txt").unwrap_err();

    assert!(matches!(err, ReadError::Io { .. }));
    assert_eq!(err.path(), Path::new("broken.txt"));
    assert!(err.to_string().contains("mock device failure"));
}

#[test]
fn test_permission_denied_stops_before_reading() {
    let err = analyze_with(&DeniedSource, "secret.txt").unwrap_err();
    assert!(matches!(err, ReadError::PermissionDenied { .. }));
}

#[cfg(unix)]
#[test]
fn test_std_source_unreadable_file() {
    use file_stats_engine::StdFileSource;
    use std::fs::{self, File, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let file = tempfile::NamedTempFile::new().unwrap();
    fs::write(file.path(), "secret\n").unwrap();
    fs::set_permissions(file.path(), Permissions::from_mode(0o000)).unwrap();

    // root ignores mode bits
    if File::open(file.path()).is_ok() {
        return;
    }

    let err = StdFileSource.read_lines(file.path()).unwrap_err();
    assert!(matches!(err, ReadError::PermissionDenied { .. }));
    assert_eq!(err.path(), file.path());

    fs::set_permissions(file.path(), Permissions::from_mode(0o600)).unwrap();
}

#[test]
fn test_analyzer_with_source_reads_each_call() {
    let analyzer = FileStatsAnalyzer::with_source(MockFileSource::with_lines(
        24,
        &["the quick", "brown   fox", ""],
    ));

    let first = analyzer.analyze("fox.txt").unwrap();
    let second = analyzer.analyze("fox.txt").unwrap();

    assert_eq!(first, second);
    assert_eq!(first.line_count(), 3);
    assert_eq!(first.word_count(), 4);
    assert_eq!(first.char_count(), 16);
    assert!((first.avg_word_length() - 4.0).abs() < f64::EPSILON);
    assert_eq!(first.longest_word(), "quick");
    assert_eq!(first.path(), PathBuf::from("fox.txt"));
}

#[test]
fn test_trait_object_source() {
    let source: Box<dyn FileSource> = Box::new(MockFileSource::with_lines(3, &["a b"]));
    let stats = analyze_with(source.as_ref(), "obj.txt").unwrap();
    assert_eq!(stats.word_count(), 2);
}
