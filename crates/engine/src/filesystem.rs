use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{ReadError, Result};

/// Filesystem access needed by the analyzer.
pub trait FileSource {
    /// Exact byte length of a regular file, taken from its metadata.
    fn byte_len(&self, path: &Path) -> Result<u64>;

    /// The file's lines in order, with terminators removed.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// [`FileSource`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSource;

impl FileSource for StdFileSource {
    fn byte_len(&self, path: &Path) -> Result<u64> {
        let meta = fs::metadata(path).map_err(|e| ReadError::from_io(path, e))?;
        if !meta.is_file() {
            return Err(ReadError::NotRegularFile {
                path: path.to_path_buf(),
            });
        }
        Ok(meta.len())
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        // reader (and the file handle) is dropped on every return path
        let file = File::open(path).map_err(|e| ReadError::from_io(path, e))?;
        let mut reader = BufReader::new(file);
        read_lines_lossy(&mut reader).map_err(|e| ReadError::from_io(path, e))
    }
}

/// Split a reader into lines ending at `\n`, `\r`, or `\r\n`.
///
/// `\r\n` is a single terminator even when the two bytes land in different
/// buffer fills. Invalid UTF-8 is replaced rather than rejected, so binary
/// input produces (meaningless) lines instead of an error. A final line
/// without a terminator is still returned; empty input yields no lines.
pub fn read_lines_lossy<R: BufRead>(reader: &mut R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut line_buf = Vec::new();
    // previous fill ended in '\r'; a leading '\n' belongs to it
    let mut skip_lf = false;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let len = buf.len();
        let mut start = 0;
        if skip_lf && buf[0] == b'\n' {
            start = 1;
        }
        skip_lf = false;

        let mut i = start;
        while i < len {
            match buf[i] {
                b'\n' => {
                    line_buf.extend_from_slice(&buf[start..i]);
                    lines.push(take_line(&mut line_buf));
                    start = i + 1;
                }
                b'\r' => {
                    line_buf.extend_from_slice(&buf[start..i]);
                    lines.push(take_line(&mut line_buf));
                    if i + 1 == len {
                        skip_lf = true;
                    } else if buf[i + 1] == b'\n' {
                        i += 1;
                    }
                    start = i + 1;
                }
                _ => {}
            }
            i += 1;
        }
        line_buf.extend_from_slice(&buf[start..]);
        reader.consume(len);
    }

    if !line_buf.is_empty() {
        lines.push(take_line(&mut line_buf));
    }

    Ok(lines)
}

fn take_line(line_buf: &mut Vec<u8>) -> String {
    let line = String::from_utf8_lossy(line_buf).into_owned();
    line_buf.clear();
    line
}
