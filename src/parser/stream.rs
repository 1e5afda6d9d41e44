//! Line-at-a-time reader that keeps read errors for later

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::error::CompareError;

/// Yields lines until end of input or the first read error.
///
/// A read error ends iteration just like end of input does; it is held back
/// and handed out by [`LineStream::take_error`] so the caller can tell the
/// two apart once the comparison loop is over.
///
/// Lines are read as raw bytes. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD, so such a line reaches the parser and fails there instead of
/// looking like an I/O failure.
#[derive(Debug)]
pub struct LineStream<R> {
    path: PathBuf,
    reader: R,
    buf: Vec<u8>,
    error: Option<io::Error>,
    finished: bool,
    line_number: usize,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(path: impl AsRef<Path>, reader: R) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            reader,
            buf: Vec::new(),
            error: None,
            finished: false,
            line_number: 0,
        }
    }

    /// Next line without its terminator (`\n` or `\r\n`), or `None` once the
    /// stream is exhausted or has failed.
    pub fn next_line(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                self.line_number += 1;
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
            Err(e) => {
                self.error = Some(e);
                self.finished = true;
                None
            }
        }
    }

    /// Number of lines handed out so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The read error that stopped this stream, if any
    pub fn take_error(&mut self) -> Option<CompareError> {
        self.error.take().map(|source| CompareError::StreamRead {
            path: self.path.clone(),
            source,
        })
    }
}
