//! Line sources.
//!
//! A properties store is built from a sequence of lines. Text blobs are split
//! on line feeds with [`split_contents`]; files are read lazily through
//! [`LineReader`], which can be rewound and tracks the current line number.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use crate::error::{PropertiesError, Result};

/// Line reader over a file.
pub type FileLines = LineReader<BufReader<File>>;

/// Restartable, lazily-read sequence of lines.
///
/// Each yielded line has its trailing carriage returns and line feeds
/// stripped. The underlying reader is owned by the `LineReader` and released
/// when it is dropped.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line_number: usize,
}

impl FileLines {
    /// Open a file for line-by-line reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PropertiesError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader positioned at the start of its content.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// One-based number of the line most recently yielded, or 0 before the
    /// first line. A line that failed to read still counts.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead + Seek> LineReader<R> {
    /// Seek back to the first line. Numbering restarts as well.
    pub fn rewind(&mut self) -> Result<()> {
        self.reader
            .seek(SeekFrom::Start(0))
            .map_err(|source| PropertiesError::Rewind { source })?;
        self.line_number = 0;
        Ok(())
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                let len = strip_line_ending(&line).len();
                line.truncate(len);
                Some(Ok(line))
            }
            // The failed line's bytes are consumed, so it still counts.
            Err(source) => {
                self.line_number += 1;
                Some(Err(PropertiesError::Read {
                    line: self.line_number,
                    source,
                }))
            }
        }
    }
}

/// Split a text blob into lines on `\n`, stripping trailing `\r`/`\n` from
/// each piece.
///
/// Text ending with a line feed yields a final empty line, so emitting the
/// parsed lines joined by `\n` reproduces the blob.
pub fn split_contents(contents: &str) -> impl Iterator<Item = &str> {
    contents.split('\n').map(strip_line_ending)
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
