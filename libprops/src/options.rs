//! Parser options and the fluent builder that collects them.

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::source::{split_contents, FileLines, LineReader};
use crate::Properties;

/// Syntax options for parsing and emitting properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Delimiter between key and value. Must not be empty.
    pub separator: String,
    /// Marker that turns a line into a comment when it starts the trimmed
    /// line. `None` disables comments; blank lines are still kept verbatim.
    pub comment: Option<String>,
    /// Escape character for literal separators inside keys. `None` splits at
    /// the first separator.
    pub escape: Option<char>,
    /// Fold key casing to the first-seen spelling.
    pub case_insensitive: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: "=".to_string(),
            comment: Some("#".to_string()),
            escape: Some('\\'),
            case_insensitive: false,
        }
    }
}

impl Options {
    /// The comment marker, treating an empty marker as none.
    pub(crate) fn comment_marker(&self) -> Option<&str> {
        self.comment.as_deref().filter(|marker| !marker.is_empty())
    }
}

/// Fluent builder for [`Properties`].
///
/// # Example
///
/// ```
/// use libprops::PropertiesBuilder;
///
/// let props = PropertiesBuilder::new()
///     .separator(":")
///     .comment(Some("//"))
///     .case_insensitive(true)
///     .build_from_contents("// greeting\nHello: world");
///
/// assert_eq!(props.get("hello"), Some("world"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesBuilder {
    options: Options,
}

impl PropertiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key/value separator.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    pub fn separator(mut self, separator: &str) -> Self {
        assert!(!separator.is_empty(), "separator must not be empty");
        self.options.separator = separator.to_string();
        self
    }

    pub fn comment(mut self, comment: Option<&str>) -> Self {
        self.options.comment = comment.map(String::from);
        self
    }

    pub fn escape(mut self, escape: Option<char>) -> Self {
        self.options.escape = escape;
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.options.case_insensitive = case_insensitive;
        self
    }

    /// The options collected so far.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Build from a sequence of lines.
    pub fn build<I, S>(self, lines: I) -> Properties
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Properties::with_options(lines, self.options)
    }

    /// Build from a sequence of lines that may fail to be read. Stops at the
    /// first error.
    pub fn try_build<I, S>(self, lines: I) -> Result<Properties>
    where
        I: IntoIterator<Item = Result<S>>,
        S: AsRef<str>,
    {
        let lines = lines.into_iter().collect::<Result<Vec<S>>>()?;
        Ok(self.build(lines))
    }

    /// Build from a text blob split on line feeds.
    pub fn build_from_contents(self, contents: &str) -> Properties {
        self.build(split_contents(contents))
    }

    /// Build from a file. The file is closed once every line has been read.
    pub fn build_from_file<P: AsRef<Path>>(self, path: P) -> Result<Properties> {
        self.try_build(FileLines::open(path)?)
    }

    /// Build from any buffered reader.
    pub fn build_from_reader<R: BufRead>(self, reader: R) -> Result<Properties> {
        self.try_build(LineReader::new(reader))
    }
}
