//! Line classification.
//!
//! Each input line is one of:
//! - a verbatim line (blank, or starting with the comment marker)
//! - a key/value pair split at the first unescaped separator
//! - a key-only entry when no unescaped separator exists
//!
//! The comment marker is only significant at the start of the trimmed line.
//! A marker anywhere else is part of the key or value.

use crate::options::Options;

/// A classified line. Values and key-only keys borrow from the trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Blank or comment line, reproduced as-is.
    Verbatim,
    /// `key <separator> value`.
    Pair { key: String, value: &'a str },
    /// A key with no separator.
    Singleton { key: &'a str },
}

impl Line<'_> {
    /// Short name of the line kind, for logging.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Line::Verbatim => "verbatim",
            Line::Pair { .. } => "pair",
            Line::Singleton { .. } => "key-only",
        }
    }
}

/// Classify a trimmed line.
pub(crate) fn classify<'a>(trimmed: &'a str, options: &Options) -> Line<'a> {
    if trimmed.is_empty() {
        return Line::Verbatim;
    }
    if let Some(marker) = options.comment_marker() {
        if trimmed.starts_with(marker) {
            return Line::Verbatim;
        }
    }

    let split = match options.escape {
        Some(escape) => split_escaped(trimmed, &options.separator, escape),
        None => trimmed
            .split_once(options.separator.as_str())
            .map(|(key, value)| (key.trim_end().to_string(), value.trim_start())),
    };

    match split {
        Some((key, value)) => Line::Pair { key, value },
        None => Line::Singleton { key: trimmed },
    }
}

/// Split at the first separator not preceded by `escape`.
///
/// The escape character and the character it escapes are both kept in the
/// key, so the key emits exactly as it was read. A separator is never
/// matched at an escaped position.
///
/// The key is right-trimmed after the scan, so an escaped trailing space is
/// lost: `a\ =b` stores the key `a\`, which emits as `a\=b` and reads back
/// as the key-only entry `a\=b`.
fn split_escaped<'a>(
    trimmed: &'a str,
    separator: &str,
    escape: char,
) -> Option<(String, &'a str)> {
    let mut key = String::new();
    let mut chars = trimmed.char_indices();

    while let Some((i, ch)) = chars.next() {
        if ch == escape {
            key.push(ch);
            if let Some((_, escaped)) = chars.next() {
                key.push(escaped);
            }
            continue;
        }
        if trimmed[i..].starts_with(separator) {
            let key = key.trim_end().to_string();
            let value = trimmed[i + separator.len()..].trim_start();
            return Some((key, value));
        }
        key.push(ch);
    }

    None
}
