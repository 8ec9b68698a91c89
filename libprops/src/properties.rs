//! The properties store.
//!
//! Parsed entries live in two coupled structures:
//! - `values`: key to every value recorded for it, in input order
//! - `order`: one reference per emitted line, either a verbatim line or a
//!   (key, occurrence index) pair
//!
//! Lookups go through `values`; emission walks `order`.

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, trace, warn};

use crate::case::KeyCase;
use crate::classify::{classify, Line};
use crate::error::Result;
use crate::options::{Options, PropertiesBuilder};
use crate::source::split_contents;
use crate::value::Value;

/// One emitted line: a verbatim line or an occurrence of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OrderRef {
    Verbatim(String),
    Pair { key: String, index: usize },
}

/// An ordered, multi-valued properties map that remembers its source lines.
///
/// # Example
///
/// ```
/// use libprops::Properties;
///
/// let mut props = Properties::from_contents("# app\nname = demo\ndebug");
/// assert_eq!(props.get("name"), Some("demo"));
/// assert!(props.get_all("debug")[0].is_present());
///
/// props.set("name", Some("prod"));
/// assert_eq!(props.to_string(), "# app\nname=prod\ndebug");
/// ```
#[derive(Debug, Clone)]
pub struct Properties {
    pub(crate) options: Options,
    pub(crate) values: IndexMap<String, Vec<Value>>,
    pub(crate) order: Vec<OrderRef>,
    case: KeyCase,
}

impl Properties {
    /// Parse lines with default options.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_options(lines, Options::default())
    }

    /// Parse a text blob with default options.
    pub fn from_contents(contents: &str) -> Self {
        Self::from_lines(split_contents(contents))
    }

    /// Parse a file with default options.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        PropertiesBuilder::new().build_from_file(path)
    }

    /// Parse lines with the given options.
    ///
    /// # Panics
    ///
    /// Panics if `options.separator` is empty.
    pub fn with_options<I, S>(lines: I, options: Options) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        assert!(!options.separator.is_empty(), "separator must not be empty");

        let mut props = Self {
            case: KeyCase::new(options.case_insensitive),
            options,
            values: IndexMap::new(),
            order: Vec::new(),
        };

        for line in lines {
            props.push_line(line.as_ref());
        }

        debug!(
            "Parsed {} lines into {} keys",
            props.order.len(),
            props.values.len()
        );
        props
    }

    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();
        let classified = classify(trimmed, &self.options);
        let kind = classified.kind();
        let (key, value) = match classified {
            Line::Verbatim => {
                trace!("line {}: {}", self.order.len() + 1, kind);
                self.order.push(OrderRef::Verbatim(line.to_string()));
                return;
            }
            Line::Pair { key, value } => (key, Value::Text(value.to_string())),
            Line::Singleton { key } => (key.to_string(), Value::Present),
        };

        let key = self.case.canonicalize(&key);
        // Values may hold secrets; only the key is logged.
        trace!("line {}: {} {:?}", self.order.len() + 1, kind, key);
        let occurrences = self.values.entry(key.clone()).or_default();
        let index = occurrences.len();
        occurrences.push(value);
        self.order.push(OrderRef::Pair { key, index });
    }

    /// The options this store was parsed with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// First value of `key`.
    ///
    /// Returns `None` if the key is absent or its first occurrence is
    /// key-only. Use [`get_or`](Self::get_or) or
    /// [`contains_key`](Self::contains_key) to tell the two apart.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.first(key).and_then(Value::as_str)
    }

    /// First value of `key`, or `default` if the key is absent.
    ///
    /// A key-only first occurrence still reads as `None`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> Option<&'a str> {
        match self.first(key) {
            Some(value) => value.as_str(),
            None => Some(default),
        }
    }

    /// Every value of `key` in input order, or an empty slice.
    pub fn get_all(&self, key: &str) -> &[Value] {
        self.values
            .get(self.case.resolve(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(self.case.resolve(key))
    }

    fn first(&self, key: &str) -> Option<&Value> {
        self.get_all(key).first()
    }

    /// Keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Each key mapped to its first value.
    pub fn data(&self) -> IndexMap<String, Value> {
        self.values
            .iter()
            .filter_map(|(key, values)| Some((key.clone(), values.first()?.clone())))
            .collect()
    }

    /// Each key mapped to all of its values.
    pub fn all_data(&self) -> IndexMap<String, Vec<Value>> {
        self.values.clone()
    }

    /// Returns `true` if any occurrence of any key is key-only.
    pub fn any_is_singleton(&self) -> bool {
        self.values.values().flatten().any(Value::is_present)
    }

    /// Returns `true` if every occurrence of every key is key-only. An empty
    /// store counts as all key-only.
    pub fn all_are_singleton(&self) -> bool {
        self.values.values().flatten().all(Value::is_present)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Set `key` to a single value. `None` makes it a key-only entry.
    ///
    /// A new key is appended at the end. An existing key keeps the position
    /// of its first occurrence; if it occurred more than once, the later
    /// occurrences are dropped.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        self.set_with_comments(key, value, std::iter::empty::<&str>());
    }

    /// Like [`set`](Self::set), also inserting comment lines right before the
    /// first occurrence of `key`.
    ///
    /// Each comment is written as the comment marker, a space, and the text.
    /// Comments are skipped when no comment marker is configured.
    pub fn set_with_comments<I, S>(&mut self, key: &str, value: Option<&str>, comments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = self.case.canonicalize(key);
        let value = Value::from(value);

        match self.values.get_mut(&key) {
            Some(values) if values.len() == 1 => values[0] = value,
            Some(values) => {
                debug!(
                    "Collapsing {} occurrences of {:?} into one",
                    values.len(),
                    key
                );
                values.clear();
                values.push(value);
                self.order.retain(|entry| match entry {
                    OrderRef::Pair { key: k, index } => *k != key || *index == 0,
                    OrderRef::Verbatim(_) => true,
                });
            }
            None => {
                self.values.insert(key.clone(), vec![value]);
                self.order.push(OrderRef::Pair {
                    key: key.clone(),
                    index: 0,
                });
            }
        }

        let comments: Vec<String> = comments
            .into_iter()
            .map(|comment| comment.as_ref().to_string())
            .collect();
        if comments.is_empty() {
            return;
        }
        let Some(marker) = self.options.comment_marker() else {
            warn!(
                "Dropping {} comments for {:?}: no comment marker configured",
                comments.len(),
                key
            );
            return;
        };
        let lines: Vec<OrderRef> = comments
            .iter()
            .map(|comment| OrderRef::Verbatim(format!("{} {}", marker, comment)))
            .collect();

        let position = self
            .order
            .iter()
            .position(|entry| matches!(entry, OrderRef::Pair { key: k, .. } if *k == key))
            .unwrap_or(self.order.len());
        self.order.splice(position..position, lines);
    }
}

impl FromStr for Properties {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_contents(s))
    }
}
