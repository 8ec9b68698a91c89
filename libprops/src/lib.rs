//! Order-preserving properties-file parser.
//!
//! Parses line-oriented `key[=value]` text into a model that supports lookup
//! and limited mutation, and emits it back so that unmodified input
//! reproduces its original lines.
//!
//! # Parsing Pipeline
//!
//! 1. **Line source**: lines come from an iterator, a text blob split on line
//!    feeds, or a file read lazily through [`FileLines`].
//!
//! 2. **Classifier**: each trimmed line becomes a verbatim line (blank or
//!    comment), a key/value pair split at the first unescaped separator, or a
//!    key-only entry.
//!
//! 3. **Store**: [`Properties`] records every value of every key in input
//!    order, plus one reference per line for emission. Keys may be folded
//!    case-insensitively to their first-seen spelling.
//!
//! 4. **Emitter**: [`Properties::emit`] walks the line references and
//!    rebuilds each line.
//!
//! # Example
//!
//! ```
//! use libprops::Properties;
//!
//! let input = ["# settings", "Foo = Bar", "Foo", "Qux"];
//! let props = Properties::from_lines(input);
//!
//! assert_eq!(props.get("Foo"), Some("Bar"));
//! assert_eq!(props.get_all("Foo").len(), 2);
//! assert!(props.any_is_singleton());
//! assert_eq!(
//!     props.emit_vec(false),
//!     vec!["# settings", "Foo=Bar", "Foo", "Qux"]
//! );
//! ```

mod case;
mod classify;
mod emit;
mod error;
mod options;
mod properties;
mod source;
mod value;

pub use emit::Emit;
pub use error::{PropertiesError, Result};
pub use options::{Options, PropertiesBuilder};
pub use properties::Properties;
pub use source::{split_contents, FileLines, LineReader};
pub use value::Value;
