//! Emit a properties store back to lines.
//!
//! Every entry of the store's line order becomes exactly one output line:
//! verbatim lines are reproduced unchanged, key-only entries emit the key,
//! and pairs emit `key`, the separator, and the value. Without padding, an
//! unmodified store emits its input lines exactly.

use std::fmt;
use std::slice;

use crate::properties::{OrderRef, Properties};
use crate::value::Value;

/// Lazy iterator over emitted lines. Created by [`Properties::emit`].
#[derive(Debug, Clone)]
pub struct Emit<'a> {
    props: &'a Properties,
    separator: String,
    order: slice::Iter<'a, OrderRef>,
}

impl Emit<'_> {
    fn render(&self, entry: &OrderRef) -> String {
        match entry {
            OrderRef::Verbatim(line) => line.clone(),
            OrderRef::Pair { key, index } => {
                let value = self
                    .props
                    .values
                    .get(key)
                    .and_then(|values| values.get(*index));
                match value {
                    Some(Value::Text(value)) => format!("{}{}{}", key, self.separator, value),
                    Some(Value::Present) => key.clone(),
                    None => unreachable!(
                        "line order refers to missing value {:?}[{}]",
                        key, index
                    ),
                }
            }
        }
    }
}

impl<'a> Iterator for Emit<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let entry = self.order.next()?;
        Some(self.render(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl ExactSizeIterator for Emit<'_> {}

impl Properties {
    /// Lines of this store, in order.
    ///
    /// With `pad_separator`, pairs are written as `key = value` instead of
    /// `key=value` (for the configured separator).
    pub fn emit(&self, pad_separator: bool) -> Emit<'_> {
        let separator = if pad_separator {
            format!(" {} ", self.options.separator)
        } else {
            self.options.separator.clone()
        };
        Emit {
            props: self,
            separator,
            order: self.order.iter(),
        }
    }

    /// Lines of this store collected into a vector.
    pub fn emit_vec(&self, pad_separator: bool) -> Vec<String> {
        self.emit(pad_separator).collect()
    }
}

/// Writes the unpadded lines joined by `\n`.
impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.emit(false).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
