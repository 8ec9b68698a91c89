//! Case-insensitive key aliasing.
//!
//! When enabled, every key is folded to lowercase and mapped to the spelling
//! it had the first time it was seen. That canonical spelling is what gets
//! stored and emitted.

use std::collections::HashMap;

/// One-directional cache from folded key to canonical key.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyCase {
    enabled: bool,
    canonical: HashMap<String, String>,
}

impl KeyCase {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            canonical: HashMap::new(),
        }
    }

    /// Canonical spelling for a key being written, recording `key` as the
    /// canonical spelling if its folded form is new.
    pub(crate) fn canonicalize(&mut self, key: &str) -> String {
        if !self.enabled {
            return key.to_string();
        }
        self.canonical
            .entry(key.to_lowercase())
            .or_insert_with(|| key.to_string())
            .clone()
    }

    /// Canonical spelling for a key being read. Unknown keys resolve to
    /// themselves since they cannot be stored under any other spelling.
    pub(crate) fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        if !self.enabled {
            return key;
        }
        self.canonical
            .get(&key.to_lowercase())
            .map_or(key, String::as_str)
    }
}
