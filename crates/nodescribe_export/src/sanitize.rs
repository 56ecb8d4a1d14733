// SPDX-License-Identifier: MIT OR Apache-2.0
//! Identifier sanitization and unique-name allocation.
//!
//! [`sanitize_identifier`] makes a single display name usable as a Python
//! identifier; it does not make it unique. Uniqueness comes from running
//! every sanitized base through one [`NameRegistry`] per emitted tree.

use indexmap::IndexMap;

/// Python reserved words, which can never be used as identifiers
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Fallback base used for empty display names
const UNNAMED: &str = "unnamed";

/// Clean up an arbitrary display name for use as a Python identifier
///
/// Deterministic and total: every input (empty strings, pure symbols,
/// digit-leading names, reserved words) produces a valid identifier.
/// Already-clean lowercase identifiers pass through unchanged.
pub fn sanitize_identifier(raw: &str, lower: bool) -> String {
    let base = if raw.is_empty() { UNNAMED } else { raw };
    let base = if lower {
        base.to_lowercase()
    } else {
        base.to_string()
    };

    let mut cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    let starts_with_digit = cleaned
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit());
    if starts_with_digit || PYTHON_KEYWORDS.contains(&cleaned.as_str()) {
        cleaned.insert(0, '_');
    }

    cleaned
}

/// Allocator guaranteeing unique identifiers within one script scope
///
/// One registry lives per emitted tree (nested trees get their own, since
/// a nested `def` opens a fresh Python scope). Allocation order follows
/// node traversal order, so output is deterministic.
#[derive(Debug, Default)]
pub struct NameRegistry {
    counts: IndexMap<String, u32>,
}

impl NameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a name unique within this registry
    ///
    /// The first request for a base returns it unchanged; later requests
    /// append an incrementing numeric suffix. Suffixed names are recorded
    /// as taken too, so a base that already ends in `_N` (a sanitized
    /// "Math 1", say) can never collide with a later suffixed allocation.
    pub fn allocate(&mut self, base: &str) -> String {
        if !self.counts.contains_key(base) {
            self.counts.insert(base.to_string(), 0);
            return base.to_string();
        }

        let mut count = self.counts.get(base).copied().unwrap_or(0);
        let candidate = loop {
            count += 1;
            let candidate = format!("{base}_{count}");
            if !self.counts.contains_key(&candidate) {
                break candidate;
            }
        };
        self.counts.insert(base.to_string(), count);
        self.counts.insert(candidate.clone(), 0);
        candidate
    }
}
