// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Ordered code-to-label mapping.
//!
//! Insertion order is significant: it defines enumeration order and breaks
//! ties when a label is resolved back to its code, so duplicate labels are
//! deterministic. The built-in default set is `{0: "draft", 1: "published",
//! 2: "archived"}`.

use crate::code::StatusCode;

/// Ordered mapping from status code to human-readable label.
///
/// # Example
///
/// ```rust
/// use status_behavior::{StatusCode, StatusMap};
///
/// let map = StatusMap::indexed(["draft", "published"]);
///
/// assert_eq!(map.label(&StatusCode::Index(1)), Some("published"));
/// assert_eq!(map.code_for_label("draft"), Some(&StatusCode::Index(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusMap {
    entries: Vec<(StatusCode, String)>
}

impl StatusMap {
    /// Create an empty mapping.
    ///
    /// An empty mapping is only an intermediate state: [`StatusRegistry`]
    /// replaces it with [`StatusMap::defaults`] on use.
    ///
    /// [`StatusRegistry`]: crate::StatusRegistry
    pub const fn new() -> Self {
        Self {
            entries: Vec::new()
        }
    }

    /// The built-in default set: draft, published, archived, indexed from 0.
    pub fn defaults() -> Self {
        Self::indexed(["draft", "published", "archived"])
    }

    /// Build an order-indexed mapping: labels get codes 0, 1, 2, ...
    ///
    /// # Arguments
    ///
    /// * `labels` — Labels in enumeration order
    pub fn indexed<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| (StatusCode::Index(i as i64), label.into()))
            .collect()
    }

    /// Insert a code/label pair.
    ///
    /// An existing code keeps its position and gets the new label; a new code
    /// is appended.
    pub fn insert(&mut self, code: impl Into<StatusCode>, label: impl Into<String>) -> &mut Self {
        let code = code.into();

        match self.entries.iter_mut().find(|(c, _)| *c == code) {
            Some((_, existing)) => *existing = label.into(),
            None => self.entries.push((code, label.into()))
        }

        self
    }

    /// Label for `code`, if the code is part of the mapping.
    pub fn label(&self, code: &StatusCode) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, label)| label.as_str())
    }

    /// First code whose label equals `label`, in insertion order.
    pub fn code_for_label(&self, label: &str) -> Option<&StatusCode> {
        self.entries
            .iter()
            .find(|(_, l)| l == label)
            .map(|(code, _)| code)
    }

    /// Check whether `code` is a key of the mapping.
    pub fn contains(&self, code: &StatusCode) -> bool {
        self.entries.iter().any(|(c, _)| c == code)
    }

    /// Check if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate code/label pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&StatusCode, &str)> {
        self.entries.iter().map(|(code, label)| (code, label.as_str()))
    }

    /// Codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &StatusCode> {
        self.entries.iter().map(|(code, _)| code)
    }
}

impl Default for StatusMap {
    /// The built-in default set, same as [`StatusMap::defaults`].
    fn default() -> Self {
        Self::defaults()
    }
}

impl<C: Into<StatusCode>, L: Into<String>> FromIterator<(C, L)> for StatusMap {
    fn from_iter<I: IntoIterator<Item = (C, L)>>(iter: I) -> Self {
        let mut map = Self::new();

        for (code, label) in iter {
            map.insert(code, label);
        }

        map
    }
}
