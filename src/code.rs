// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Status code representation.
//!
//! A status is persisted either as a small integer (the common case for
//! order-indexed status sets) or as a short string. [`StatusCode`] covers
//! both without forcing a column type on the host schema.

use std::fmt;

/// Persisted representation of a status.
///
/// # Example
///
/// ```rust
/// use status_behavior::StatusCode;
///
/// let by_index = StatusCode::from(1);
/// let by_name = StatusCode::from("published");
///
/// assert_eq!(by_index.as_index(), Some(1));
/// assert_eq!(by_name.as_name(), Some("published"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StatusCode {
    /// Integer code, typically the position in an order-indexed status set.
    Index(i64),

    /// String code.
    Name(String)
}

impl StatusCode {
    /// Get the integer code, if this is an [`Index`](Self::Index).
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None
        }
    }

    /// Get the string code, if this is a [`Name`](Self::Name).
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name)
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(name) => f.write_str(name)
        }
    }
}

impl From<i64> for StatusCode {
    fn from(code: i64) -> Self {
        Self::Index(code)
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        Self::Index(i64::from(code))
    }
}

impl From<&str> for StatusCode {
    fn from(code: &str) -> Self {
        Self::Name(code.to_owned())
    }
}

impl From<String> for StatusCode {
    fn from(code: String) -> Self {
        Self::Name(code)
    }
}

/// Parse a single candidate piece: numeric text becomes an index code.
fn parse_piece(piece: &str) -> StatusCode {
    let piece = piece.trim();

    piece
        .parse::<i64>()
        .map_or_else(|_| StatusCode::Name(piece.to_owned()), StatusCode::Index)
}

/// Set of acceptable codes for membership tests.
///
/// Built from a single code, a collection of codes, or a comma-separated
/// string. The comma form is a convenience normalization: `"a,b,c"` is
/// equivalent to `["a", "b", "c"]`, with surrounding whitespace trimmed and
/// numeric pieces treated as index codes.
///
/// # Example
///
/// ```rust
/// use status_behavior::{StatusCandidates, StatusCode};
///
/// let from_str = StatusCandidates::from("draft, published");
/// let from_vec = StatusCandidates::from(vec![
///     StatusCode::from("draft"),
///     StatusCode::from("published"),
/// ]);
///
/// assert_eq!(from_str, from_vec);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCandidates(Vec<StatusCode>);

impl StatusCandidates {
    /// Check whether `code` is one of the candidates.
    pub fn contains(&self, code: &StatusCode) -> bool {
        self.0.contains(code)
    }

    /// Check if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The candidate codes, in the order they were given.
    pub fn codes(&self) -> &[StatusCode] {
        &self.0
    }
}

impl From<StatusCode> for StatusCandidates {
    fn from(code: StatusCode) -> Self {
        Self(vec![code])
    }
}

impl From<i64> for StatusCandidates {
    fn from(code: i64) -> Self {
        Self(vec![StatusCode::Index(code)])
    }
}

impl From<&str> for StatusCandidates {
    fn from(codes: &str) -> Self {
        Self(codes.split(',').map(parse_piece).collect())
    }
}

impl From<String> for StatusCandidates {
    fn from(codes: String) -> Self {
        Self::from(codes.as_str())
    }
}

impl From<Vec<StatusCode>> for StatusCandidates {
    fn from(codes: Vec<StatusCode>) -> Self {
        Self(codes)
    }
}

impl From<&[StatusCode]> for StatusCandidates {
    fn from(codes: &[StatusCode]) -> Self {
        Self(codes.to_vec())
    }
}

impl FromIterator<StatusCode> for StatusCandidates {
    fn from_iter<I: IntoIterator<Item = StatusCode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_as_index() {
        assert_eq!(StatusCode::Index(2).as_index(), Some(2));
        assert_eq!(StatusCode::from("draft").as_index(), None);
    }

    #[test]
    fn code_as_name() {
        assert_eq!(StatusCode::from("draft").as_name(), Some("draft"));
        assert_eq!(StatusCode::Index(2).as_name(), None);
    }

    #[test]
    fn code_display() {
        assert_eq!(StatusCode::Index(5).to_string(), "5");
        assert_eq!(StatusCode::from("archived").to_string(), "archived");
    }

    #[test]
    fn code_from_integers() {
        assert_eq!(StatusCode::from(3i64), StatusCode::Index(3));
        assert_eq!(StatusCode::from(3i32), StatusCode::Index(3));
    }

    #[test]
    fn candidates_from_comma_string() {
        let candidates = StatusCandidates::from("draft, published ,archived");

        assert_eq!(candidates.len(), 3);
        assert!(candidates.contains(&StatusCode::from("draft")));
        assert!(candidates.contains(&StatusCode::from("published")));
        assert!(candidates.contains(&StatusCode::from("archived")));
    }

    #[test]
    fn candidates_comma_string_matches_collection() {
        let from_str = StatusCandidates::from("a,b,c");
        let from_vec = StatusCandidates::from(vec![
            StatusCode::from("a"),
            StatusCode::from("b"),
            StatusCode::from("c"),
        ]);

        assert_eq!(from_str, from_vec);
    }

    #[test]
    fn candidates_numeric_pieces_are_indexes() {
        let candidates = StatusCandidates::from("0,1");

        assert!(candidates.contains(&StatusCode::Index(0)));
        assert!(candidates.contains(&StatusCode::Index(1)));
        assert!(!candidates.contains(&StatusCode::from("0")));
    }

    #[test]
    fn candidates_from_owned_string() {
        let owned = String::from("draft,published");

        assert_eq!(
            StatusCandidates::from(owned),
            StatusCandidates::from("draft,published")
        );
    }

    #[test]
    fn candidates_from_slice() {
        let codes = [StatusCode::from("a"), StatusCode::Index(1)];
        let candidates = StatusCandidates::from(codes.as_slice());

        assert_eq!(candidates.len(), 2);
        assert!(candidates.contains(&StatusCode::Index(1)));
    }

    #[test]
    fn candidates_from_single_code() {
        let candidates = StatusCandidates::from(StatusCode::from("draft"));

        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(&StatusCode::from("draft")));
    }

    #[test]
    fn candidates_empty_contains_nothing() {
        let candidates = StatusCandidates::default();

        assert!(candidates.is_empty());
        assert!(!candidates.contains(&StatusCode::Index(0)));
    }

    #[test]
    fn candidates_codes_keep_order() {
        let candidates = StatusCandidates::from("b,a");

        assert_eq!(
            candidates.codes(),
            &[StatusCode::from("b"), StatusCode::from("a")]
        );
    }
}
