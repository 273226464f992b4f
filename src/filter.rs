// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query-scope condition for the backing status column.
//!
//! [`StatusFilter`] describes an equality condition; rendering it produces a
//! `column = $n` fragment plus the code as a bound parameter. The value is
//! never interpolated into the SQL text. Placeholder numbering comes from a
//! caller-owned [`Placeholders`] counter, so concurrent hosts never share
//! numbering state.

use crate::code::StatusCode;

/// Call-scoped `$n` placeholder counter.
///
/// One instance per query under construction; positions start at `$1`.
///
/// # Example
///
/// ```rust
/// use status_behavior::Placeholders;
///
/// let mut placeholders = Placeholders::new();
///
/// assert_eq!(placeholders.next(), "$1");
/// assert_eq!(placeholders.next(), "$2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    position: usize
}

impl Placeholders {
    /// Create a counter starting at `$1`.
    pub const fn new() -> Self {
        Self {
            position: 1
        }
    }

    /// Next placeholder, advancing the counter.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> String {
        let n = self.position;
        self.position += 1;

        format!("${}", n)
    }

    /// Position the next placeholder will take.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a column identifier for inclusion in SQL text.
///
/// Wraps in double quotes and doubles embedded quotes. Identifiers come
/// from behavior configuration, not user input, but quoting keeps reserved
/// words and mixed-case columns working.
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Equality condition constraining the backing column to one code.
///
/// # Example
///
/// ```rust
/// use status_behavior::{Placeholders, StatusFilter};
///
/// let filter = StatusFilter::new("status", 1);
/// let mut placeholders = Placeholders::new();
/// let (sql, param) = filter.condition(&mut placeholders);
///
/// assert_eq!(sql, "\"status\" = $1");
/// assert_eq!(param.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    column: String,
    code:   StatusCode
}

impl StatusFilter {
    /// Create a condition on `column` for `code`.
    pub fn new(column: impl Into<String>, code: impl Into<StatusCode>) -> Self {
        Self {
            column: column.into(),
            code:   code.into()
        }
    }

    /// The constrained column.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The code to bind.
    pub const fn code(&self) -> &StatusCode {
        &self.code
    }

    /// Render the condition text and yield the parameter to bind.
    ///
    /// # Arguments
    ///
    /// * `placeholders` — Counter owned by the query under construction
    pub fn condition(&self, placeholders: &mut Placeholders) -> (String, StatusCode) {
        let sql = format!(
            "{} = {}",
            quote_identifier(&self.column),
            placeholders.next()
        );

        (sql, self.code.clone())
    }
}

#[cfg(feature = "postgres")]
mod postgres_impl {
    use sqlx::{Postgres, QueryBuilder};

    use super::*;

    impl StatusFilter {
        /// Append this condition to a PostgreSQL query builder.
        ///
        /// The code is attached via `push_bind`, so the builder's own
        /// argument counter assigns the placeholder.
        ///
        /// # Example
        ///
        /// ```rust,ignore
        /// let mut builder = QueryBuilder::new("SELECT * FROM post WHERE ");
        /// registry.filter(1).push_to(&mut builder);
        /// ```
        pub fn push_to(&self, builder: &mut QueryBuilder<'_, Postgres>) {
            builder.push(quote_identifier(&self.column));
            builder.push(" = ");

            match &self.code {
                StatusCode::Index(i) => builder.push_bind(*i),
                StatusCode::Name(name) => builder.push_bind(name.clone())
            };
        }
    }
}
