// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The status registry behavior.
//!
//! [`StatusRegistry`] is a composed value holder owned by the persisted
//! record. It keeps the allowed status set, the currently selected code, and
//! the derived label, and pushes assignments through the record's
//! [`StatusRecord`] seam. It is not a state machine: any code in the mapping
//! is reachable from any other, allowed-value checking is the only gate.

use std::fmt;

use crate::{
    code::{StatusCandidates, StatusCode},
    error::StatusError,
    filter::StatusFilter,
    map::StatusMap,
    record::StatusRecord
};

/// Label reported for unset or unmapped codes.
///
/// Persisted data is trusted as-is: historical rows may predate a status-set
/// change, so unknown codes degrade to this sentinel instead of failing.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Status behavior for a persisted record.
///
/// Manages one named attribute (the backing field) holding a status code,
/// validated against an ordered code-to-label mapping.
///
/// # Example
///
/// ```rust
/// use status_behavior::{StatusCode, StatusRegistry};
///
/// let mut registry = StatusRegistry::new("status")?;
///
/// // Populated from storage: trusted, degrades to "unknown" when unmapped.
/// registry.load_status(5);
/// assert_eq!(registry.status(), Some(&StatusCode::Index(5)));
/// assert_eq!(registry.status_text(), "unknown");
/// # Ok::<(), status_behavior::StatusError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    field:    String,
    statuses: StatusMap,
    current:  Option<StatusCode>,
    label:    String
}

impl StatusRegistry {
    /// Create a registry over the backing attribute `field` with the
    /// built-in default status set.
    ///
    /// # Errors
    ///
    /// [`StatusError::Configuration`] when `field` is empty.
    pub fn new(field: impl Into<String>) -> Result<Self, StatusError> {
        Self::with_statuses(field, StatusMap::defaults())
    }

    /// Create a registry with an explicit status set.
    ///
    /// An empty mapping falls back to the built-in default set, the same
    /// leniency [`set_statuses`](Self::set_statuses) applies.
    ///
    /// # Arguments
    ///
    /// * `field` — Name of the backing attribute, must be non-empty
    /// * `statuses` — Ordered code-to-label mapping
    ///
    /// # Errors
    ///
    /// [`StatusError::Configuration`] when `field` is empty.
    pub fn with_statuses(
        field: impl Into<String>,
        statuses: StatusMap
    ) -> Result<Self, StatusError> {
        let field = field.into();

        if field.is_empty() {
            return Err(StatusError::Configuration {
                property: "status_field"
            });
        }

        let mut registry = Self {
            field,
            statuses: StatusMap::new(),
            current: None,
            label: UNKNOWN_LABEL.to_owned()
        };
        registry.set_statuses(statuses);

        Ok(registry)
    }

    /// Name of the backing attribute.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The current status set.
    pub const fn statuses(&self) -> &StatusMap {
        &self.statuses
    }

    /// Replace the whole status set.
    ///
    /// An empty mapping silently resets to the built-in defaults instead of
    /// failing. This mirrors the original behavior contract; callers that
    /// need strictness should check [`StatusMap::is_empty`] beforehand.
    ///
    /// The label of the current code is recomputed against the new mapping,
    /// degrading to [`UNKNOWN_LABEL`] when the code is no longer mapped.
    pub fn set_statuses(&mut self, statuses: StatusMap) -> &mut Self {
        self.statuses = if statuses.is_empty() {
            StatusMap::defaults()
        } else {
            statuses
        };

        if let Some(current) = &self.current {
            self.label = self
                .statuses
                .label(current)
                .unwrap_or(UNKNOWN_LABEL)
                .to_owned();
        }

        self
    }

    /// Currently selected code, `None` until set or loaded.
    pub const fn status(&self) -> Option<&StatusCode> {
        self.current.as_ref()
    }

    /// Label for the current code, [`UNKNOWN_LABEL`] when unset or unmapped.
    pub fn status_text(&self) -> &str {
        &self.label
    }

    /// Assign a status by code or by label.
    ///
    /// Resolution order: `value` as a direct key of the mapping; else an
    /// exact label match (first matching code in insertion order); else
    /// failure. On success the resolved code is written to the backing
    /// attribute on `record`, the only side effect.
    ///
    /// A failed assignment leaves the prior state untouched.
    ///
    /// # Arguments
    ///
    /// * `value` — Status code or label
    /// * `record` — Owning record receiving the attribute write
    ///
    /// # Errors
    ///
    /// [`StatusError::InvalidStatus`] when `value` matches neither a code
    /// nor a label.
    pub fn set_status<R: StatusRecord>(
        &mut self,
        value: impl Into<StatusCode>,
        record: &mut R
    ) -> Result<&mut Self, StatusError> {
        let value = value.into();

        let code = if self.statuses.contains(&value) {
            value
        } else {
            let resolved = match &value {
                StatusCode::Name(label) => self.statuses.code_for_label(label),
                StatusCode::Index(_) => None
            };

            resolved.cloned().ok_or_else(|| StatusError::InvalidStatus {
                value: value.to_string()
            })?
        };

        self.label = self
            .statuses
            .label(&code)
            .unwrap_or(UNKNOWN_LABEL)
            .to_owned();
        record.set(&self.field, code.clone());
        self.current = Some(code);

        Ok(self)
    }

    /// Adopt a raw persisted code without validation.
    ///
    /// The label is looked up in the mapping and degrades to
    /// [`UNKNOWN_LABEL`] for unmapped codes. Never fails.
    pub fn load_status(&mut self, raw: impl Into<StatusCode>) -> &mut Self {
        let raw = raw.into();

        self.label = self
            .statuses
            .label(&raw)
            .unwrap_or(UNKNOWN_LABEL)
            .to_owned();
        self.current = Some(raw);

        self
    }

    /// Load the status from the record's backing attribute.
    ///
    /// Wire this to the host framework's after-load hook. A missing
    /// attribute leaves the current code unset and the label at
    /// [`UNKNOWN_LABEL`].
    pub fn load_from<R: StatusRecord>(&mut self, record: &R) -> &mut Self {
        match record.get(&self.field) {
            Some(raw) => self.load_status(raw),
            None => {
                self.current = None;
                self.label = UNKNOWN_LABEL.to_owned();
                self
            }
        }
    }

    /// Check whether the record's backing attribute holds one of
    /// `candidates`.
    ///
    /// Pure predicate: an unset attribute or an empty candidate set is
    /// simply `false`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// if registry.has_status(&post, "published,archived") {
    ///     // visible to readers
    /// }
    /// ```
    pub fn has_status<R: StatusRecord>(
        &self,
        record: &R,
        candidates: impl Into<StatusCandidates>
    ) -> bool {
        let candidates = candidates.into();

        record
            .get(&self.field)
            .is_some_and(|code| candidates.contains(&code))
    }

    /// Build an equality condition on the backing column for `code`.
    ///
    /// The code travels as a bound parameter, never interpolated into SQL.
    pub fn filter(&self, code: impl Into<StatusCode>) -> StatusFilter {
        StatusFilter::new(self.field.clone(), code)
    }

    /// Persist only the backing status attribute through the record's
    /// partial-save contract.
    ///
    /// # Errors
    ///
    /// Whatever the host persistence layer reports.
    pub async fn save_status<R: StatusRecord>(&self, record: &mut R) -> Result<bool, R::Error> {
        record.save(&[self.field.as_str()]).await
    }
}

impl fmt::Display for StatusRegistry {
    /// Renders the current code, empty when unset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.current {
            Some(code) => code.fmt(f),
            None => Ok(())
        }
    }
}
