// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Capability trait for the owning record.
//!
//! The registry never talks to a database. It reads and writes one named
//! attribute through this trait and delegates persistence to the host's
//! partial-save contract. Implement it on the record type (or on a thin
//! adapter over the host framework's generic attribute accessor).

use async_trait::async_trait;

use crate::code::StatusCode;

/// Host record seam for the status behavior.
///
/// # Example
///
/// ```rust,ignore
/// use status_behavior::prelude::*;
///
/// #[async_trait]
/// impl StatusRecord for Post {
///     type Error = sqlx::Error;
///
///     fn get(&self, field: &str) -> Option<StatusCode> {
///         self.attributes.get(field).cloned()
///     }
///
///     fn set(&mut self, field: &str, value: StatusCode) {
///         self.attributes.insert(field.to_owned(), value);
///     }
///
///     async fn save(&mut self, only: &[&str]) -> Result<bool, Self::Error> {
///         self.persist_fields(only).await
///     }
/// }
/// ```
#[async_trait]
pub trait StatusRecord: Send {
    /// Error type for save operations.
    type Error: std::error::Error + Send + Sync;

    /// Read the attribute named `field`, `None` when unset.
    fn get(&self, field: &str) -> Option<StatusCode>;

    /// Write `value` into the attribute named `field`.
    fn set(&mut self, field: &str, value: StatusCode);

    /// Persist only the listed attributes, leaving all others untouched.
    ///
    /// Returns whether the save succeeded, mirroring the host layer's save
    /// semantics.
    async fn save(&mut self, only: &[&str]) -> Result<bool, Self::Error>;
}
