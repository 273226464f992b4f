// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Status attribute behavior for persisted entities.
//!
//! This crate provides [`StatusRegistry`], a value holder that manages a
//! single "status" attribute on a persisted record: an ordered mapping from
//! status codes to human-readable labels, validation of assigned values,
//! lookup by code or by label, and a query-scope helper that emits bound
//! equality conditions.
//!
//! Storage, query execution, and lifecycle-event dispatch stay with the host
//! persistence framework. The only coupling is [`StatusRecord`], a small
//! capability trait (`get`/`set`/`save`) the owning record implements.
//!
//! # Overview
//!
//! - [`StatusRegistry`] — the behavior itself, owned by the record
//! - [`StatusMap`] — ordered code-to-label mapping with built-in defaults
//! - [`StatusCode`] — integer or string persisted representation
//! - [`StatusRecord`] — capability trait injected by the host record
//! - [`StatusFilter`] — equality condition with bound parameters
//! - [`prelude`] — convenient re-exports
//!
//! # Example
//!
//! ```rust,ignore
//! use status_behavior::prelude::*;
//!
//! let mut registry = StatusRegistry::new("status")?;
//! registry.set_status("published", &mut post)?;
//! registry.save_status(&mut post).await?;
//!
//! assert!(registry.has_status(&post, "published,archived"));
//! ```
//!
//! # Features
//!
//! - `postgres` — push [`StatusFilter`] conditions onto a
//!   `sqlx::QueryBuilder` with proper parameter binding
//! - `serde` — `Serialize`/`Deserialize` for codes and mappings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod error;
pub mod filter;
pub mod map;
pub mod prelude;
pub mod record;
pub mod registry;

/// Re-export async_trait for record implementations.
pub use async_trait::async_trait;
pub use code::{StatusCandidates, StatusCode};
pub use error::StatusError;
pub use filter::{Placeholders, StatusFilter, quote_identifier};
pub use map::StatusMap;
pub use record::StatusRecord;
pub use registry::{StatusRegistry, UNKNOWN_LABEL};
