// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use status_behavior::prelude::*;
//! ```

pub use crate::{
    Placeholders, StatusCandidates, StatusCode, StatusError, StatusFilter, StatusMap,
    StatusRecord, StatusRegistry, UNKNOWN_LABEL, async_trait, quote_identifier
};
