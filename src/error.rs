// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for the status behavior.

use std::fmt;

/// Error type for status behavior operations.
///
/// Only two operations can fail: attaching the behavior without a backing
/// field name, and assigning a value that is neither a code nor a label of
/// the current mapping. Everything else degrades gracefully instead of
/// failing (see [`StatusRegistry::load_status`]).
///
/// [`StatusRegistry::load_status`]: crate::StatusRegistry::load_status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// Required configuration is missing at construction time.
    Configuration {
        /// Name of the missing property.
        property: &'static str
    },

    /// Assigned value matches neither a code nor a label of the mapping.
    InvalidStatus {
        /// The offending value, rendered for display.
        value: String
    }
}

impl StatusError {
    /// Check if this is a configuration error.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Check if this is an invalid status value error.
    pub const fn is_invalid_status(&self) -> bool {
        matches!(self, Self::InvalidStatus { .. })
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                property
            } => {
                write!(f, "property \"{}\" is not defined", property)
            }
            Self::InvalidStatus {
                value
            } => write!(f, "status \"{}\" is not allowed", value)
        }
    }
}

impl std::error::Error for StatusError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_display() {
        let err = StatusError::Configuration {
            property: "status_field"
        };

        assert_eq!(err.to_string(), "property \"status_field\" is not defined");
    }

    #[test]
    fn invalid_status_display() {
        let err = StatusError::InvalidStatus {
            value: "removed".to_owned()
        };

        assert_eq!(err.to_string(), "status \"removed\" is not allowed");
    }

    #[test]
    fn is_configuration() {
        let err = StatusError::Configuration {
            property: "status_field"
        };

        assert!(err.is_configuration());
        assert!(!err.is_invalid_status());
    }

    #[test]
    fn is_invalid_status() {
        let err = StatusError::InvalidStatus {
            value: "x".to_owned()
        };

        assert!(err.is_invalid_status());
        assert!(!err.is_configuration());
    }
}
