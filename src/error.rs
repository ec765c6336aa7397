// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `fan_core` library.
//!
//! The fan state API itself is almost total: the only recoverable failure a
//! caller sees there is an unparseable speed string. The types below cover
//! value parsing and the persistence collaborators.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while reading or writing persisted fan state.
    #[error("preference error: {0}")]
    Preference(#[from] PreferenceError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// A speed string outside the accepted vocabulary was provided.
    #[error("invalid fan speed: {0}")]
    InvalidSpeed(String),
}

/// Errors raised by a [`PreferenceStore`](crate::preferences::PreferenceStore).
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Reading or writing the backing storage failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored record could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The store cannot be used right now.
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 3,
            actual: 7,
        };
        assert_eq!(err.to_string(), "value 7 is out of range [0, 3]");
    }

    #[test]
    fn invalid_speed_display() {
        let err = ValueError::InvalidSpeed("turbo".to_string());
        assert_eq!(err.to_string(), "invalid fan speed: turbo");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidSpeed("x".to_string()).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidSpeed(_))));
    }

    #[test]
    fn error_from_preference_error() {
        let err: Error = PreferenceError::Unavailable("locked".to_string()).into();
        assert_eq!(
            err.to_string(),
            "preference error: preference store unavailable: locked"
        );
    }

    #[test]
    fn preference_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PreferenceError = io.into();
        assert!(matches!(err, PreferenceError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: denied");
    }
}
