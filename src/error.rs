// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `domvox` library.
//!
//! This module provides the error hierarchy for the whole pipeline: value
//! validation, backend transport, reply interpretation, and registry
//! mutation. Every error here is recoverable — an instruction that fails at
//! any stage is reported and the pipeline returns to an idle state.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the model backend.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error occurred while interpreting the backend's reply.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while mutating the device registry.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The constrained field.
        field: &'static str,
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A color string does not match the `#RRGGBB` format.
    #[error("invalid color: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
}

/// Errors related to communication with the model backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// Invalid host or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to interpreting the backend's reply.
///
/// The two parse layers are kept distinct so callers can tell "the backend's
/// response wasn't well-formed" from "the backend answered but violated the
/// contract".
#[derive(Debug, Error)]
pub enum ParseError {
    /// The reply envelope is not valid JSON or lacks `message.content`.
    #[error("malformed reply envelope: {0}")]
    Envelope(String),

    /// The embedded command payload is not a valid JSON object.
    #[error("malformed command payload: {0}")]
    Payload(String),

    /// The backend reported an error inside the envelope.
    #[error("backend error: {0}")]
    Backend(String),

    /// The command verb is outside the closed enumeration.
    #[error("unknown command: {0}")]
    UnknownVerb(String),

    /// The target device is not in the schema's device enumeration.
    #[error("unknown device: {0}")]
    UnknownDevice(String),

    /// A field the verb requires is missing from the payload.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but violates its schema constraint.
    #[error("invalid {field}: {source}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// The underlying constraint violation.
        source: ValueError,
    },
}

/// Errors related to device registry mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No device is registered under the given id.
    #[error("device not found: {0}")]
    NotFound(String),

    /// The device does not carry the attribute the mutation targets.
    #[error("device {device} does not support {attribute}")]
    Unsupported {
        /// The target device id.
        device: String,
        /// The attribute the device lacks.
        attribute: &'static str,
    },

    /// The new value violates the attribute's constraint.
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            field: "brightness",
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(
            err.to_string(),
            "brightness value 150 is out of range [0, 100]"
        );
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidColor("#GGGGGG".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidColor(_))));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("value");
        assert_eq!(err.to_string(), "missing required field: value");
    }

    #[test]
    fn registry_error_display() {
        let err = RegistryError::Unsupported {
            device: "air_conditioner".to_string(),
            attribute: "color",
        };
        assert_eq!(
            err.to_string(),
            "device air_conditioner does not support color"
        );
    }

    #[test]
    fn registry_error_wraps_value_error() {
        let err: RegistryError = ValueError::OutOfRange {
            field: "temperature",
            min: 16,
            max: 30,
            actual: 40,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "temperature value 40 is out of range [16, 30]"
        );
    }
}
