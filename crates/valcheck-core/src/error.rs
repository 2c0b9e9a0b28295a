// Dweve Valcheck - Value Object Conformance Engine
//
// Copyright (c) 2026 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the conformance engine.
//!
//! Two distinct failure channels exist:
//!
//! - [`AdapterError`] flows out of adapter operations. During a run it is
//!   captured as report data, never propagated.
//! - [`ConfigError`] is the only fatal error: an inconsistent descriptor or
//!   an unusable sample set aborts the run before any property executes.

use std::fmt;
use thiserror::Error;

/// The kind of failure an adapter operation signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterErrorKind {
    /// An operation that must not fail did fail.
    Fault,
    /// `from_representation` rejected malformed input. Expected and
    /// recoverable on inputs the caller marked malformed.
    Representation,
    /// The operation is not implemented by this adapter (or is undefined
    /// for the given value, e.g. the successor of an infinity).
    Unsupported,
}

impl fmt::Display for AdapterErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fault => write!(f, "AdapterFault"),
            Self::Representation => write!(f, "RepresentationError"),
            Self::Unsupported => write!(f, "UnsupportedOperation"),
        }
    }
}

/// An error signalled by an adapter operation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct AdapterError {
    /// The kind of error.
    pub kind: AdapterErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Additional context (e.g. the operation that failed).
    pub context: Option<String>,
}

impl AdapterError {
    /// Create a new error.
    pub fn new(kind: AdapterErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// An unexpected failure from an operation that must not fail.
    pub fn fault(message: impl Into<String>) -> Self {
        Self::new(AdapterErrorKind::Fault, message)
    }

    /// A rejection of malformed representation input.
    pub fn representation(message: impl Into<String>) -> Self {
        Self::new(AdapterErrorKind::Representation, message)
    }

    /// The named operation is not implemented or not defined here.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::new(AdapterErrorKind::Unsupported, operation)
    }

    /// Returns true if this is a representation rejection.
    pub fn is_representation(&self) -> bool {
        self.kind == AdapterErrorKind::Representation
    }

    /// Returns true if the operation was unsupported or undefined.
    pub fn is_unsupported(&self) -> bool {
        self.kind == AdapterErrorKind::Unsupported
    }
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// A fatal setup-time error.
///
/// Raised while validating the capability descriptor against the adapter
/// and the sample set. No report is produced when validation fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A capability is declared but the adapter does not implement the
    /// operation backing it.
    #[error("capability `{capability}` is declared but the adapter does not implement `{operation}`")]
    MissingOperation {
        /// The declared capability flag.
        capability: &'static str,
        /// The adapter operation it requires.
        operation: &'static str,
    },

    /// The sample set is too small for meaningful checks.
    #[error("sample set needs at least {needed} value samples, got {got}")]
    NotEnoughSamples {
        /// Minimum number of value samples.
        needed: usize,
        /// Number of value samples supplied.
        got: usize,
    },

    /// All supplied value samples are equal to each other.
    #[error("sample set must contain at least two logically distinct values")]
    IndistinctSamples,

    /// A verifier configuration knob is out of range.
    #[error("invalid verifier configuration: {0}")]
    InvalidConfig(String),

    /// The adapter failed while the sample set was being validated.
    #[error("adapter failed during validation: {0}")]
    AdapterFailure(AdapterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== AdapterError tests ====================

    #[test]
    fn test_adapter_error_display() {
        let err = AdapterError::fault("hash panicked");
        assert_eq!(format!("{}", err), "AdapterFault: hash panicked");
    }

    #[test]
    fn test_representation_error_display() {
        let err = AdapterError::representation("negative amount");
        assert_eq!(format!("{}", err), "RepresentationError: negative amount");
    }

    #[test]
    fn test_unsupported_display() {
        let err = AdapterError::unsupported("compare");
        assert_eq!(format!("{}", err), "UnsupportedOperation: compare");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(AdapterError::representation("x").is_representation());
        assert!(!AdapterError::fault("x").is_representation());
        assert!(AdapterError::unsupported("x").is_unsupported());
        assert!(!AdapterError::representation("x").is_unsupported());
    }

    #[test]
    fn test_with_context() {
        let err = AdapterError::fault("boom").with_context("equals");
        assert_eq!(err.context.as_deref(), Some("equals"));
    }

    #[test]
    fn test_adapter_error_clone_eq() {
        let err = AdapterError::fault("boom");
        assert_eq!(err.clone(), err);
    }

    // ==================== ConfigError tests ====================

    #[test]
    fn test_missing_operation_display() {
        let err = ConfigError::MissingOperation {
            capability: "ordered",
            operation: "compare",
        };
        let msg = format!("{}", err);
        assert!(msg.contains("ordered"));
        assert!(msg.contains("compare"));
    }

    #[test]
    fn test_not_enough_samples_display() {
        let err = ConfigError::NotEnoughSamples { needed: 2, got: 1 };
        assert_eq!(
            format!("{}", err),
            "sample set needs at least 2 value samples, got 1"
        );
    }

    #[test]
    fn test_adapter_failure_wraps_source() {
        let err = ConfigError::AdapterFailure(AdapterError::fault("boom"));
        assert!(format!("{}", err).contains("AdapterFault: boom"));
    }
}
