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

//! Violations and the run report.
//!
//! A [`Violation`] is data, never an exception: properties emit them, the
//! verifier aggregates them, and the host framework decides how a
//! non-passing [`Report`] translates into test failures. Both types are
//! immutable once created and serialize with `serde` so any host can
//! consume them.

use std::time::Duration;

use serde::Serialize;
use valcheck_core::AdapterError;

/// Severity of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but not a broken contract.
    Warn,
    /// A broken contract.
    Fail,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// What produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// A property assertion failed for a sample or sample tuple.
    Contract,
    /// An adapter operation that must not fail did fail.
    AdapterFault,
    /// A property execution exceeded its time bound.
    Timeout,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contract => write!(f, "contract"),
            Self::AdapterFault => write!(f, "adapter-fault"),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}

/// A recorded deviation from an expected property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    property: String,
    kind: ViolationKind,
    severity: Severity,
    samples: Vec<String>,
    message: String,
}

impl Violation {
    /// A failed contract assertion.
    pub fn fail(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            kind: ViolationKind::Contract,
            severity: Severity::Fail,
            samples: Vec::new(),
            message: message.into(),
        }
    }

    /// A suspicious outcome that is not a broken contract.
    pub fn warn(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            kind: ViolationKind::Contract,
            severity: Severity::Warn,
            samples: Vec::new(),
            message: message.into(),
        }
    }

    /// An unexpected failure from an adapter operation.
    pub fn adapter_fault(property: impl Into<String>, err: &AdapterError) -> Self {
        Self {
            property: property.into(),
            kind: ViolationKind::AdapterFault,
            severity: Severity::Fail,
            samples: Vec::new(),
            message: format!("adapter raised unexpectedly: {}", err),
        }
    }

    /// A property execution that exceeded its time bound.
    pub fn timeout(property: impl Into<String>, bound: Duration) -> Self {
        Self {
            property: property.into(),
            kind: ViolationKind::Timeout,
            severity: Severity::Fail,
            samples: Vec::new(),
            message: format!("property did not finish within {:?}", bound),
        }
    }

    /// Attach the offending sample label.
    pub fn with_sample(mut self, label: impl Into<String>) -> Self {
        self.samples.push(label.into());
        self
    }

    /// Attach the offending sample labels, in order.
    pub fn with_samples<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.samples.extend(labels.into_iter().map(Into::into));
        self
    }

    /// The property that emitted this violation.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// What produced this violation.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Severity level.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Labels of the offending samples, in order.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Human-readable description of expected versus observed behavior.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.property, self.severity, self.message)?;
        if !self.samples.is_empty() {
            write!(f, " (samples: {})", self.samples.join(", "))?;
        }
        Ok(())
    }
}

/// The outcome of one verifier run.
///
/// Violations appear in property declaration order, each property's
/// violations in sample order. Created once per run and never mutated
/// after return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    passed: bool,
    complete: bool,
    violations: Vec<Violation>,
}

impl Report {
    pub(crate) fn new(violations: Vec<Violation>, complete: bool) -> Self {
        Self {
            passed: violations.is_empty(),
            complete,
            violations,
        }
    }

    /// True when no violations were recorded.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// False only when the run was cancelled before every applicable
    /// property was scheduled.
    pub fn complete(&self) -> bool {
        self.complete
    }

    /// All violations, in declaration order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations emitted by one property.
    pub fn violations_for<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.property() == property)
    }

    /// True if any violation has severity [`Severity::Fail`].
    pub fn has_failures(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity() == Severity::Fail)
    }
}
