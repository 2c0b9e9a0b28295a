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

//! Representative samples for a candidate type.
//!
//! A [`SampleSet`] is the ordered collection of construction inputs the
//! verifier exercises the property suite against. Entries need to be
//! distinct by logical value, never by identity; the engine assumes nothing
//! about physical distinctness.

use crate::value::Rep;

/// How a sample participates in the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// A regular representative value. At least two logically distinct
    /// value samples are required per run.
    Value,
    /// An edge case (boundary, infinity-like). Constructed and included in
    /// every instance-level property.
    Boundary,
    /// A representation that must not round-trip. Never constructed; only
    /// fed to `from_representation`, where rejection is the passing outcome.
    Malformed,
}

/// One labelled sample input.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    label: String,
    args: Rep,
    kind: SampleKind,
}

impl Sample {
    /// A regular representative value.
    pub fn value(label: impl Into<String>, args: Rep) -> Self {
        Self {
            label: label.into(),
            args,
            kind: SampleKind::Value,
        }
    }

    /// An edge-case value.
    pub fn boundary(label: impl Into<String>, args: Rep) -> Self {
        Self {
            label: label.into(),
            args,
            kind: SampleKind::Boundary,
        }
    }

    /// A malformed representation.
    pub fn malformed(label: impl Into<String>, args: Rep) -> Self {
        Self {
            label: label.into(),
            args,
            kind: SampleKind::Malformed,
        }
    }

    /// The diagnostic label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The construction arguments or raw representation.
    pub fn args(&self) -> &Rep {
        &self.args
    }

    /// How this sample participates in the run.
    pub fn kind(&self) -> SampleKind {
        self.kind
    }
}

/// The ordered collection of samples for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// An empty sample set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a regular value sample.
    pub fn value(mut self, label: impl Into<String>, args: Rep) -> Self {
        self.samples.push(Sample::value(label, args));
        self
    }

    /// Append an edge-case sample.
    pub fn boundary(mut self, label: impl Into<String>, args: Rep) -> Self {
        self.samples.push(Sample::boundary(label, args));
        self
    }

    /// Append a malformed representation sample.
    pub fn malformed(mut self, label: impl Into<String>, args: Rep) -> Self {
        self.samples.push(Sample::malformed(label, args));
        self
    }

    /// Append an already-built sample.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// All samples, in submission order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterate over samples in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Number of samples of every kind.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no samples were supplied.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples of kind [`SampleKind::Value`].
    pub fn value_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|s| s.kind() == SampleKind::Value)
            .count()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
