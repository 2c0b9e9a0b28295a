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

//! # Valcheck - Value Object Conformance Engine
//!
//! Valcheck verifies that a candidate value-object type actually behaves
//! like a value: lawful equality, stable construction, observable
//! immutability, and optionally lawful ordering, hashing, round-trip
//! serialization, arithmetic and succession. The candidate type is reached
//! through an [`Adapter`], so the engine never depends on the type under
//! test, only on the operations the adapter exposes.
//!
//! ## Quick Start
//!
//! ```rust
//! use valcheck::{
//!     verify, Adapter, AdapterError, AdapterResult, Capabilities, Descriptor, Rep, SampleSet,
//! };
//!
//! // The candidate: a percentage that must stay within 0..=100.
//! #[derive(Debug, Clone, PartialEq)]
//! struct Percentage(u8);
//!
//! struct PercentageAdapter;
//!
//! impl Adapter for PercentageAdapter {
//!     type Instance = Percentage;
//!
//!     fn capabilities(&self) -> Capabilities {
//!         Capabilities::none()
//!     }
//!
//!     fn construct(&self, args: &Rep) -> AdapterResult<Percentage> {
//!         args.as_int()
//!             .and_then(|n| u8::try_from(n).ok())
//!             .filter(|n| *n <= 100)
//!             .map(Percentage)
//!             .ok_or_else(|| AdapterError::representation("expected 0..=100"))
//!     }
//!
//!     fn equals(&self, a: &Percentage, b: &Percentage) -> AdapterResult<bool> {
//!         Ok(a == b)
//!     }
//!
//!     fn inspect(&self, a: &Percentage) -> AdapterResult<String> {
//!         Ok(format!("{}%", a.0))
//!     }
//! }
//!
//! let samples = SampleSet::new()
//!     .value("zero", Rep::Int(0))
//!     .value("half", Rep::Int(50))
//!     .boundary("full", Rep::Int(100));
//!
//! let report = verify(PercentageAdapter, Descriptor::new(), samples).unwrap();
//! assert!(report.passed());
//! ```
//!
//! ## Crates
//!
//! - [`valcheck_core`]: the value model, the adapter contract, samples and
//!   capability descriptors
//! - [`valcheck_laws`]: the property suite and the verifier runner
//!
//! Declared capabilities widen the suite: a [`Descriptor`] that enables
//! `ordered` pulls in the ordering laws, `hashable` the hash/equality
//! consistency check, and so on. Declaring a capability the adapter does
//! not implement is a configuration error, reported before anything runs.

// Re-export the core data model and the adapter contract.
pub use valcheck_core::{
    Adapter, AdapterError, AdapterErrorKind, AdapterResult, ArithmeticSpec, Capabilities,
    Comparison, ConfigError, Descriptor, Foreign, Rep, Sample, SampleKind, SampleSet,
};

// Re-export the property suite and the verifier.
pub use valcheck_laws::{
    default_properties, verify, verify_with_config, BoundSample, CancelToken, Gate, Property,
    PropertyContext, Report, Severity, Verifier, VerifierConfig, Violation, ViolationKind,
};
