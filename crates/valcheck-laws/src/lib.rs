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

//! Property suite and verifier for the Valcheck conformance engine.
//!
//! Given an adapter bound to a candidate value-object type, a capability
//! descriptor and a set of representative samples, the verifier exercises
//! the applicable semantic laws (equality, hashing, ordering, immutability,
//! round-trip conversion, arithmetic, succession) and aggregates every
//! deviation into a [`Report`]. Individual failures never abort the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use valcheck_core::{
//!     Adapter, AdapterError, AdapterResult, Capabilities, Descriptor, Rep, SampleSet,
//! };
//! use valcheck_laws::verify;
//!
//! struct CountAdapter;
//!
//! impl Adapter for CountAdapter {
//!     type Instance = u32;
//!
//!     fn capabilities(&self) -> Capabilities {
//!         Capabilities::none()
//!     }
//!
//!     fn construct(&self, args: &Rep) -> AdapterResult<u32> {
//!         args.as_int()
//!             .and_then(|n| u32::try_from(n).ok())
//!             .ok_or_else(|| AdapterError::representation("expected a count"))
//!     }
//!
//!     fn equals(&self, a: &u32, b: &u32) -> AdapterResult<bool> {
//!         Ok(a == b)
//!     }
//!
//!     fn inspect(&self, a: &u32) -> AdapterResult<String> {
//!         Ok(format!("Count({})", a))
//!     }
//! }
//!
//! let samples = SampleSet::new()
//!     .value("zero", Rep::Int(0))
//!     .value("one", Rep::Int(1));
//!
//! let report = verify(CountAdapter, Descriptor::new(), samples).unwrap();
//! assert!(report.passed());
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use valcheck_laws::{CancelToken, VerifierConfig};
//!
//! let config = VerifierConfig {
//!     parallel: true,
//!     property_timeout: Some(Duration::from_secs(5)),
//!     cancel: Some(CancelToken::new()),
//!     ..VerifierConfig::default()
//! };
//! assert!(config.parallel);
//! ```

mod properties;
mod verifier;
mod violation;

pub use properties::{
    default_properties, BoundSample, Gate, Property, PropertyContext,
};
pub use verifier::{CancelToken, Verifier, VerifierConfig};
pub use violation::{Report, Severity, Violation, ViolationKind};

use valcheck_core::{Adapter, ConfigError, Descriptor, SampleSet};

/// Run the built-in property suite with the default configuration.
pub fn verify<A: Adapter>(
    adapter: A,
    descriptor: Descriptor,
    samples: SampleSet,
) -> Result<Report, ConfigError> {
    Verifier::new(adapter, descriptor, samples).run()
}

/// Run the built-in property suite with a custom configuration.
pub fn verify_with_config<A: Adapter>(
    adapter: A,
    descriptor: Descriptor,
    samples: SampleSet,
    config: VerifierConfig,
) -> Result<Report, ConfigError> {
    Verifier::with_config(adapter, descriptor, samples, config).run()
}
