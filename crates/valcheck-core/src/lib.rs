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

//! Core data model and adapter contract for the Valcheck conformance engine.
//!
//! This crate holds everything a caller binds before a run:
//!
//! - [`Adapter`]: the operation set the engine uses to probe one candidate
//!   value-object type.
//! - [`Capabilities`] / [`Descriptor`]: what the adapter implements versus
//!   what the caller declares; mismatches are setup-time [`ConfigError`]s.
//! - [`Rep`]: the structured representation values exchanged with adapters.
//! - [`SampleSet`]: the ordered representative values and edge cases.
//!
//! The property suite and the verifier itself live in `valcheck-laws`.
//!
//! # Example
//!
//! ```rust
//! use valcheck_core::{Rep, Sample, SampleKind, SampleSet};
//!
//! let samples = SampleSet::new()
//!     .value("one_meter", Rep::map([
//!         ("amount", Rep::Int(1)),
//!         ("unit", Rep::string("m")),
//!     ]))
//!     .value("two_meters", Rep::map([
//!         ("amount", Rep::Int(2)),
//!         ("unit", Rep::string("m")),
//!     ]))
//!     .malformed("missing_unit", Rep::map([("amount", Rep::Int(1))]));
//!
//! assert_eq!(samples.value_count(), 2);
//! assert_eq!(samples.samples()[2].kind(), SampleKind::Malformed);
//! assert_eq!(Sample::value("x", Rep::Null).label(), "x");
//! ```

mod adapter;
mod descriptor;
mod error;
mod sample;
mod value;

pub use adapter::{Adapter, Capabilities, Comparison, Foreign};
pub use descriptor::{ArithmeticSpec, Descriptor};
pub use error::{AdapterError, AdapterErrorKind, AdapterResult, ConfigError};
pub use sample::{Sample, SampleKind, SampleSet};
pub use value::Rep;
