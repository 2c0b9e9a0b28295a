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

//! The adapter contract.
//!
//! An [`Adapter`] binds the engine to one candidate value-object type. It is
//! a stateless set of operations: it does not own candidate instances and
//! every operation must be referentially transparent (no ambient
//! configuration may change its result between calls).
//!
//! Only `capabilities`, `construct`, `equals` and `inspect` are mandatory.
//! The remaining operations have default implementations that report
//! themselves as unsupported; an adapter overrides exactly those backing the
//! capabilities it declares.

use crate::error::{AdapterError, AdapterResult};
use crate::value::Rep;

/// Outcome of comparing two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Left orders before right.
    Less,
    /// Both values occupy the same position.
    Equal,
    /// Left orders after right.
    Greater,
    /// The values do not share an order (e.g. a foreign operand).
    Incomparable,
}

impl Comparison {
    /// The outcome with the operands swapped.
    pub fn reversed(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            Self::Equal => Self::Equal,
            Self::Incomparable => Self::Incomparable,
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Less => write!(f, "less"),
            Self::Equal => write!(f, "equal"),
            Self::Greater => write!(f, "greater"),
            Self::Incomparable => write!(f, "incomparable"),
        }
    }
}

/// A value of an unrelated type.
///
/// Handed to [`Adapter::equals_foreign`] and [`Adapter::compare_foreign`]
/// for the heterogeneous-safety checks: the candidate type must cope with
/// operands it cannot possibly represent without failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Foreign(Rep);

impl Foreign {
    /// Wrap a payload of an unrelated shape.
    pub fn new(payload: Rep) -> Self {
        Self(payload)
    }

    /// The wrapped payload.
    pub fn payload(&self) -> &Rep {
        &self.0
    }
}

impl Default for Foreign {
    fn default() -> Self {
        Self(Rep::string("valcheck: value of an unrelated type"))
    }
}

/// The optional operation groups an adapter implements.
///
/// Reported by [`Adapter::capabilities`] and cross-checked against the
/// caller's descriptor at validation time, so a declared capability is a
/// checked precondition rather than a runtime probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// `compare` / `compare_foreign` are implemented.
    pub ordered: bool,
    /// `hash_value` is implemented.
    pub hashable: bool,
    /// `add` is implemented.
    pub arithmetic: bool,
    /// `negate` and `sub` are implemented.
    pub has_negate: bool,
    /// `to_representation` / `from_representation` are implemented.
    pub serializable: bool,
    /// `successor` is implemented.
    pub succ: bool,
}

impl Capabilities {
    /// No optional operations.
    pub fn none() -> Self {
        Self::default()
    }

    /// Mark `compare` as implemented.
    pub fn ordered(mut self) -> Self {
        self.ordered = true;
        self
    }

    /// Mark `hash_value` as implemented.
    pub fn hashable(mut self) -> Self {
        self.hashable = true;
        self
    }

    /// Mark `add` as implemented.
    pub fn arithmetic(mut self) -> Self {
        self.arithmetic = true;
        self
    }

    /// Mark `negate` and `sub` as implemented.
    pub fn with_negate(mut self) -> Self {
        self.has_negate = true;
        self
    }

    /// Mark the representation conversions as implemented.
    pub fn serializable(mut self) -> Self {
        self.serializable = true;
        self
    }

    /// Mark `successor` as implemented.
    pub fn succ(mut self) -> Self {
        self.succ = true;
        self
    }
}

/// Operations the engine needs from a candidate value-object type.
///
/// Raise/return conventions: `equals`, `equals_foreign`, `compare`,
/// `compare_foreign`, `hash_value` and `inspect` must return `Ok` for every
/// value drawn from the sample set; an `Err` from any of them is recorded as
/// an adapter fault. `from_representation` may return a
/// [`Representation`](crate::AdapterErrorKind::Representation) error to
/// reject malformed input. Optional operations default to
/// [`Unsupported`](crate::AdapterErrorKind::Unsupported).
pub trait Adapter: Send + Sync + 'static {
    /// The candidate type under test.
    type Instance: Send + Sync + 'static;

    /// The optional operation groups this adapter implements.
    fn capabilities(&self) -> Capabilities;

    /// Build an instance from structured arguments.
    fn construct(&self, args: &Rep) -> AdapterResult<Self::Instance>;

    /// Structural equality.
    fn equals(&self, a: &Self::Instance, b: &Self::Instance) -> AdapterResult<bool>;

    /// Equality against a value of an unrelated type.
    ///
    /// The default never considers a foreign value equal, which is the
    /// conventional behavior. Override to mirror a looser candidate type.
    fn equals_foreign(&self, _a: &Self::Instance, _foreign: &Foreign) -> AdapterResult<bool> {
        Ok(false)
    }

    /// Debug/diagnostic rendering. Must succeed for every sample,
    /// edge cases included.
    fn inspect(&self, a: &Self::Instance) -> AdapterResult<String>;

    /// Total order between two instances.
    fn compare(&self, _a: &Self::Instance, _b: &Self::Instance) -> AdapterResult<Comparison> {
        Err(AdapterError::unsupported("compare"))
    }

    /// Order against a value of an unrelated type. Expected to be
    /// [`Comparison::Incomparable`].
    fn compare_foreign(
        &self,
        _a: &Self::Instance,
        _foreign: &Foreign,
    ) -> AdapterResult<Comparison> {
        Ok(Comparison::Incomparable)
    }

    /// Structural hash.
    fn hash_value(&self, _a: &Self::Instance) -> AdapterResult<u64> {
        Err(AdapterError::unsupported("hash_value"))
    }

    /// Convert an instance to its structured representation.
    fn to_representation(&self, _a: &Self::Instance) -> AdapterResult<Rep> {
        Err(AdapterError::unsupported("to_representation"))
    }

    /// Rebuild an instance from a structured representation.
    fn from_representation(&self, _rep: &Rep) -> AdapterResult<Self::Instance> {
        Err(AdapterError::unsupported("from_representation"))
    }

    /// Addition.
    fn add(&self, _a: &Self::Instance, _b: &Self::Instance) -> AdapterResult<Self::Instance> {
        Err(AdapterError::unsupported("add"))
    }

    /// Subtraction.
    fn sub(&self, _a: &Self::Instance, _b: &Self::Instance) -> AdapterResult<Self::Instance> {
        Err(AdapterError::unsupported("sub"))
    }

    /// Additive inverse.
    fn negate(&self, _a: &Self::Instance) -> AdapterResult<Self::Instance> {
        Err(AdapterError::unsupported("negate"))
    }

    /// The next value in succession. May be unsupported for individual
    /// values (e.g. an infinity has no successor).
    fn successor(&self, _a: &Self::Instance) -> AdapterResult<Self::Instance> {
        Err(AdapterError::unsupported("successor"))
    }
}
