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

//! The capability descriptor.
//!
//! Declares which optional property groups apply to a candidate type. A
//! flag may only be set if the adapter actually implements the backing
//! operations; [`Descriptor::validate`] cross-checks the declaration once
//! at verifier setup and any mismatch is a [`ConfigError`], not a
//! violation.

use crate::adapter::Capabilities;
use crate::error::ConfigError;
use crate::value::Rep;

/// Extra knobs for the arithmetic laws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArithmeticSpec {
    /// `add` is commutative; enables the commutativity check.
    pub commutative: bool,
    /// `negate` and `sub` exist; enables the inverse-relation check
    /// `sub(a, b) == add(a, negate(b))`.
    pub has_negate: bool,
    /// Construction arguments for the additive identity, when one exists;
    /// enables the identity-element check.
    pub identity: Option<Rep>,
}

impl ArithmeticSpec {
    /// Addition only, no extra laws declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `add` commutative.
    pub fn commutative(mut self) -> Self {
        self.commutative = true;
        self
    }

    /// Declare `negate` / `sub` present.
    pub fn with_negate(mut self) -> Self {
        self.has_negate = true;
        self
    }

    /// Declare an additive identity, by its construction arguments.
    pub fn identity(mut self, args: Rep) -> Self {
        self.identity = Some(args);
        self
    }
}

/// Which optional property groups apply to the candidate type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Descriptor {
    /// Enable the ordering laws.
    pub ordered: bool,
    /// Enable the hash-consistency check.
    pub hashable: bool,
    /// Enable the arithmetic laws.
    pub arithmetic: Option<ArithmeticSpec>,
    /// Enable the round-trip check.
    pub serializable: bool,
    /// Enable the successor-monotonicity check.
    pub succ: bool,
}

impl Descriptor {
    /// No optional property groups; only the always-on checks run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the ordering laws.
    pub fn ordered(mut self) -> Self {
        self.ordered = true;
        self
    }

    /// Enable the hash-consistency check.
    pub fn hashable(mut self) -> Self {
        self.hashable = true;
        self
    }

    /// Enable the arithmetic laws.
    pub fn arithmetic(mut self, spec: ArithmeticSpec) -> Self {
        self.arithmetic = Some(spec);
        self
    }

    /// Enable the round-trip check.
    pub fn serializable(mut self) -> Self {
        self.serializable = true;
        self
    }

    /// Enable the successor-monotonicity check.
    pub fn succ(mut self) -> Self {
        self.succ = true;
        self
    }

    /// Cross-check the declaration against what the adapter implements.
    ///
    /// Runs once at verifier setup. Monotonicity is expressed through
    /// `compare`, so `succ` additionally requires the ordering operations.
    pub fn validate(&self, caps: &Capabilities) -> Result<(), ConfigError> {
        if self.ordered && !caps.ordered {
            return Err(ConfigError::MissingOperation {
                capability: "ordered",
                operation: "compare",
            });
        }
        if self.hashable && !caps.hashable {
            return Err(ConfigError::MissingOperation {
                capability: "hashable",
                operation: "hash_value",
            });
        }
        if let Some(spec) = &self.arithmetic {
            if !caps.arithmetic {
                return Err(ConfigError::MissingOperation {
                    capability: "arithmetic",
                    operation: "add",
                });
            }
            if spec.has_negate && !caps.has_negate {
                return Err(ConfigError::MissingOperation {
                    capability: "arithmetic.has_negate",
                    operation: "negate",
                });
            }
        }
        if self.serializable && !caps.serializable {
            return Err(ConfigError::MissingOperation {
                capability: "serializable",
                operation: "to_representation",
            });
        }
        if self.succ {
            if !caps.succ {
                return Err(ConfigError::MissingOperation {
                    capability: "succ",
                    operation: "successor",
                });
            }
            if !caps.ordered {
                return Err(ConfigError::MissingOperation {
                    capability: "succ",
                    operation: "compare",
                });
            }
        }
        Ok(())
    }
}
