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

//! Structured representation values.
//!
//! [`Rep`] is the neutral data shape the engine exchanges with adapters:
//! construction arguments, serialized representations and malformed
//! round-trip inputs are all expressed as `Rep` trees.

use std::collections::BTreeMap;

/// A structured representation value.
///
/// Used both as the argument bundle handed to [`Adapter::construct`] and as
/// the output of [`Adapter::to_representation`].
///
/// [`Adapter::construct`]: crate::Adapter::construct
/// [`Adapter::to_representation`]: crate::Adapter::to_representation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rep {
    /// Absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
    /// Ordered sequence of values.
    List(Vec<Rep>),
    /// Key-ordered mapping of field names to values.
    Map(BTreeMap<String, Rep>),
}

impl Rep {
    /// Build a map representation from key/value pairs.
    pub fn map<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Rep)>,
    {
        Self::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list representation.
    pub fn list(items: impl IntoIterator<Item = Rep>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Build a string representation.
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Rep>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Try to get the value as a list.
    pub fn as_list(&self) -> Option<&[Rep]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a field in a map representation.
    pub fn get(&self, key: &str) -> Option<&Rep> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Scramble this value in place.
    ///
    /// Used by the immutability property: after an instance has been
    /// constructed, the caller-owned argument tree is perturbed and the
    /// instance must not observe the change. The mutation only needs to be
    /// observable, not meaningful, so variants may change type.
    pub fn perturb(&mut self) {
        match self {
            Self::Null => *self = Self::Bool(true),
            Self::Bool(b) => *b = !*b,
            Self::Int(n) => *n = n.wrapping_add(1),
            // Arithmetic on non-finite or saturated floats may be a no-op,
            // so floats are replaced wholesale.
            Self::Float(_) => *self = Self::Null,
            Self::String(s) => s.push('\u{0}'),
            Self::List(items) => {
                for item in items.iter_mut() {
                    item.perturb();
                }
                items.push(Self::Null);
            }
            Self::Map(map) => {
                for value in map.values_mut() {
                    value.perturb();
                }
                map.insert("\u{0}perturbed".to_string(), Self::Null);
            }
        }
    }
}

impl std::fmt::Display for Rep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{:?}", s),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
