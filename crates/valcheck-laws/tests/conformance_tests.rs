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

//! End-to-end conformance runs against a realistic quantity-with-unit
//! adapter, plus deliberately misbehaving adapters for each failure mode.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use valcheck_core::{
    Adapter, AdapterError, AdapterResult, ArithmeticSpec, Capabilities, Comparison, ConfigError,
    Descriptor, Foreign, Rep, SampleSet,
};
use valcheck_laws::{verify, verify_with_config, Severity, VerifierConfig, ViolationKind};

// =============================================================================
// Quantity adapter: an amount with a unit, the canonical value object
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Quantity {
    amount: i64,
    unit: String,
}

struct QuantityAdapter;

impl QuantityAdapter {
    fn parse(rep: &Rep) -> AdapterResult<Quantity> {
        let amount = rep
            .get("amount")
            .and_then(Rep::as_int)
            .ok_or_else(|| AdapterError::representation("missing or non-integer `amount`"))?;
        let unit = rep
            .get("unit")
            .and_then(Rep::as_str)
            .ok_or_else(|| AdapterError::representation("missing or non-string `unit`"))?;
        if unit.is_empty() {
            return Err(AdapterError::representation("`unit` must not be empty"));
        }
        Ok(Quantity {
            amount,
            unit: unit.to_string(),
        })
    }
}

impl Adapter for QuantityAdapter {
    type Instance = Quantity;

    fn capabilities(&self) -> Capabilities {
        Capabilities::none()
            .ordered()
            .hashable()
            .arithmetic()
            .with_negate()
            .serializable()
            .succ()
    }

    fn construct(&self, args: &Rep) -> AdapterResult<Quantity> {
        Self::parse(args)
    }

    fn equals(&self, a: &Quantity, b: &Quantity) -> AdapterResult<bool> {
        Ok(a == b)
    }

    fn inspect(&self, a: &Quantity) -> AdapterResult<String> {
        Ok(format!("{} {}", a.amount, a.unit))
    }

    fn compare(&self, a: &Quantity, b: &Quantity) -> AdapterResult<Comparison> {
        if a.unit != b.unit {
            return Ok(Comparison::Incomparable);
        }
        Ok(match a.amount.cmp(&b.amount) {
            std::cmp::Ordering::Less => Comparison::Less,
            std::cmp::Ordering::Equal => Comparison::Equal,
            std::cmp::Ordering::Greater => Comparison::Greater,
        })
    }

    fn hash_value(&self, a: &Quantity) -> AdapterResult<u64> {
        let mut hasher = DefaultHasher::new();
        a.hash(&mut hasher);
        Ok(hasher.finish())
    }

    fn to_representation(&self, a: &Quantity) -> AdapterResult<Rep> {
        Ok(Rep::map([
            ("amount", Rep::Int(a.amount)),
            ("unit", Rep::string(&a.unit)),
        ]))
    }

    fn from_representation(&self, rep: &Rep) -> AdapterResult<Quantity> {
        Self::parse(rep)
    }

    fn add(&self, a: &Quantity, b: &Quantity) -> AdapterResult<Quantity> {
        if a.unit != b.unit {
            return Err(AdapterError::unsupported("add across units"));
        }
        Ok(Quantity {
            amount: a.amount + b.amount,
            unit: a.unit.clone(),
        })
    }

    fn sub(&self, a: &Quantity, b: &Quantity) -> AdapterResult<Quantity> {
        if a.unit != b.unit {
            return Err(AdapterError::unsupported("sub across units"));
        }
        Ok(Quantity {
            amount: a.amount - b.amount,
            unit: a.unit.clone(),
        })
    }

    fn negate(&self, a: &Quantity) -> AdapterResult<Quantity> {
        Ok(Quantity {
            amount: -a.amount,
            unit: a.unit.clone(),
        })
    }

    fn successor(&self, a: &Quantity) -> AdapterResult<Quantity> {
        Ok(Quantity {
            amount: a.amount + 1,
            unit: a.unit.clone(),
        })
    }
}

fn meters(amount: i64) -> Rep {
    Rep::map([("amount", Rep::Int(amount)), ("unit", Rep::string("m"))])
}

fn kilograms(amount: i64) -> Rep {
    Rep::map([("amount", Rep::Int(amount)), ("unit", Rep::string("kg"))])
}

fn meter_samples() -> SampleSet {
    SampleSet::new()
        .value("one_meter", meters(1))
        .value("two_meters", meters(2))
}

fn full_descriptor() -> Descriptor {
    Descriptor::new()
        .ordered()
        .hashable()
        .arithmetic(
            ArithmeticSpec::new()
                .commutative()
                .with_negate()
                .identity(meters(0)),
        )
        .serializable()
        .succ()
}

// =============================================================================
// Passing runs
// =============================================================================

#[test]
fn test_quantity_passes_ordered_hashable() {
    let descriptor = Descriptor::new().ordered().hashable();
    let report = verify(QuantityAdapter, descriptor, meter_samples()).unwrap();
    assert!(report.passed(), "unexpected: {:?}", report.violations());
    assert!(report.complete());
}

#[test]
fn test_quantity_passes_every_capability() {
    let samples = SampleSet::new()
        .value("one_meter", meters(1))
        .value("two_meters", meters(2))
        .value("ten_meters", meters(10))
        .boundary("negative", meters(-5))
        .malformed("missing_unit", Rep::map([("amount", Rep::Int(1))]))
        .malformed("empty_unit", Rep::map([
            ("amount", Rep::Int(1)),
            ("unit", Rep::string("")),
        ]));
    let report = verify(QuantityAdapter, full_descriptor(), samples).unwrap();
    assert!(report.passed(), "unexpected: {:?}", report.violations());
}

#[test]
fn test_mixed_units_are_incomparable_not_violations() {
    let samples = SampleSet::new()
        .value("one_meter", meters(1))
        .value("two_meters", meters(2))
        .value("one_kilogram", kilograms(1));
    let descriptor = Descriptor::new().ordered().hashable();
    let report = verify(QuantityAdapter, descriptor, samples).unwrap();
    assert!(report.passed(), "unexpected: {:?}", report.violations());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_identical_inputs_produce_identical_reports() {
    let first = verify(QuantityAdapter, full_descriptor(), meter_samples()).unwrap();
    let second = verify(QuantityAdapter, full_descriptor(), meter_samples()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_parallel_report_matches_sequential() {
    let sequential = verify(QuantityAdapter, full_descriptor(), meter_samples()).unwrap();
    let config = VerifierConfig {
        parallel: true,
        ..VerifierConfig::default()
    };
    let parallel =
        verify_with_config(QuantityAdapter, full_descriptor(), meter_samples(), config).unwrap();
    assert_eq!(sequential, parallel);
}

// =============================================================================
// Heterogeneous safety: not raising is what matters
// =============================================================================

#[test]
fn test_loose_foreign_equality_is_not_a_violation() {
    /// Considers any foreign value equal. Unconventional, but it does not
    /// raise, which is all the contract demands.
    struct Overfriendly;

    impl Adapter for Overfriendly {
        type Instance = Quantity;

        fn capabilities(&self) -> Capabilities {
            Capabilities::none()
        }

        fn construct(&self, args: &Rep) -> AdapterResult<Quantity> {
            QuantityAdapter::parse(args)
        }

        fn equals(&self, a: &Quantity, b: &Quantity) -> AdapterResult<bool> {
            Ok(a == b)
        }

        fn equals_foreign(&self, _a: &Quantity, _foreign: &Foreign) -> AdapterResult<bool> {
            Ok(true)
        }

        fn inspect(&self, a: &Quantity) -> AdapterResult<String> {
            Ok(format!("{} {}", a.amount, a.unit))
        }
    }

    let report = verify(Overfriendly, Descriptor::new(), meter_samples()).unwrap();
    assert_eq!(report.violations_for("heterogeneous-safety").count(), 0);
    assert!(report.passed());
}

#[test]
fn test_raising_foreign_equality_is_a_fault() {
    struct Fragile;

    impl Adapter for Fragile {
        type Instance = Quantity;

        fn capabilities(&self) -> Capabilities {
            Capabilities::none()
        }

        fn construct(&self, args: &Rep) -> AdapterResult<Quantity> {
            QuantityAdapter::parse(args)
        }

        fn equals(&self, a: &Quantity, b: &Quantity) -> AdapterResult<bool> {
            Ok(a == b)
        }

        fn equals_foreign(&self, _a: &Quantity, _foreign: &Foreign) -> AdapterResult<bool> {
            Err(AdapterError::fault("cannot coerce foreign value"))
        }

        fn inspect(&self, a: &Quantity) -> AdapterResult<String> {
            Ok(format!("{} {}", a.amount, a.unit))
        }
    }

    let report = verify(Fragile, Descriptor::new(), meter_samples()).unwrap();
    let faults: Vec<_> = report.violations_for("heterogeneous-safety").collect();
    assert_eq!(faults.len(), 2); // one per sample
    assert!(faults
        .iter()
        .all(|v| v.kind() == ViolationKind::AdapterFault));
    assert!(!report.passed());
}

// =============================================================================
// Hash consistency against loose equality
// =============================================================================

#[test]
fn test_loose_equals_with_strict_hash_is_flagged_once() {
    /// Two differently-tagged wrappers around the same text are "equal",
    /// but the hash still mixes the tag in.
    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        tag: String,
        text: String,
    }

    struct LooseAdapter;

    impl Adapter for LooseAdapter {
        type Instance = Tagged;

        fn capabilities(&self) -> Capabilities {
            Capabilities::none().hashable()
        }

        fn construct(&self, args: &Rep) -> AdapterResult<Tagged> {
            let tag = args
                .get("tag")
                .and_then(Rep::as_str)
                .ok_or_else(|| AdapterError::representation("missing `tag`"))?;
            let text = args
                .get("text")
                .and_then(Rep::as_str)
                .ok_or_else(|| AdapterError::representation("missing `text`"))?;
            Ok(Tagged {
                tag: tag.to_string(),
                text: text.to_string(),
            })
        }

        fn equals(&self, a: &Tagged, b: &Tagged) -> AdapterResult<bool> {
            Ok(a.text == b.text)
        }

        fn inspect(&self, a: &Tagged) -> AdapterResult<String> {
            Ok(format!("{}:{}", a.tag, a.text))
        }

        fn hash_value(&self, a: &Tagged) -> AdapterResult<u64> {
            let mut hasher = DefaultHasher::new();
            a.tag.hash(&mut hasher);
            a.text.hash(&mut hasher);
            Ok(hasher.finish())
        }
    }

    fn tagged(tag: &str, text: &str) -> Rep {
        Rep::map([("tag", Rep::string(tag)), ("text", Rep::string(text))])
    }

    let samples = SampleSet::new()
        .value("name_bob", tagged("name", "bob"))
        .value("nick_bob", tagged("nick", "bob"))
        .value("name_alice", tagged("name", "alice"));
    let report = verify(LooseAdapter, Descriptor::new().hashable(), samples).unwrap();

    assert_eq!(report.violations().len(), 1);
    let violation = &report.violations()[0];
    assert_eq!(violation.property(), "hash-consistency");
    assert_eq!(violation.samples(), ["name_bob", "nick_bob"]);
    assert_eq!(violation.severity(), Severity::Fail);
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn test_ordered_with_one_distinct_value_is_config_error() {
    let samples = SampleSet::new()
        .value("one_meter", meters(1))
        .value("still_one_meter", meters(1));
    let err = verify(QuantityAdapter, Descriptor::new().ordered(), samples).unwrap_err();
    assert_eq!(err, ConfigError::IndistinctSamples);
}

#[test]
fn test_declaring_unimplemented_capability_is_config_error() {
    struct Minimal;

    impl Adapter for Minimal {
        type Instance = Quantity;

        fn capabilities(&self) -> Capabilities {
            Capabilities::none()
        }

        fn construct(&self, args: &Rep) -> AdapterResult<Quantity> {
            QuantityAdapter::parse(args)
        }

        fn equals(&self, a: &Quantity, b: &Quantity) -> AdapterResult<bool> {
            Ok(a == b)
        }

        fn inspect(&self, a: &Quantity) -> AdapterResult<String> {
            Ok(format!("{} {}", a.amount, a.unit))
        }
    }

    let err = verify(Minimal, Descriptor::new().hashable(), meter_samples()).unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingOperation {
            capability: "hashable",
            operation: "hash_value",
        }
    );
}

// =============================================================================
// Inspection safety on edge cases
// =============================================================================

#[test]
fn test_inspect_raising_on_infinity_is_one_violation() {
    struct PartialInspect;

    impl Adapter for PartialInspect {
        type Instance = Quantity;

        fn capabilities(&self) -> Capabilities {
            Capabilities::none()
        }

        fn construct(&self, args: &Rep) -> AdapterResult<Quantity> {
            QuantityAdapter::parse(args)
        }

        fn equals(&self, a: &Quantity, b: &Quantity) -> AdapterResult<bool> {
            Ok(a == b)
        }

        fn inspect(&self, a: &Quantity) -> AdapterResult<String> {
            if a.amount == i64::MAX {
                return Err(AdapterError::fault("cannot render an infinite quantity"));
            }
            Ok(format!("{} {}", a.amount, a.unit))
        }
    }

    let samples = SampleSet::new()
        .value("one_meter", meters(1))
        .value("two_meters", meters(2))
        .boundary("infinity", meters(i64::MAX));
    let report = verify(PartialInspect, Descriptor::new(), samples).unwrap();

    let violations: Vec<_> = report.violations_for("inspection-safety").collect();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].samples(), ["infinity"]);
    assert_eq!(violations[0].kind(), ViolationKind::AdapterFault);
    assert!(!report.passed());
}

// =============================================================================
// Round-trip failures
// =============================================================================

#[test]
fn test_lossy_representation_is_flagged() {
    /// Drops the unit on the way out, so the round trip comes back wrong.
    struct Lossy;

    impl Adapter for Lossy {
        type Instance = Quantity;

        fn capabilities(&self) -> Capabilities {
            Capabilities::none().serializable()
        }

        fn construct(&self, args: &Rep) -> AdapterResult<Quantity> {
            QuantityAdapter::parse(args)
        }

        fn equals(&self, a: &Quantity, b: &Quantity) -> AdapterResult<bool> {
            Ok(a == b)
        }

        fn inspect(&self, a: &Quantity) -> AdapterResult<String> {
            Ok(format!("{} {}", a.amount, a.unit))
        }

        fn to_representation(&self, a: &Quantity) -> AdapterResult<Rep> {
            Ok(Rep::map([("amount", Rep::Int(a.amount))]))
        }

        fn from_representation(&self, rep: &Rep) -> AdapterResult<Quantity> {
            let amount = rep
                .get("amount")
                .and_then(Rep::as_int)
                .ok_or_else(|| AdapterError::representation("missing `amount`"))?;
            Ok(Quantity {
                amount,
                unit: rep
                    .get("unit")
                    .and_then(Rep::as_str)
                    .unwrap_or("m")
                    .to_string(),
            })
        }
    }

    let samples = SampleSet::new()
        .value("one_meter", meters(1))
        .value("one_kilogram", kilograms(1));
    let report = verify(Lossy, Descriptor::new().serializable(), samples).unwrap();

    // Only the kilogram sample loses information through the round trip.
    let violations: Vec<_> = report.violations_for("round-trip").collect();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].samples(), ["one_kilogram"]);
}

#[test]
fn test_accepted_malformed_representation_is_a_warning() {
    let samples = SampleSet::new()
        .value("one_meter", meters(1))
        .value("two_meters", meters(2))
        // Well-formed as far as the adapter is concerned, so it will be
        // accepted even though the caller expected rejection.
        .malformed("suspicious", meters(999));
    let report = verify(QuantityAdapter, full_descriptor(), samples).unwrap();

    let violations: Vec<_> = report.violations_for("round-trip").collect();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].severity(), Severity::Warn);
    assert_eq!(violations[0].samples(), ["suspicious"]);
    assert!(!report.passed());
    assert!(!report.has_failures());
}

// =============================================================================
// Arithmetic laws
// =============================================================================

#[test]
fn test_non_commutative_add_is_flagged() {
    /// `add` sneaks a bias onto the right operand.
    struct Biased;

    impl Adapter for Biased {
        type Instance = Quantity;

        fn capabilities(&self) -> Capabilities {
            Capabilities::none().arithmetic()
        }

        fn construct(&self, args: &Rep) -> AdapterResult<Quantity> {
            QuantityAdapter::parse(args)
        }

        fn equals(&self, a: &Quantity, b: &Quantity) -> AdapterResult<bool> {
            Ok(a == b)
        }

        fn inspect(&self, a: &Quantity) -> AdapterResult<String> {
            Ok(format!("{} {}", a.amount, a.unit))
        }

        fn add(&self, a: &Quantity, b: &Quantity) -> AdapterResult<Quantity> {
            Ok(Quantity {
                amount: a.amount + 2 * b.amount,
                unit: a.unit.clone(),
            })
        }
    }

    let descriptor = Descriptor::new().arithmetic(ArithmeticSpec::new().commutative());
    let report = verify(Biased, descriptor, meter_samples()).unwrap();

    let violations: Vec<_> = report.violations_for("arithmetic-laws").collect();
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message().contains("add(a, b)"));
    assert_eq!(violations[0].samples(), ["one_meter", "two_meters"]);
}

// =============================================================================
// Report serialization for host frameworks
// =============================================================================

#[test]
fn test_report_serializes_for_host_consumption() {
    let samples = SampleSet::new()
        .value("one_meter", meters(1))
        .value("still_one", meters(1))
        .value("two_meters", meters(2));

    struct TagMixer {
        calls: std::sync::atomic::AtomicU64,
    }

    impl Adapter for TagMixer {
        type Instance = Quantity;

        fn capabilities(&self) -> Capabilities {
            Capabilities::none().hashable()
        }

        fn construct(&self, args: &Rep) -> AdapterResult<Quantity> {
            QuantityAdapter::parse(args)
        }

        fn equals(&self, a: &Quantity, b: &Quantity) -> AdapterResult<bool> {
            Ok(a == b)
        }

        fn inspect(&self, a: &Quantity) -> AdapterResult<String> {
            Ok(format!("{} {}", a.amount, a.unit))
        }

        fn hash_value(&self, _a: &Quantity) -> AdapterResult<u64> {
            // Every call hashes differently, so the equal pair disagrees.
            Ok(self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst))
        }
    }

    let adapter = TagMixer {
        calls: std::sync::atomic::AtomicU64::new(0),
    };
    let report = verify(adapter, Descriptor::new().hashable(), samples).unwrap();
    assert!(!report.passed());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["passed"], serde_json::json!(false));
    let violations = json["violations"].as_array().unwrap();
    assert!(!violations.is_empty());
    for violation in violations {
        assert!(violation["property"].is_string());
        assert!(violation["message"].is_string());
        assert!(violation["samples"].is_array());
    }
}
