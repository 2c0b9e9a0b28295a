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

//! The property suite.
//!
//! Each property is an independent, capability-gated check over the bound
//! sample set. Properties never abort the run: contract failures and
//! unexpected adapter errors alike are emitted as [`Violation`]s and the
//! next property still executes.

use valcheck_core::{
    Adapter, AdapterResult, Comparison, Descriptor, Foreign, Rep, SampleKind,
};

use crate::violation::Violation;

/// When a property applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Runs for every candidate type.
    Always,
    /// Requires `ordered`.
    Ordered,
    /// Requires `hashable`.
    Hashable,
    /// Requires `arithmetic`.
    Arithmetic,
    /// Requires `serializable`.
    Serializable,
    /// Requires `succ`.
    Succ,
}

impl Gate {
    /// Whether the descriptor enables this gate.
    pub fn enabled(&self, descriptor: &Descriptor) -> bool {
        match self {
            Self::Always => true,
            Self::Ordered => descriptor.ordered,
            Self::Hashable => descriptor.hashable,
            Self::Arithmetic => descriptor.arithmetic.is_some(),
            Self::Serializable => descriptor.serializable,
            Self::Succ => descriptor.succ,
        }
    }
}

/// A sample bound to its constructed instance.
///
/// Built once per run by the verifier. `instance` is `None` for malformed
/// samples and for samples whose construction failed (that fault is
/// reported separately).
#[derive(Debug)]
pub struct BoundSample<I> {
    /// The caller-supplied label.
    pub label: String,
    /// The construction arguments or raw representation.
    pub args: Rep,
    /// How the sample participates in the run.
    pub kind: SampleKind,
    /// The constructed instance, when one exists.
    pub instance: Option<I>,
}

/// Everything a property needs to run.
pub struct PropertyContext<'a, A: Adapter> {
    /// The adapter under test.
    pub adapter: &'a A,
    /// The caller's capability declaration.
    pub descriptor: &'a Descriptor,
    /// The bound samples, in submission order.
    pub samples: &'a [BoundSample<A::Instance>],
    /// Cycle bound for repeated successor application.
    pub succ_steps: usize,
}

impl<'a, A: Adapter> PropertyContext<'a, A> {
    /// The constructible samples, in submission order.
    pub fn instances(&self) -> Vec<(&'a str, &'a A::Instance)> {
        self.samples
            .iter()
            .filter_map(|s| s.instance.as_ref().map(|i| (s.label.as_str(), i)))
            .collect()
    }
}

/// A named, capability-gated conformance check.
pub trait Property<A: Adapter>: Send + Sync {
    /// Property identifier, as it appears on violations.
    fn id(&self) -> &'static str;

    /// One-line description of the law being checked.
    fn description(&self) -> &'static str;

    /// When this property applies.
    fn gate(&self) -> Gate;

    /// Run the check against the bound sample set.
    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation>;
}

/// The built-in property suite, in report order.
pub fn default_properties<A: Adapter>() -> Vec<Box<dyn Property<A>>> {
    vec![
        Box::new(Reflexivity),
        Box::new(Symmetry),
        Box::new(Transitivity),
        Box::new(ForeignSafety),
        Box::new(ConstructionStability),
        Box::new(Immutability),
        Box::new(InspectionSafety),
        Box::new(RoundTrip),
        Box::new(OrderingLaws),
        Box::new(HashConsistency),
        Box::new(ArithmeticLaws),
        Box::new(SuccessorMonotonicity),
    ]
}

/// Unwrap an adapter result, recording a fault violation on `Err`.
fn capture<T>(
    out: &mut Vec<Violation>,
    property: &'static str,
    labels: &[&str],
    result: AdapterResult<T>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            out.push(
                Violation::adapter_fault(property, &err).with_samples(labels.iter().copied()),
            );
            None
        }
    }
}

/// `equals(a, a)` holds for every sample.
pub struct Reflexivity;

impl<A: Adapter> Property<A> for Reflexivity {
    fn id(&self) -> &'static str {
        "equality-reflexivity"
    }

    fn description(&self) -> &'static str {
        "every value is equal to itself"
    }

    fn gate(&self) -> Gate {
        Gate::Always
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        for (label, a) in cx.instances() {
            if let Some(eq) = capture(&mut out, Property::<A>::id(self), &[label], cx.adapter.equals(a, a)) {
                if !eq {
                    out.push(
                        Violation::fail(Property::<A>::id(self), "equals(a, a) returned false")
                            .with_sample(label),
                    );
                }
            }
        }
        out
    }
}

/// `equals(a, b) == equals(b, a)` for every pair.
pub struct Symmetry;

impl<A: Adapter> Property<A> for Symmetry {
    fn id(&self) -> &'static str {
        "equality-symmetry"
    }

    fn description(&self) -> &'static str {
        "equality does not depend on operand order"
    }

    fn gate(&self) -> Gate {
        Gate::Always
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        let instances = cx.instances();
        for i in 0..instances.len() {
            for j in (i + 1)..instances.len() {
                let (la, a) = instances[i];
                let (lb, b) = instances[j];
                let ab = capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.equals(a, b));
                let ba = capture(&mut out, Property::<A>::id(self), &[lb, la], cx.adapter.equals(b, a));
                if let (Some(ab), Some(ba)) = (ab, ba) {
                    if ab != ba {
                        out.push(
                            Violation::fail(
                                Property::<A>::id(self),
                                format!(
                                    "equals(a, b) is {} but equals(b, a) is {}",
                                    ab, ba
                                ),
                            )
                            .with_samples([la, lb]),
                        );
                    }
                }
            }
        }
        out
    }
}

/// `equals(a, b)` and `equals(b, c)` imply `equals(a, c)`.
pub struct Transitivity;

impl<A: Adapter> Property<A> for Transitivity {
    fn id(&self) -> &'static str {
        "equality-transitivity"
    }

    fn description(&self) -> &'static str {
        "equality chains through intermediate values"
    }

    fn gate(&self) -> Gate {
        Gate::Always
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        let instances = cx.instances();
        let n = instances.len();

        // One equality matrix up front; triples below make no adapter calls.
        let mut eq = vec![vec![None; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (la, a) = instances[i];
                let (lb, b) = instances[j];
                eq[i][j] = capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.equals(a, b));
            }
        }

        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    if i == j || j == k || i == k {
                        continue;
                    }
                    if let (Some(true), Some(true), Some(false)) = (eq[i][j], eq[j][k], eq[i][k]) {
                        out.push(
                            Violation::fail(
                                Property::<A>::id(self),
                                "equals(a, b) and equals(b, c) hold but equals(a, c) does not",
                            )
                            .with_samples([instances[i].0, instances[j].0, instances[k].0]),
                        );
                    }
                }
            }
        }
        out
    }
}

/// Equality against a value of an unrelated type never fails.
///
/// Returning `true` for a foreign value is unconventional but not unsafe;
/// only an error is a violation here.
pub struct ForeignSafety;

impl<A: Adapter> Property<A> for ForeignSafety {
    fn id(&self) -> &'static str {
        "heterogeneous-safety"
    }

    fn description(&self) -> &'static str {
        "comparing against an unrelated type never raises"
    }

    fn gate(&self) -> Gate {
        Gate::Always
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        let foreign = Foreign::default();
        for (label, a) in cx.instances() {
            capture(
                &mut out,
                Property::<A>::id(self),
                &[label],
                cx.adapter.equals_foreign(a, &foreign),
            );
        }
        out
    }
}

/// Constructing twice from the same arguments yields equal instances.
pub struct ConstructionStability;

impl<A: Adapter> Property<A> for ConstructionStability {
    fn id(&self) -> &'static str {
        "construction-stability"
    }

    fn description(&self) -> &'static str {
        "construction from identical arguments is repeatable"
    }

    fn gate(&self) -> Gate {
        Gate::Always
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        for sample in cx.samples {
            if sample.kind == SampleKind::Malformed {
                continue;
            }
            let Some(first) = &sample.instance else {
                continue;
            };
            let label = sample.label.as_str();
            let Some(second) = capture(
                &mut out,
                Property::<A>::id(self),
                &[label],
                cx.adapter.construct(&sample.args),
            ) else {
                continue;
            };
            if let Some(eq) = capture(
                &mut out,
                Property::<A>::id(self),
                &[label],
                cx.adapter.equals(first, &second),
            ) {
                if !eq {
                    out.push(
                        Violation::fail(
                            Property::<A>::id(self),
                            "constructing twice from the same arguments yielded unequal instances",
                        )
                        .with_sample(label),
                    );
                }
            }
        }
        out
    }
}

/// Mutating the caller-owned construction arguments after construction
/// must not change the instance's observable state.
pub struct Immutability;

impl<A: Adapter> Property<A> for Immutability {
    fn id(&self) -> &'static str {
        "immutability"
    }

    fn description(&self) -> &'static str {
        "instances do not alias their construction arguments"
    }

    fn gate(&self) -> Gate {
        Gate::Always
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        for sample in cx.samples {
            if sample.kind == SampleKind::Malformed {
                continue;
            }
            let label = sample.label.as_str();

            // Reader errors are owned by inspection-safety / round-trip;
            // this property only reports drift between two reads.
            let mut args = sample.args.clone();
            let Ok(instance) = cx.adapter.construct(&args) else {
                continue;
            };
            let inspect_before = cx.adapter.inspect(&instance).ok();
            let rep_before = if cx.descriptor.serializable {
                cx.adapter.to_representation(&instance).ok()
            } else {
                None
            };

            args.perturb();

            if let (Some(before), Some(after)) =
                (&inspect_before, &cx.adapter.inspect(&instance).ok())
            {
                if before != after {
                    out.push(
                        Violation::fail(
                            Property::<A>::id(self),
                            format!(
                                "inspect output changed after mutating the construction \
                                 arguments: {:?} became {:?}",
                                before, after
                            ),
                        )
                        .with_sample(label),
                    );
                }
            }
            if let (Some(before), Some(after)) =
                (&rep_before, &cx.adapter.to_representation(&instance).ok())
            {
                if before != after {
                    out.push(
                        Violation::fail(
                            Property::<A>::id(self),
                            format!(
                                "representation changed after mutating the construction \
                                 arguments: {} became {}",
                                before, after
                            ),
                        )
                        .with_sample(label),
                    );
                }
            }
        }
        out
    }
}

/// `inspect` succeeds for every sample, edge cases included.
pub struct InspectionSafety;

impl<A: Adapter> Property<A> for InspectionSafety {
    fn id(&self) -> &'static str {
        "inspection-safety"
    }

    fn description(&self) -> &'static str {
        "inspect always produces a string"
    }

    fn gate(&self) -> Gate {
        Gate::Always
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        for (label, a) in cx.instances() {
            capture(&mut out, Property::<A>::id(self), &[label], cx.adapter.inspect(a));
        }
        out
    }
}

/// `fromRepresentation(toRepresentation(a))` equals `a`; malformed
/// representations are rejected.
pub struct RoundTrip;

impl<A: Adapter> Property<A> for RoundTrip {
    fn id(&self) -> &'static str {
        "round-trip"
    }

    fn description(&self) -> &'static str {
        "representation conversion loses nothing and rejects garbage"
    }

    fn gate(&self) -> Gate {
        Gate::Serializable
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        for sample in cx.samples {
            let label = sample.label.as_str();

            if sample.kind == SampleKind::Malformed {
                match cx.adapter.from_representation(&sample.args) {
                    // Rejection is the expected, passing outcome here.
                    Err(err) if err.is_representation() => {}
                    Err(err) => {
                        out.push(Violation::adapter_fault(Property::<A>::id(self), &err).with_sample(label));
                    }
                    Ok(_) => {
                        out.push(
                            Violation::warn(
                                Property::<A>::id(self),
                                "malformed representation was accepted instead of rejected",
                            )
                            .with_sample(label),
                        );
                    }
                }
                continue;
            }

            let Some(instance) = &sample.instance else {
                continue;
            };
            let Some(rep) = capture(
                &mut out,
                Property::<A>::id(self),
                &[label],
                cx.adapter.to_representation(instance),
            ) else {
                continue;
            };
            match cx.adapter.from_representation(&rep) {
                Err(err) if err.is_representation() => {
                    out.push(
                        Violation::fail(
                            Property::<A>::id(self),
                            format!("rejected its own representation {}: {}", rep, err),
                        )
                        .with_sample(label),
                    );
                }
                Err(err) => {
                    out.push(Violation::adapter_fault(Property::<A>::id(self), &err).with_sample(label));
                }
                Ok(back) => {
                    if let Some(eq) = capture(
                        &mut out,
                        Property::<A>::id(self),
                        &[label],
                        cx.adapter.equals(&back, instance),
                    ) {
                        if !eq {
                            out.push(
                                Violation::fail(
                                    Property::<A>::id(self),
                                    format!(
                                        "fromRepresentation(toRepresentation(a)) is not equal \
                                         to a (via {})",
                                        rep
                                    ),
                                )
                                .with_sample(label),
                            );
                        }
                    }
                }
            }
        }
        out
    }
}

/// Antisymmetry, transitivity of `less`, consistency with equality, and
/// incomparability against foreign values.
pub struct OrderingLaws;

impl<A: Adapter> Property<A> for OrderingLaws {
    fn id(&self) -> &'static str {
        "ordering-laws"
    }

    fn description(&self) -> &'static str {
        "compare is a lawful order consistent with equality"
    }

    fn gate(&self) -> Gate {
        Gate::Ordered
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        let instances = cx.instances();
        let n = instances.len();

        let mut cmp = vec![vec![None; n]; n];
        for i in 0..n {
            for j in 0..n {
                let (la, a) = instances[i];
                let (lb, b) = instances[j];
                cmp[i][j] = capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.compare(a, b));
            }
        }

        // Antisymmetry: compare(a, b) is the reverse of compare(b, a).
        for i in 0..n {
            for j in (i + 1)..n {
                if let (Some(ab), Some(ba)) = (cmp[i][j], cmp[j][i]) {
                    if ab.reversed() != ba {
                        out.push(
                            Violation::fail(
                                Property::<A>::id(self),
                                format!(
                                    "compare(a, b) is {} but compare(b, a) is {}",
                                    ab, ba
                                ),
                            )
                            .with_samples([instances[i].0, instances[j].0]),
                        );
                    }
                }
            }
        }

        // Consistency with equality: compare == equal iff equals.
        for i in 0..n {
            for j in i..n {
                let (la, a) = instances[i];
                let (lb, b) = instances[j];
                let Some(eq) = capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.equals(a, b))
                else {
                    continue;
                };
                if let Some(ab) = cmp[i][j] {
                    if (ab == Comparison::Equal) != eq {
                        out.push(
                            Violation::fail(
                                Property::<A>::id(self),
                                format!("compare(a, b) is {} but equals(a, b) is {}", ab, eq),
                            )
                            .with_samples([la, lb]),
                        );
                    }
                }
            }
        }

        // Transitivity of less.
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    if i == j || j == k || i == k {
                        continue;
                    }
                    if let (Some(Comparison::Less), Some(Comparison::Less), Some(ac)) =
                        (cmp[i][j], cmp[j][k], cmp[i][k])
                    {
                        if ac != Comparison::Less {
                            out.push(
                                Violation::fail(
                                    Property::<A>::id(self),
                                    format!(
                                        "a < b and b < c but compare(a, c) is {}",
                                        ac
                                    ),
                                )
                                .with_samples([
                                    instances[i].0,
                                    instances[j].0,
                                    instances[k].0,
                                ]),
                            );
                        }
                    }
                }
            }
        }

        // Foreign operands are incomparable, never an error.
        let foreign = Foreign::default();
        for &(label, a) in &instances {
            if let Some(c) = capture(
                &mut out,
                Property::<A>::id(self),
                &[label],
                cx.adapter.compare_foreign(a, &foreign),
            ) {
                if c != Comparison::Incomparable {
                    out.push(
                        Violation::fail(
                            Property::<A>::id(self),
                            format!(
                                "compare against a foreign value returned {}, expected \
                                 incomparable",
                                c
                            ),
                        )
                        .with_sample(label),
                    );
                }
            }
        }
        out
    }
}

/// Equal values must hash identically. Collisions between distinct values
/// are allowed.
pub struct HashConsistency;

impl<A: Adapter> Property<A> for HashConsistency {
    fn id(&self) -> &'static str {
        "hash-consistency"
    }

    fn description(&self) -> &'static str {
        "equals(a, b) implies hash(a) == hash(b)"
    }

    fn gate(&self) -> Gate {
        Gate::Hashable
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        let instances = cx.instances();
        for i in 0..instances.len() {
            for j in (i + 1)..instances.len() {
                let (la, a) = instances[i];
                let (lb, b) = instances[j];
                let Some(eq) = capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.equals(a, b))
                else {
                    continue;
                };
                if !eq {
                    continue;
                }
                let ha = capture(&mut out, Property::<A>::id(self), &[la], cx.adapter.hash_value(a));
                let hb = capture(&mut out, Property::<A>::id(self), &[lb], cx.adapter.hash_value(b));
                if let (Some(ha), Some(hb)) = (ha, hb) {
                    if ha != hb {
                        out.push(
                            Violation::fail(
                                Property::<A>::id(self),
                                format!("equal values hash differently: {} != {}", ha, hb),
                            )
                            .with_samples([la, lb]),
                        );
                    }
                }
            }
        }
        out
    }
}

/// Commutativity, the subtraction/negation inverse relation, and the
/// identity element, as declared in the arithmetic spec.
pub struct ArithmeticLaws;

impl<A: Adapter> Property<A> for ArithmeticLaws {
    fn id(&self) -> &'static str {
        "arithmetic-laws"
    }

    fn description(&self) -> &'static str {
        "declared arithmetic structure holds under equals"
    }

    fn gate(&self) -> Gate {
        Gate::Arithmetic
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        let Some(spec) = &cx.descriptor.arithmetic else {
            return out;
        };
        let instances = cx.instances();

        if spec.commutative {
            for i in 0..instances.len() {
                for j in (i + 1)..instances.len() {
                    let (la, a) = instances[i];
                    let (lb, b) = instances[j];
                    let ab = capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.add(a, b));
                    let ba = capture(&mut out, Property::<A>::id(self), &[lb, la], cx.adapter.add(b, a));
                    let (Some(ab), Some(ba)) = (ab, ba) else {
                        continue;
                    };
                    if let Some(eq) =
                        capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.equals(&ab, &ba))
                    {
                        if !eq {
                            out.push(
                                Violation::fail(Property::<A>::id(self), "add(a, b) is not equal to add(b, a)")
                                    .with_samples([la, lb]),
                            );
                        }
                    }
                }
            }
        }

        if spec.has_negate {
            for &(la, a) in &instances {
                for &(lb, b) in &instances {
                    let diff = capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.sub(a, b));
                    let nb = capture(&mut out, Property::<A>::id(self), &[lb], cx.adapter.negate(b));
                    let (Some(diff), Some(nb)) = (diff, nb) else {
                        continue;
                    };
                    let Some(sum) = capture(&mut out, Property::<A>::id(self), &[la, lb], cx.adapter.add(a, &nb))
                    else {
                        continue;
                    };
                    if let Some(eq) = capture(
                        &mut out,
                        Property::<A>::id(self),
                        &[la, lb],
                        cx.adapter.equals(&diff, &sum),
                    ) {
                        if !eq {
                            out.push(
                                Violation::fail(
                                    Property::<A>::id(self),
                                    "sub(a, b) is not equal to add(a, negate(b))",
                                )
                                .with_samples([la, lb]),
                            );
                        }
                    }
                }
            }
        }

        if let Some(identity_args) = &spec.identity {
            if let Some(identity) = capture(
                &mut out,
                Property::<A>::id(self),
                &["identity"],
                cx.adapter.construct(identity_args),
            ) {
                for &(la, a) in &instances {
                    let Some(sum) =
                        capture(&mut out, Property::<A>::id(self), &[la], cx.adapter.add(a, &identity))
                    else {
                        continue;
                    };
                    if let Some(eq) =
                        capture(&mut out, Property::<A>::id(self), &[la], cx.adapter.equals(&sum, a))
                    {
                        if !eq {
                            out.push(
                                Violation::fail(
                                    Property::<A>::id(self),
                                    "add(a, identity) is not equal to a",
                                )
                                .with_sample(la),
                            );
                        }
                    }
                }
            }
        }
        out
    }
}

/// `compare(a, successor(a)) == less`, and repeated application does not
/// revisit an earlier value within the configured step bound.
pub struct SuccessorMonotonicity;

impl<A: Adapter> Property<A> for SuccessorMonotonicity {
    fn id(&self) -> &'static str {
        "successor-monotonicity"
    }

    fn description(&self) -> &'static str {
        "successor strictly increases and does not cycle"
    }

    fn gate(&self) -> Gate {
        Gate::Succ
    }

    fn check(&self, cx: &PropertyContext<'_, A>) -> Vec<Violation> {
        let mut out = Vec::new();
        for (label, a) in cx.instances() {
            let mut seen: Vec<A::Instance> = Vec::new();
            for step in 0..cx.succ_steps {
                let prev = seen.last().unwrap_or(a);
                let next = match cx.adapter.successor(prev) {
                    // Not defined here (e.g. an infinity); that is fine.
                    Err(err) if err.is_unsupported() => break,
                    Err(err) => {
                        out.push(Violation::adapter_fault(Property::<A>::id(self), &err).with_sample(label));
                        break;
                    }
                    Ok(next) => next,
                };

                let cmp = capture(
                    &mut out,
                    Property::<A>::id(self),
                    &[label],
                    cx.adapter.compare(prev, &next),
                );
                if let Some(cmp) = cmp {
                    if cmp != Comparison::Less {
                        out.push(
                            Violation::fail(
                                Property::<A>::id(self),
                                format!(
                                    "compare(a, successor(a)) is {} at step {}, expected less",
                                    cmp,
                                    step + 1
                                ),
                            )
                            .with_sample(label),
                        );
                        break;
                    }
                }

                let mut cycled = false;
                if let Some(eq) =
                    capture(&mut out, Property::<A>::id(self), &[label], cx.adapter.equals(&next, a))
                {
                    cycled = eq;
                }
                for earlier in &seen {
                    if cycled {
                        break;
                    }
                    if let Some(eq) = capture(
                        &mut out,
                        Property::<A>::id(self),
                        &[label],
                        cx.adapter.equals(&next, earlier),
                    ) {
                        cycled = eq;
                    }
                }
                if cycled {
                    out.push(
                        Violation::fail(
                            Property::<A>::id(self),
                            format!(
                                "repeated successor application revisited an earlier value \
                                 after {} steps",
                                step + 1
                            ),
                        )
                        .with_sample(label),
                    );
                    break;
                }
                seen.push(next);
            }
        }
        out
    }
}
