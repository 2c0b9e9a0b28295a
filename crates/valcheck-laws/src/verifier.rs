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

//! The verifier runner.
//!
//! One run walks the phases configure, validate, run, report. Validation
//! failures abort with a [`ConfigError`] before any property executes;
//! everything after that surfaces as data in the [`Report`]. A verifier is
//! consumed by [`Verifier::run`], so no state can leak between runs.
//!
//! Properties are mutually independent, which permits the optional
//! thread-per-property execution mode. Results are always merged in
//! property declaration order, never completion order, so a report is
//! deterministic for identical inputs regardless of execution mode.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use valcheck_core::{Adapter, AdapterError, ConfigError, Descriptor, SampleKind, SampleSet};

use crate::properties::{default_properties, BoundSample, Property, PropertyContext};
use crate::violation::{Report, Violation};

/// Default cap on collected violations, after which the run stops
/// recording. A badly broken adapter can otherwise flood the report with
/// one violation per sample tuple.
const MAX_VIOLATIONS: usize = 10_000;

/// Default bound on repeated successor application.
const SUCC_STEPS: usize = 16;

/// Run-scope cancellation signal.
///
/// Cancelling stops the verifier from scheduling further properties;
/// already-dispatched properties still finish and their violations are
/// collected. A cancelled run yields a report marked incomplete.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether the signal has been raised.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Configuration for one verifier run.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Run each property on its own thread.
    pub parallel: bool,
    /// Time bound per property execution. An overdue property yields a
    /// timeout violation instead of hanging the run.
    pub property_timeout: Option<Duration>,
    /// Cycle bound for the successor-monotonicity property.
    pub succ_steps: usize,
    /// Maximum number of violations to collect.
    pub max_violations: usize,
    /// Optional run-scope cancellation signal.
    pub cancel: Option<CancelToken>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            property_timeout: None,
            succ_steps: SUCC_STEPS,
            max_violations: MAX_VIOLATIONS,
            cancel: None,
        }
    }
}

impl VerifierConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.succ_steps == 0 {
            return Err(ConfigError::InvalidConfig(
                "succ_steps must be at least 1".to_string(),
            ));
        }
        if self.max_violations == 0 {
            return Err(ConfigError::InvalidConfig(
                "max_violations must be at least 1".to_string(),
            ));
        }
        if self.property_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::InvalidConfig(
                "property_timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// A single-use conformance run over one adapter.
pub struct Verifier<A: Adapter> {
    adapter: Arc<A>,
    descriptor: Arc<Descriptor>,
    samples: SampleSet,
    config: VerifierConfig,
    properties: Vec<Arc<dyn Property<A>>>,
}

impl<A: Adapter> Verifier<A> {
    /// Bind an adapter, a descriptor and a sample set with the default
    /// configuration and the built-in property suite.
    pub fn new(adapter: A, descriptor: Descriptor, samples: SampleSet) -> Self {
        Self::with_config(adapter, descriptor, samples, VerifierConfig::default())
    }

    /// Bind with an explicit configuration.
    pub fn with_config(
        adapter: A,
        descriptor: Descriptor,
        samples: SampleSet,
        config: VerifierConfig,
    ) -> Self {
        Self {
            adapter: Arc::new(adapter),
            descriptor: Arc::new(descriptor),
            samples,
            config,
            properties: default_properties::<A>().into_iter().map(Arc::from).collect(),
        }
    }

    /// Append a custom property to the suite.
    pub fn add_property(&mut self, property: Box<dyn Property<A>>) {
        self.properties.push(Arc::from(property));
    }

    /// Validate the configuration, execute every applicable property and
    /// aggregate the outcome.
    ///
    /// Consumes the verifier: a second run needs a fresh instance. Returns
    /// `Err` only for setup problems; every runtime failure mode is data in
    /// the report.
    pub fn run(self) -> Result<Report, ConfigError> {
        let Self {
            adapter,
            descriptor,
            samples,
            config,
            properties,
        } = self;

        // VALIDATING: configuration, capability declaration, sample minimums.
        config.validate()?;
        descriptor.validate(&adapter.capabilities())?;

        let value_count = samples.value_count();
        if value_count < 2 {
            return Err(ConfigError::NotEnoughSamples {
                needed: 2,
                got: value_count,
            });
        }

        let (bound, setup_violations) = bind_samples(&*adapter, &samples)?;
        let bound = Arc::new(bound);

        // RUNNING: capability-filtered properties, in declaration order.
        let units: Vec<Arc<dyn Property<A>>> = properties
            .into_iter()
            .filter(|p| p.gate().enabled(descriptor.as_ref()))
            .collect();

        let mut complete = true;
        let mut collected: Vec<Vec<Violation>> = Vec::with_capacity(units.len());

        if config.parallel {
            let mut pending = Vec::with_capacity(units.len());
            for property in &units {
                if config.is_cancelled() {
                    complete = false;
                    break;
                }
                let rx = dispatch(
                    Arc::clone(&adapter),
                    Arc::clone(&descriptor),
                    Arc::clone(&bound),
                    Arc::clone(property),
                    config.succ_steps,
                );
                pending.push((property.id(), rx));
            }
            for (id, rx) in pending {
                collected.push(await_unit(id, rx, config.property_timeout));
            }
        } else {
            for property in &units {
                if config.is_cancelled() {
                    complete = false;
                    break;
                }
                if config.property_timeout.is_some() {
                    let rx = dispatch(
                        Arc::clone(&adapter),
                        Arc::clone(&descriptor),
                        Arc::clone(&bound),
                        Arc::clone(property),
                        config.succ_steps,
                    );
                    collected.push(await_unit(property.id(), rx, config.property_timeout));
                } else {
                    let cx = PropertyContext {
                        adapter: &*adapter,
                        descriptor: descriptor.as_ref(),
                        samples: bound.as_slice(),
                        succ_steps: config.succ_steps,
                    };
                    collected.push(property.check(&cx));
                }
            }
        }

        // REPORTING: declaration order, then the cap.
        let mut violations = setup_violations;
        for unit in collected {
            violations.extend(unit);
        }
        if violations.len() > config.max_violations {
            violations.truncate(config.max_violations);
            violations.push(Violation::warn(
                "verifier",
                format!(
                    "violation limit of {} exceeded; further violations were suppressed",
                    config.max_violations
                ),
            ));
        }
        Ok(Report::new(violations, complete))
    }
}

/// Construct every non-malformed sample once.
///
/// A construction failure is an adapter fault, not a fatal error, unless it
/// leaves fewer than two value instances to check equality against, in
/// which case nothing meaningful can run.
#[allow(clippy::type_complexity)]
fn bind_samples<A: Adapter>(
    adapter: &A,
    samples: &SampleSet,
) -> Result<(Vec<BoundSample<A::Instance>>, Vec<Violation>), ConfigError> {
    let mut violations = Vec::new();
    let mut bound = Vec::with_capacity(samples.len());
    let mut first_failure: Option<AdapterError> = None;

    for sample in samples {
        let instance = if sample.kind() == SampleKind::Malformed {
            None
        } else {
            match adapter.construct(sample.args()) {
                Ok(instance) => Some(instance),
                Err(err) => {
                    violations.push(
                        Violation::adapter_fault("construction-stability", &err)
                            .with_sample(sample.label()),
                    );
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                    None
                }
            }
        };
        bound.push(BoundSample {
            label: sample.label().to_string(),
            args: sample.args().clone(),
            kind: sample.kind(),
            instance,
        });
    }

    let values: Vec<&A::Instance> = bound
        .iter()
        .filter(|b| b.kind == SampleKind::Value)
        .filter_map(|b| b.instance.as_ref())
        .collect();
    if values.len() < 2 {
        return Err(match first_failure {
            Some(err) => ConfigError::AdapterFailure(err),
            None => ConfigError::NotEnoughSamples {
                needed: 2,
                got: values.len(),
            },
        });
    }

    let mut distinct = false;
    'pairs: for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            match adapter.equals(values[i], values[j]) {
                Ok(false) => {
                    distinct = true;
                    break 'pairs;
                }
                Ok(true) => {}
                Err(err) => return Err(ConfigError::AdapterFailure(err)),
            }
        }
    }
    if !distinct {
        return Err(ConfigError::IndistinctSamples);
    }

    Ok((bound, violations))
}

/// Run one property on a worker thread.
fn dispatch<A: Adapter>(
    adapter: Arc<A>,
    descriptor: Arc<Descriptor>,
    samples: Arc<Vec<BoundSample<A::Instance>>>,
    property: Arc<dyn Property<A>>,
    succ_steps: usize,
) -> mpsc::Receiver<Vec<Violation>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let cx = PropertyContext {
            adapter: &*adapter,
            descriptor: descriptor.as_ref(),
            samples: samples.as_slice(),
            succ_steps,
        };
        // The collector may have timed out and dropped the receiver.
        let _ = tx.send(property.check(&cx));
    });
    rx
}

/// Collect one dispatched property, converting an overdue or vanished
/// worker into a violation. An abandoned worker keeps running detached; it
/// only holds clones of the shared run data.
fn await_unit(
    id: &str,
    rx: mpsc::Receiver<Vec<Violation>>,
    timeout: Option<Duration>,
) -> Vec<Violation> {
    let received = match timeout {
        Some(bound) => match rx.recv_timeout(bound) {
            Ok(violations) => Some(violations),
            Err(mpsc::RecvTimeoutError::Timeout) => {
                return vec![Violation::timeout(id, bound)];
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => None,
        },
        None => rx.recv().ok(),
    };
    received.unwrap_or_else(|| {
        vec![Violation::adapter_fault(
            id,
            &AdapterError::fault("property execution aborted before producing a result"),
        )]
    })
}
