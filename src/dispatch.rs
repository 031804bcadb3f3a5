// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command dispatch against the device registry.
//!
//! The dispatcher resolves a command's target (expanding the `all_lights`
//! broadcast to every light-class device), applies the matching registry
//! mutator per device, and emits one action record per device actually
//! mutated. A failing device never aborts its broadcast siblings; the
//! report keeps successes and per-device failures side by side.

use std::sync::Arc;

use crate::action::{ActionRecord, ActionSink};
use crate::command::{Command, Target};
use crate::error::RegistryError;
use crate::registry::DeviceRegistry;

/// One device mutation that was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedAction {
    /// The mutated device id.
    pub device: String,
    /// The verb's wire name.
    pub verb: &'static str,
    /// The applied value, if the verb carries one.
    pub value: Option<String>,
}

/// One device that rejected the mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFailure {
    /// The target device id.
    pub device: String,
    /// Why the mutation was rejected.
    pub error: RegistryError,
}

/// Outcome of dispatching one command.
///
/// Partial success is representable: a broadcast that mutated two lights
/// and failed on a third reports both sides rather than collapsing to a
/// boolean.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Mutations that were applied, in resolution order.
    pub applied: Vec<AppliedAction>,
    /// Per-device rejections, in resolution order.
    pub failures: Vec<DeviceFailure>,
}

impl DispatchReport {
    /// Returns `true` if at least one device was mutated.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Applies typed commands to a device registry.
///
/// Both the registry and the action sink are injected, so independent
/// dispatcher instances (each with their own registry) can coexist in a
/// test suite.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use domvox::action::MemorySink;
/// use domvox::command::{Command, Target};
/// use domvox::dispatch::Dispatcher;
/// use domvox::registry::DeviceRegistry;
///
/// let registry = Arc::new(DeviceRegistry::with_default_devices());
/// let sink = Arc::new(MemorySink::new());
/// let dispatcher = Dispatcher::new(Arc::clone(&registry), sink);
///
/// let report = dispatcher.dispatch(&Command::TurnOn {
///     target: Target::AllLights,
/// });
/// assert!(report.succeeded());
/// assert_eq!(report.applied.len(), 3);
/// ```
pub struct Dispatcher {
    registry: Arc<DeviceRegistry>,
    sink: Arc<dyn ActionSink>,
}

impl Dispatcher {
    /// Creates a dispatcher over a registry and an action sink.
    #[must_use]
    pub fn new(registry: Arc<DeviceRegistry>, sink: Arc<dyn ActionSink>) -> Self {
        Self { registry, sink }
    }

    /// Returns the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Dispatches one command, mutating every resolved device that accepts
    /// it.
    pub fn dispatch(&self, command: &Command) -> DispatchReport {
        let devices = match command.target() {
            Target::AllLights => self.registry.light_ids(),
            Target::Device(id) => vec![id.clone()],
        };

        let mut report = DispatchReport::default();
        for device in devices {
            // The registry re-checks existence, capability, and range:
            // callers that bypass the interpreter get the same guarantees.
            match self.apply(command, &device) {
                Ok(()) => {
                    let record =
                        ActionRecord::now(device.as_str(), command.verb(), command.value_string());
                    self.sink.record(record);
                    report.applied.push(AppliedAction {
                        device,
                        verb: command.verb(),
                        value: command.value_string(),
                    });
                }
                Err(error) => {
                    tracing::warn!(device = %device, verb = %command.verb(), %error, "dispatch failed");
                    report.failures.push(DeviceFailure { device, error });
                }
            }
        }
        report
    }

    fn apply(&self, command: &Command, device: &str) -> Result<(), RegistryError> {
        match command {
            Command::TurnOn { .. } => self.registry.set_power(device, true),
            Command::TurnOff { .. } => self.registry.set_power(device, false),
            Command::SetBrightness { brightness, .. } => self
                .registry
                .set_brightness(device, i64::from(brightness.value())),
            Command::SetTemperature { temperature, .. } => self
                .registry
                .set_temperature(device, i64::from(temperature.degrees())),
            Command::SetColor { color, .. } => self.registry.set_color(device, &color.to_hex()),
        }
    }
}
