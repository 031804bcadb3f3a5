// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Action records and their sink.
//!
//! Every successful device mutation produces one [`ActionRecord`]. Records
//! are handed to an injected [`ActionSink`] collaborator rather than written
//! to a file inline, so the dispatcher stays testable without filesystem
//! access. The crate does not retain records in memory.

use std::fmt;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// An append-only fact: one device mutation that actually happened.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ActionRecord {
    /// When the mutation was applied.
    pub timestamp: DateTime<Utc>,
    /// The mutated device id.
    pub device: String,
    /// The verb's wire name.
    pub verb: &'static str,
    /// The applied value, rendered as a string, if the verb carries one.
    pub value: Option<String>,
}

impl ActionRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn now(device: impl Into<String>, verb: &'static str, value: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            device: device.into(),
            verb,
            value,
        }
    }

    /// Renders the record as a single log-file line.
    #[must_use]
    pub fn to_line(&self) -> String {
        let stamp = self.timestamp.format("%Y-%m-%d %H:%M:%S");
        match &self.value {
            Some(value) => format!("{stamp} | {} | {} | {value}", self.device, self.verb),
            None => format!("{stamp} | {} | {}", self.device, self.verb),
        }
    }
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Receiver of action records.
///
/// Implement this to forward records to a log file, a message bus, or a
/// test buffer. Recording must not fail: a sink that can lose a record
/// decides for itself how to handle that.
pub trait ActionSink: Send + Sync {
    /// Accepts one record.
    fn record(&self, action: ActionRecord);
}

/// Sink that emits records through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ActionSink for TracingSink {
    fn record(&self, action: ActionRecord) {
        tracing::info!(
            device = %action.device,
            verb = %action.verb,
            value = action.value.as_deref().unwrap_or(""),
            "action applied"
        );
    }
}

/// Sink that buffers records in memory, mainly for tests and the CLI's
/// session view.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<ActionRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded actions, in arrival order.
    #[must_use]
    pub fn records(&self) -> Vec<ActionRecord> {
        self.records.lock().clone()
    }

    /// Returns the number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl ActionSink for MemorySink {
    fn record(&self, action: ActionRecord) {
        self.records.lock().push(action);
    }
}
