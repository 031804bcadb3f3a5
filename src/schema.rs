// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative command schema.
//!
//! The schema describes the legal command shape once, and serves two
//! consumers from that single description: the backend client embeds
//! [`CommandSchema::as_json`] as the response-format constraint, and the
//! [`Interpreter`](crate::Interpreter) queries the same instance when
//! validating replies. Numeric ranges come from the constants on the typed
//! values in [`crate::types`], so the two sides cannot drift apart.

use serde_json::{Value, json};

use crate::command::Target;
use crate::registry::DeviceRegistry;
use crate::types::{Brightness, Temperature};

/// The closed verb enumeration, in wire form.
pub const VERBS: [&str; 5] = [
    "turn_on",
    "turn_off",
    "set_brightness",
    "set_temperature",
    "set_color",
];

/// The color pattern the backend is asked to honor.
pub const COLOR_PATTERN: &str = "^#[0-9A-Fa-f]{6}$";

/// Legal command shape: verbs, devices, and per-field constraints.
///
/// # Examples
///
/// ```
/// use domvox::registry::DeviceRegistry;
/// use domvox::schema::CommandSchema;
///
/// let registry = DeviceRegistry::with_default_devices();
/// let schema = CommandSchema::for_registry(&registry);
/// assert!(schema.is_known_device("living_room_light"));
/// assert!(schema.is_known_device("all_lights"));
/// assert!(!schema.is_known_verb("self_destruct"));
/// ```
#[derive(Debug, Clone)]
pub struct CommandSchema {
    devices: Vec<String>,
}

impl CommandSchema {
    /// Creates a schema over an explicit set of device ids.
    ///
    /// The `all_lights` sentinel is always part of the device enumeration
    /// and does not need to be listed.
    #[must_use]
    pub fn new(device_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            devices: device_ids.into_iter().collect(),
        }
    }

    /// Creates a schema over a registry's device ids.
    #[must_use]
    pub fn for_registry(registry: &DeviceRegistry) -> Self {
        Self::new(registry.device_ids())
    }

    /// Returns `true` if the verb is in the closed enumeration.
    #[must_use]
    pub fn is_known_verb(&self, verb: &str) -> bool {
        VERBS.contains(&verb)
    }

    /// Returns `true` if the device is registered or is the broadcast
    /// sentinel.
    #[must_use]
    pub fn is_known_device(&self, device: &str) -> bool {
        device == Target::ALL_LIGHTS || self.devices.iter().any(|id| id == device)
    }

    /// Renders the JSON-Schema object sent as the backend's `format`
    /// constraint.
    #[must_use]
    pub fn as_json(&self) -> Value {
        let mut devices: Vec<&str> = self.devices.iter().map(String::as_str).collect();
        devices.push(Target::ALL_LIGHTS);

        json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "enum": VERBS,
                },
                "device": {
                    "type": "string",
                    "enum": devices,
                },
                "value": {
                    "type": "integer",
                    "minimum": Brightness::MIN.value(),
                    "maximum": Brightness::MAX.value(),
                },
                "temperature": {
                    "type": "integer",
                    "minimum": Temperature::MIN.degrees(),
                    "maximum": Temperature::MAX.degrees(),
                },
                "color": {
                    "type": "string",
                    "pattern": COLOR_PATTERN,
                },
            },
            "required": ["command", "device"],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> CommandSchema {
        CommandSchema::for_registry(&DeviceRegistry::with_default_devices())
    }

    #[test]
    fn knows_registered_devices() {
        let schema = schema();
        assert!(schema.is_known_device("bedroom_light"));
        assert!(schema.is_known_device("fan"));
        assert!(!schema.is_known_device("garage_door"));
    }

    #[test]
    fn sentinel_is_always_known() {
        let schema = CommandSchema::new([]);
        assert!(schema.is_known_device("all_lights"));
    }

    #[test]
    fn knows_all_verbs() {
        let schema = schema();
        for verb in VERBS {
            assert!(schema.is_known_verb(verb));
        }
        assert!(!schema.is_known_verb("toggle"));
    }

    #[test]
    fn json_ranges_match_type_constants() {
        let json = schema().as_json();
        assert_eq!(json["properties"]["value"]["minimum"], 0);
        assert_eq!(json["properties"]["value"]["maximum"], 100);
        assert_eq!(json["properties"]["temperature"]["minimum"], 16);
        assert_eq!(json["properties"]["temperature"]["maximum"], 30);
        assert_eq!(json["properties"]["color"]["pattern"], COLOR_PATTERN);
    }

    #[test]
    fn json_device_enum_includes_sentinel() {
        let json = schema().as_json();
        let devices = json["properties"]["device"]["enum"].as_array().unwrap();
        assert!(devices.iter().any(|d| d == "all_lights"));
        assert!(devices.iter().any(|d| d == "living_room_light"));
    }

    #[test]
    fn json_requires_command_and_device() {
        let json = schema().as_json();
        assert_eq!(json["required"], json!(["command", "device"]));
    }
}
