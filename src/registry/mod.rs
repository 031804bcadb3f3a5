// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory device registry.
//!
//! The registry owns device identity and state and exposes atomic per-device
//! mutators. Each mutator validates range, format, and device capability
//! before writing; a rejected update leaves the previous value unchanged.
//!
//! The registry only ever mutates one concrete device id at a time. The
//! `all_lights` broadcast sentinel is resolved by the
//! [`Dispatcher`](crate::Dispatcher), which keeps the registry trivially
//! testable in isolation.

mod device;

use std::collections::BTreeMap;

use parking_lot::RwLock;

pub use device::{DeviceClass, DeviceSpec, DeviceState};

use crate::error::RegistryError;
use crate::types::{Brightness, RgbColor, Temperature};

struct DeviceEntry {
    name: String,
    class: DeviceClass,
    // Per-device lock: unrelated devices are never serialized behind each
    // other if callers ever become concurrent.
    state: RwLock<DeviceState>,
}

/// Ordered in-memory store of devices.
///
/// Devices are created at construction from a seed list and never destroyed
/// at runtime. Iteration order is the id's lexicographic order.
///
/// # Examples
///
/// ```
/// use domvox::registry::DeviceRegistry;
///
/// let registry = DeviceRegistry::with_default_devices();
/// registry.set_power("living_room_light", true).unwrap();
/// assert!(registry.get("living_room_light").unwrap().power);
/// ```
pub struct DeviceRegistry {
    devices: BTreeMap<String, DeviceEntry>,
}

impl DeviceRegistry {
    /// Creates a registry from a seed list of device specs.
    #[must_use]
    pub fn new(specs: impl IntoIterator<Item = DeviceSpec>) -> Self {
        let devices = specs
            .into_iter()
            .map(|spec| {
                (
                    spec.id,
                    DeviceEntry {
                        name: spec.name,
                        class: spec.class,
                        state: RwLock::new(spec.state),
                    },
                )
            })
            .collect();
        Self { devices }
    }

    /// Creates a registry seeded with the default home rig.
    ///
    /// # Panics
    ///
    /// Never panics; the seed values are compile-time constants within every
    /// type's range.
    #[must_use]
    pub fn with_default_devices() -> Self {
        let brightness = |v| Brightness::new(v).expect("seed brightness in range");
        let color = |hex| RgbColor::from_hex(hex).expect("seed color well-formed");

        Self::new([
            DeviceSpec::light(
                "living_room_light",
                "Living Room Light",
                brightness(50),
                color("#FFFFFF"),
            ),
            DeviceSpec::light("bedroom_light", "Bedroom Light", brightness(30), color("#FFE4C4")),
            DeviceSpec::light("kitchen_light", "Kitchen Light", brightness(70), color("#FFFFFF")),
            DeviceSpec::climate(
                "air_conditioner",
                "Air Conditioner",
                Some(Temperature::new(24).expect("seed setpoint in range")),
            ),
            DeviceSpec::climate("heater", "Heater", None),
            DeviceSpec::fan("fan", "Fan"),
        ])
    }

    fn entry(&self, id: &str) -> Result<&DeviceEntry, RegistryError> {
        self.devices
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Returns a snapshot of a device's current state.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` for an unknown id.
    pub fn get(&self, id: &str) -> Result<DeviceState, RegistryError> {
        Ok(*self.entry(id)?.state.read())
    }

    /// Returns a device's class.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` for an unknown id.
    pub fn class(&self, id: &str) -> Result<DeviceClass, RegistryError> {
        Ok(self.entry(id)?.class)
    }

    /// Sets a device's power state. Every device class supports power.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` for an unknown id.
    pub fn set_power(&self, id: &str, on: bool) -> Result<(), RegistryError> {
        let entry = self.entry(id)?;
        entry.state.write().power = on;
        Ok(())
    }

    /// Sets a light's brightness from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` for an unknown id,
    /// `RegistryError::Unsupported` for a non-light device, and a wrapped
    /// `ValueError` for values outside [0, 100]. State is untouched on any
    /// failure.
    pub fn set_brightness(&self, id: &str, value: i64) -> Result<(), RegistryError> {
        let entry = self.entry(id)?;
        if !entry.class.is_light() {
            return Err(RegistryError::Unsupported {
                device: id.to_string(),
                attribute: "brightness",
            });
        }
        let brightness = Brightness::new(value)?;
        entry.state.write().brightness = Some(brightness);
        Ok(())
    }

    /// Sets a climate device's temperature setpoint from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` for an unknown id,
    /// `RegistryError::Unsupported` for a non-climate device, and a wrapped
    /// `ValueError` for values outside [16, 30]. State is untouched on any
    /// failure.
    pub fn set_temperature(&self, id: &str, degrees: i64) -> Result<(), RegistryError> {
        let entry = self.entry(id)?;
        if entry.class != DeviceClass::Climate {
            return Err(RegistryError::Unsupported {
                device: id.to_string(),
                attribute: "temperature",
            });
        }
        let setpoint = Temperature::new(degrees)?;
        entry.state.write().temperature = Some(setpoint);
        Ok(())
    }

    /// Sets a color-capable light's color from a `#RRGGBB` hex string.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` for an unknown id,
    /// `RegistryError::Unsupported` for a device without a color attribute,
    /// and a wrapped `ValueError` for a malformed hex string. State is
    /// untouched on any failure.
    pub fn set_color(&self, id: &str, hex: &str) -> Result<(), RegistryError> {
        let entry = self.entry(id)?;
        // Color capability = light seeded with a color attribute.
        if !entry.class.is_light() || entry.state.read().color.is_none() {
            return Err(RegistryError::Unsupported {
                device: id.to_string(),
                attribute: "color",
            });
        }
        let color = RgbColor::from_hex(hex)?;
        entry.state.write().color = Some(color);
        Ok(())
    }

    /// Returns `(id, display name)` pairs in id order.
    #[must_use]
    pub fn list(&self) -> Vec<(String, String)> {
        self.devices
            .iter()
            .map(|(id, entry)| (id.clone(), entry.name.clone()))
            .collect()
    }

    /// Returns the ids of all registered devices, in order.
    #[must_use]
    pub fn device_ids(&self) -> Vec<String> {
        self.devices.keys().cloned().collect()
    }

    /// Returns the ids of all light-class devices, in order.
    ///
    /// This is the expansion set for the `all_lights` broadcast target.
    #[must_use]
    pub fn light_ids(&self) -> Vec<String> {
        self.devices
            .iter()
            .filter(|(_, entry)| entry.class.is_light())
            .map(|(id, _)| id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;

    #[test]
    fn default_devices_are_seeded() {
        let registry = DeviceRegistry::with_default_devices();
        assert_eq!(registry.device_ids().len(), 6);

        let light = registry.get("living_room_light").unwrap();
        assert!(!light.power);
        assert_eq!(light.brightness.unwrap().value(), 50);
        assert_eq!(light.color.unwrap().to_hex(), "#FFFFFF");

        let ac = registry.get("air_conditioner").unwrap();
        assert_eq!(ac.temperature.unwrap().degrees(), 24);
        assert!(ac.brightness.is_none());
    }

    #[test]
    fn heater_starts_without_setpoint() {
        let registry = DeviceRegistry::with_default_devices();
        assert!(registry.get("heater").unwrap().temperature.is_none());
    }

    #[test]
    fn get_unknown_device() {
        let registry = DeviceRegistry::with_default_devices();
        let err = registry.get("garage_door").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(id) if id == "garage_door"));
    }

    #[test]
    fn set_power_round_trip() {
        let registry = DeviceRegistry::with_default_devices();
        registry.set_power("fan", true).unwrap();
        assert!(registry.get("fan").unwrap().power);
        registry.set_power("fan", false).unwrap();
        assert!(!registry.get("fan").unwrap().power);
    }

    #[test]
    fn set_brightness_round_trip_all_valid_values() {
        let registry = DeviceRegistry::with_default_devices();
        for value in 0..=100 {
            registry.set_brightness("bedroom_light", value).unwrap();
            let stored = registry.get("bedroom_light").unwrap().brightness.unwrap();
            assert_eq!(i64::from(stored.value()), value);
        }
    }

    #[test]
    fn out_of_range_brightness_leaves_state_unchanged() {
        let registry = DeviceRegistry::with_default_devices();
        let before = registry.get("bedroom_light").unwrap();

        for value in [-1, 101, 1000] {
            let err = registry.set_brightness("bedroom_light", value).unwrap_err();
            assert!(matches!(err, RegistryError::Value(ValueError::OutOfRange { .. })));
            assert_eq!(registry.get("bedroom_light").unwrap(), before);
        }
    }

    #[test]
    fn brightness_on_non_light_is_unsupported() {
        let registry = DeviceRegistry::with_default_devices();
        let err = registry.set_brightness("air_conditioner", 50).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Unsupported {
                attribute: "brightness",
                ..
            }
        ));
    }

    #[test]
    fn set_temperature_round_trip() {
        let registry = DeviceRegistry::with_default_devices();
        registry.set_temperature("heater", 22).unwrap();
        assert_eq!(
            registry.get("heater").unwrap().temperature.unwrap().degrees(),
            22
        );
    }

    #[test]
    fn out_of_range_temperature_leaves_state_unchanged() {
        let registry = DeviceRegistry::with_default_devices();
        let before = registry.get("air_conditioner").unwrap();
        assert!(registry.set_temperature("air_conditioner", 35).is_err());
        assert_eq!(registry.get("air_conditioner").unwrap(), before);
    }

    #[test]
    fn temperature_on_light_is_unsupported() {
        let registry = DeviceRegistry::with_default_devices();
        let err = registry.set_temperature("kitchen_light", 20).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Unsupported {
                attribute: "temperature",
                ..
            }
        ));
    }

    #[test]
    fn set_color_round_trip() {
        let registry = DeviceRegistry::with_default_devices();
        registry.set_color("living_room_light", "#123456").unwrap();
        assert_eq!(
            registry.get("living_room_light").unwrap().color.unwrap().to_hex(),
            "#123456"
        );
    }

    #[test]
    fn malformed_color_leaves_state_unchanged() {
        let registry = DeviceRegistry::with_default_devices();
        let before = registry.get("living_room_light").unwrap();
        assert!(registry.set_color("living_room_light", "red").is_err());
        assert_eq!(registry.get("living_room_light").unwrap(), before);
    }

    #[test]
    fn color_on_climate_device_is_unsupported() {
        let registry = DeviceRegistry::with_default_devices();
        let err = registry.set_color("air_conditioner", "#123456").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Unsupported {
                attribute: "color",
                ..
            }
        ));
    }

    #[test]
    fn list_is_ordered_by_id() {
        let registry = DeviceRegistry::with_default_devices();
        let listing = registry.list();
        let ids: Vec<&str> = listing.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "air_conditioner",
                "bedroom_light",
                "fan",
                "heater",
                "kitchen_light",
                "living_room_light",
            ]
        );
        assert_eq!(listing[0].1, "Air Conditioner");
    }

    #[test]
    fn light_ids_excludes_non_lights() {
        let registry = DeviceRegistry::with_default_devices();
        assert_eq!(
            registry.light_ids(),
            ["bedroom_light", "kitchen_light", "living_room_light"]
        );
    }
}
