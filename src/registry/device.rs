// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity, class, and state.

use crate::types::{Brightness, RgbColor, Temperature};

/// Functional class of a device.
///
/// The class determines which attributes are meaningful: lights carry a
/// brightness (and optionally a color), climate devices carry a temperature
/// setpoint, fans carry power only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// A light: power, brightness, optionally color.
    Light,
    /// A climate device: power and temperature setpoint.
    Climate,
    /// A fan: power only.
    Fan,
}

impl DeviceClass {
    /// Returns `true` for light-class devices (the `all_lights` broadcast
    /// set).
    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

/// Mutable state of a registered device.
///
/// `None` means the attribute is not meaningful for the device's class, or
/// (for a climate setpoint) has not been set yet. Attributes that exist are
/// always in range — out-of-range updates are rejected before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DeviceState {
    /// Whether the device is powered on.
    pub power: bool,
    /// Current brightness, lights only.
    pub brightness: Option<Brightness>,
    /// Current temperature setpoint, climate devices only.
    pub temperature: Option<Temperature>,
    /// Current color, color-capable lights only.
    pub color: Option<RgbColor>,
}

/// Seed description of a device, consumed by the registry at construction.
#[derive(Debug, Clone)]
pub struct DeviceSpec {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) class: DeviceClass,
    pub(crate) state: DeviceState,
}

impl DeviceSpec {
    /// A color-capable light with an initial brightness and color.
    #[must_use]
    pub fn light(
        id: impl Into<String>,
        name: impl Into<String>,
        brightness: Brightness,
        color: RgbColor,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class: DeviceClass::Light,
            state: DeviceState {
                power: false,
                brightness: Some(brightness),
                temperature: None,
                color: Some(color),
            },
        }
    }

    /// A climate device with an optional initial setpoint.
    #[must_use]
    pub fn climate(
        id: impl Into<String>,
        name: impl Into<String>,
        setpoint: Option<Temperature>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class: DeviceClass::Climate,
            state: DeviceState {
                power: false,
                brightness: None,
                temperature: setpoint,
                color: None,
            },
        }
    }

    /// A power-only fan.
    #[must_use]
    pub fn fan(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class: DeviceClass::Fan,
            state: DeviceState {
                power: false,
                brightness: None,
                temperature: None,
                color: None,
            },
        }
    }

    /// Returns the device id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}
