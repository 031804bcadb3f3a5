// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed device commands.
//!
//! A [`Command`] is the validated intent produced by the
//! [`Interpreter`](crate::Interpreter): one variant per verb in the closed
//! enumeration, each carrying its payload as an already-validated type.
//! Because the enum is closed, the dispatcher's match is exhaustive and
//! there is no runtime "unknown command" branch for anything in the set.

use std::fmt;

use crate::types::{Brightness, RgbColor, Temperature};

/// Target of a command: one concrete device, or the light broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single device id.
    Device(String),
    /// Every light-class device, expanded by the dispatcher.
    AllLights,
}

impl Target {
    /// Wire name of the `all_lights` sentinel.
    pub const ALL_LIGHTS: &'static str = "all_lights";

    /// Parses a wire device name into a target.
    #[must_use]
    pub fn from_wire(device: &str) -> Self {
        if device == Self::ALL_LIGHTS {
            Self::AllLights
        } else {
            Self::Device(device.to_string())
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(id) => f.write_str(id),
            Self::AllLights => f.write_str(Self::ALL_LIGHTS),
        }
    }
}

/// A validated, immutable device command.
///
/// # Examples
///
/// ```
/// use domvox::command::{Command, Target};
///
/// let cmd = Command::TurnOn {
///     target: Target::from_wire("living_room_light"),
/// };
/// assert_eq!(cmd.verb(), "turn_on");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Power a device (or all lights) on.
    TurnOn {
        /// The device or broadcast target.
        target: Target,
    },
    /// Power a device (or all lights) off.
    TurnOff {
        /// The device or broadcast target.
        target: Target,
    },
    /// Set a light's brightness.
    SetBrightness {
        /// The device or broadcast target.
        target: Target,
        /// The validated brightness level.
        brightness: Brightness,
    },
    /// Set a climate device's temperature setpoint.
    SetTemperature {
        /// The device or broadcast target.
        target: Target,
        /// The validated setpoint.
        temperature: Temperature,
    },
    /// Set a light's color.
    SetColor {
        /// The device or broadcast target.
        target: Target,
        /// The validated color.
        color: RgbColor,
    },
}

impl Command {
    /// Returns the verb's wire name.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::TurnOn { .. } => "turn_on",
            Self::TurnOff { .. } => "turn_off",
            Self::SetBrightness { .. } => "set_brightness",
            Self::SetTemperature { .. } => "set_temperature",
            Self::SetColor { .. } => "set_color",
        }
    }

    /// Returns the command's target.
    #[must_use]
    pub const fn target(&self) -> &Target {
        match self {
            Self::TurnOn { target }
            | Self::TurnOff { target }
            | Self::SetBrightness { target, .. }
            | Self::SetTemperature { target, .. }
            | Self::SetColor { target, .. } => target,
        }
    }

    /// Returns the payload value rendered for an action record, if any.
    #[must_use]
    pub fn value_string(&self) -> Option<String> {
        match self {
            Self::TurnOn { .. } | Self::TurnOff { .. } => None,
            Self::SetBrightness { brightness, .. } => Some(brightness.value().to_string()),
            Self::SetTemperature { temperature, .. } => Some(temperature.degrees().to_string()),
            Self::SetColor { color, .. } => Some(color.to_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_from_wire_sentinel() {
        assert_eq!(Target::from_wire("all_lights"), Target::AllLights);
        assert_eq!(
            Target::from_wire("fan"),
            Target::Device("fan".to_string())
        );
    }

    #[test]
    fn target_display() {
        assert_eq!(Target::AllLights.to_string(), "all_lights");
        assert_eq!(Target::Device("fan".to_string()).to_string(), "fan");
    }

    #[test]
    fn verb_names() {
        let target = Target::AllLights;
        assert_eq!(Command::TurnOn { target: target.clone() }.verb(), "turn_on");
        assert_eq!(Command::TurnOff { target }.verb(), "turn_off");
    }

    #[test]
    fn value_string_per_verb() {
        let target = Target::Device("bedroom_light".to_string());
        let on = Command::TurnOn {
            target: target.clone(),
        };
        assert_eq!(on.value_string(), None);

        let dim = Command::SetBrightness {
            target: target.clone(),
            brightness: Brightness::new(30).unwrap(),
        };
        assert_eq!(dim.value_string().unwrap(), "30");

        let color = Command::SetColor {
            target,
            color: RgbColor::from_hex("#ffe4c4").unwrap(),
        };
        assert_eq!(color.value_string().unwrap(), "#FFE4C4");
    }
}
