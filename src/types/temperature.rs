// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature setpoint type for climate devices.

use std::fmt;

use crate::error::ValueError;

/// Climate setpoint in degrees Celsius (16-30).
///
/// Only climate-class devices (air conditioner, heater) carry a setpoint.
///
/// # Examples
///
/// ```
/// use domvox::types::Temperature;
///
/// let setpoint = Temperature::new(24).unwrap();
/// assert_eq!(setpoint.degrees(), 24);
///
/// assert!(Temperature::new(15).is_err());
/// assert!(Temperature::new(31).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Temperature(i8);

impl Temperature {
    /// Minimum setpoint (16 °C).
    pub const MIN: Self = Self(16);

    /// Maximum setpoint (30 °C).
    pub const MAX: Self = Self(30);

    /// Creates a new temperature setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [16, 30].
    // Cast is safe: the value was just range-checked against [16, 30].
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(degrees: i64) -> Result<Self, ValueError> {
        if !(i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&degrees) {
            return Err(ValueError::OutOfRange {
                field: "temperature",
                min: i64::from(Self::MIN.0),
                max: i64::from(Self::MAX.0),
                actual: degrees,
            });
        }
        Ok(Self(degrees as i8))
    }

    /// Returns the setpoint in degrees Celsius.
    #[must_use]
    pub const fn degrees(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl TryFrom<i64> for Temperature {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for i64 {
    fn from(value: Temperature) -> Self {
        Self::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values() {
        for degrees in 16..=30 {
            let setpoint = Temperature::new(degrees).unwrap();
            assert_eq!(i64::from(setpoint.degrees()), degrees);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Temperature::new(15).is_err());
        assert!(Temperature::new(31).is_err());
        assert!(Temperature::new(0).is_err());
        assert!(Temperature::new(-5).is_err());
    }

    #[test]
    fn error_names_field() {
        let err = Temperature::new(40).unwrap_err();
        assert!(matches!(
            err,
            ValueError::OutOfRange {
                field: "temperature",
                min: 16,
                max: 30,
                actual: 40,
            }
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Temperature::new(24).unwrap().to_string(), "24°C");
    }

    #[test]
    fn deserializes_from_integer() {
        let setpoint: Temperature = serde_json::from_str("22").unwrap();
        assert_eq!(setpoint.degrees(), 22);
    }
}
