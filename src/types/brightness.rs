// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light level control.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Light brightness as a percentage (0-100).
///
/// 0 is off and 100 is full brightness. Only light-class devices carry a
/// brightness.
///
/// # Examples
///
/// ```
/// use domvox::types::Brightness;
///
/// let level = Brightness::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// // Out-of-range values return an error
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [0, 100].
    // Casts are safe: the value was just range-checked against [0, 100].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(value: i64) -> Result<Self, ValueError> {
        if !(i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            return Err(ValueError::OutOfRange {
                field: "brightness",
                min: i64::from(Self::MIN.0),
                max: i64::from(Self::MAX.0),
                actual: value,
            });
        }
        Ok(Self(value as u8))
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for Brightness {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brightness> for i64 {
    fn from(value: Brightness) -> Self {
        Self::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values() {
        for v in 0..=100 {
            let level = Brightness::new(v).unwrap();
            assert_eq!(i64::from(level.value()), v);
        }
    }

    #[test]
    fn rejects_above_range() {
        assert!(Brightness::new(101).is_err());
        assert!(Brightness::new(1000).is_err());
    }

    #[test]
    fn rejects_negative() {
        let err = Brightness::new(-1).unwrap_err();
        assert!(matches!(err, ValueError::OutOfRange { actual: -1, .. }));
    }

    #[test]
    fn display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75%");
    }

    #[test]
    fn constants() {
        assert_eq!(Brightness::MIN.value(), 0);
        assert_eq!(Brightness::MAX.value(), 100);
    }

    #[test]
    fn deserializes_from_integer() {
        let level: Brightness = serde_json::from_str("50").unwrap();
        assert_eq!(level.value(), 50);
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Brightness>("200").is_err());
    }
}
