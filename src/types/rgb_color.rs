// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with strict `#RRGGBB` hex parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// Parsing is strict: only the `#RRGGBB` form is accepted, matching the
/// schema constraint the backend is asked to honor. Shorthand (`#RGB`) and
/// hashless forms are rejected.
///
/// # Examples
///
/// ```
/// use domvox::types::RgbColor;
///
/// let color = RgbColor::from_hex("#FF5733").unwrap();
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.green(), 87);
/// assert_eq!(color.blue(), 51);
/// assert_eq!(color.to_hex(), "#FF5733");
///
/// assert!(RgbColor::from_hex("FF5733").is_err());
/// assert!(RgbColor::from_hex("#F00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color from channel values.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses a color from a strict `#RRGGBB` hex string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` for anything that does not match
    /// `^#[0-9A-Fa-f]{6}$`.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidColor(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as an uppercase `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}
