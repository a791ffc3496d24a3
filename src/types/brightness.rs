// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light control.

use std::fmt;

use crate::error::ValueError;

/// Brightness level of a light on the 0-255 scale used by the `BRIGHTNESS`
/// parameter.
///
/// # Examples
///
/// ```
/// use lumic_lib::types::Brightness;
///
/// let half = Brightness::from_percentage(50).unwrap();
/// assert_eq!(half.value(), 128);
/// assert_eq!(half.percentage(), 50);
///
/// assert!(Brightness::from_percentage(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Brightness(u8);

impl Brightness {
    /// Lights off.
    pub const MIN: Self = Self(0);

    /// Full brightness.
    pub const MAX: Self = Self(255);

    /// Creates a brightness from a raw 0-255 value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Creates a brightness from a percentage (0-100).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the percentage exceeds 100.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_percentage(percent: u8) -> Result<Self, ValueError> {
        if percent > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(percent),
            });
        }
        Ok(Self((f32::from(percent) * 255.0 / 100.0).round() as u8))
    }

    /// Creates a brightness from the numeric value reported by the API,
    /// clamping to the valid range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_numeric(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 255.0) as u8)
    }

    /// Returns the raw 0-255 value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a rounded percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u8 {
        (f32::from(self.0) * 100.0 / 255.0).round() as u8
    }

    /// Returns the string used as `BRIGHTNESS` parameter value.
    #[must_use]
    pub fn to_parameter_value(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/255", self.0)
    }
}

impl From<u8> for Brightness {
    fn from(value: u8) -> Self {
        Self(value)
    }
}
