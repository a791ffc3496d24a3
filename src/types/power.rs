// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of a light or switch.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Represents the power state of a device.
///
/// The Lumic API carries power as the `STATE` parameter: `"1"` for on and
/// `"0"` for off.
///
/// # Examples
///
/// ```
/// use lumic_lib::types::PowerState;
///
/// assert_eq!(PowerState::On.as_parameter_value(), "1");
/// assert_eq!(PowerState::from_numeric(Some(1.0)), PowerState::On);
/// assert_eq!(PowerState::from_numeric(None), PowerState::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the string used as `STATE` parameter value.
    #[must_use]
    pub const fn as_parameter_value(&self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::On => "1",
        }
    }

    /// Interprets the numeric value reported for the `STATE` parameter.
    ///
    /// Only an exact `1` means on; anything else, including a missing
    /// value, reads as off.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_numeric(value: Option<f64>) -> Self {
        if value == Some(1.0) { Self::On } else { Self::Off }
    }

    /// Returns `true` for [`PowerState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "OFF"),
            Self::On => write!(f, "ON"),
        }
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" | "0" | "FALSE" => Ok(Self::Off),
            "ON" | "1" | "TRUE" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
