// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! # Change Types
//!
//! - [`StateChange::Power`] - on/off
//! - [`StateChange::Brightness`] - brightness level
//! - [`StateChange::HsColor`] - colour as hue and saturation
//! - [`StateChange::HardwareAddress`] - MAC address reported by the API
//! - [`StateChange::Batch`] - multiple changes grouped together
//!
//! # Examples
//!
//! ```
//! use lumic_lib::state::{DeviceState, StateChange};
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::power_on()));
//! assert!(!state.apply(&StateChange::power_on()));
//! ```

use crate::capabilities::Capabilities;
use crate::model::{DeviceDetails, ParameterType};
use crate::types::{Brightness, HsColor, LightColor, PowerState, RgbColor};

/// Represents a change in device state.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// Power state changed.
    Power(PowerState),

    /// Brightness changed.
    Brightness(Brightness),

    /// Colour changed.
    HsColor(HsColor),

    /// The device reported its hardware address.
    HardwareAddress(String),

    /// Multiple changes at once.
    ///
    /// Used when the device parameters are read back from the API.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a power-on change.
    #[must_use]
    pub fn power_on() -> Self {
        Self::Power(PowerState::On)
    }

    /// Creates a power-off change.
    #[must_use]
    pub fn power_off() -> Self {
        Self::Power(PowerState::Off)
    }

    /// Derives the state of a device from its reported parameters.
    ///
    /// - `STATE` is on only if its numeric value is exactly 1; a missing
    ///   `STATE` reads as off.
    /// - With brightness capability, `BRIGHTNESS` is taken from its numeric
    ///   value.
    /// - With colour capability, a colour is derived only when both `COLOR`
    ///   and `COLOR_WHITE` are present and parse.
    #[must_use]
    pub fn from_details(details: &DeviceDetails, capabilities: Capabilities) -> Self {
        let mut changes = Vec::new();

        let state = details
            .parameter(&ParameterType::State)
            .and_then(|p| p.value_numeric);
        changes.push(Self::Power(PowerState::from_numeric(state)));

        if capabilities.brightness {
            if let Some(value) = details
                .parameter(&ParameterType::Brightness)
                .and_then(|p| p.value_numeric)
            {
                changes.push(Self::Brightness(Brightness::from_numeric(value)));
            }
        }

        if capabilities.color {
            if let Some(hs) = color_of(details) {
                changes.push(Self::HsColor(hs));
            }
        }

        if let Some(address) = &details.hardware_address {
            changes.push(Self::HardwareAddress(address.clone()));
        }

        Self::Batch(changes)
    }

    /// Returns `true` if this is a power change.
    #[must_use]
    pub fn is_power(&self) -> bool {
        matches!(self, Self::Power(_))
    }

    /// Returns the number of changes.
    ///
    /// For batch changes, returns the total count of nested changes.
    #[must_use]
    pub fn change_count(&self) -> usize {
        match self {
            Self::Batch(changes) => changes.iter().map(Self::change_count).sum(),
            _ => 1,
        }
    }
}

fn color_of(details: &DeviceDetails) -> Option<HsColor> {
    let color = details.parameter(&ParameterType::Color)?.value.as_deref()?;
    let white = details
        .parameter(&ParameterType::ColorWhite)?
        .value_numeric?;

    let color = match RgbColor::from_hex(color) {
        Ok(color) => color,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unparsable COLOR parameter");
            return None;
        }
    };

    // Clamped to 0-255 first, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let white = white.clamp(0.0, 255.0) as u8;

    Some(LightColor { color, white }.to_hs())
}
