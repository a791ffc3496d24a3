// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use crate::types::{Brightness, HsColor, PowerState};

use super::StateChange;

/// Last known state of a Lumic device.
///
/// Power starts as off. Brightness and colour are unknown until the device
/// reports them or they are set.
///
/// # Examples
///
/// ```
/// use lumic_lib::state::DeviceState;
/// use lumic_lib::types::{Brightness, PowerState};
///
/// let mut state = DeviceState::new();
/// state.set_power(PowerState::On);
/// state.set_brightness(Brightness::new(128));
/// assert!(state.is_on());
/// assert_eq!(state.brightness(), Some(Brightness::new(128)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceState {
    power: PowerState,
    brightness: Option<Brightness>,
    hs_color: Option<HsColor>,
    hardware_address: Option<String>,
}

impl DeviceState {
    /// Creates a new state: off, everything else unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Power ==========

    /// Gets the power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the device is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Sets the power state.
    pub fn set_power(&mut self, state: PowerState) {
        self.power = state;
    }

    // ========== Light ==========

    /// Gets the brightness, if known.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Sets the brightness.
    pub fn set_brightness(&mut self, value: Brightness) {
        self.brightness = Some(value);
    }

    /// Gets the colour, if known.
    #[must_use]
    pub fn hs_color(&self) -> Option<HsColor> {
        self.hs_color
    }

    /// Sets the colour.
    pub fn set_hs_color(&mut self, color: HsColor) {
        self.hs_color = Some(color);
    }

    // ========== Identity ==========

    /// Gets the MAC address reported by the API.
    #[must_use]
    pub fn hardware_address(&self) -> Option<&str> {
        self.hardware_address.as_deref()
    }

    // ========== State Changes ==========

    /// Applies a state change.
    ///
    /// Returns `true` if the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Power(state) => replace(&mut self.power, *state),
            StateChange::Brightness(value) => replace(&mut self.brightness, Some(*value)),
            StateChange::HsColor(color) => replace(&mut self.hs_color, Some(*color)),
            StateChange::HardwareAddress(address) => {
                if self.hardware_address.as_deref() == Some(address.as_str()) {
                    false
                } else {
                    self.hardware_address = Some(address.clone());
                    true
                }
            }
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    if self.apply(c) {
                        any_changed = true;
                    }
                }
                any_changed
            }
        }
    }

    /// Clears all state, resetting to off and unknown.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
