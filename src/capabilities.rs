// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capabilities.
//!
//! Capabilities decide which parameters of a device are tracked in its
//! [`DeviceState`](crate::state::DeviceState). They follow from the device
//! type: every device can be switched, lights also carry brightness and
//! colour.

use crate::model::DeviceType;

/// Capabilities of a Lumic device.
///
/// # Examples
///
/// ```
/// use lumic_lib::{Capabilities, DeviceType};
///
/// let light = Capabilities::for_device_type(&DeviceType::Light);
/// assert!(light.brightness);
/// assert!(light.color);
///
/// let switch = Capabilities::for_device_type(&DeviceType::Switch);
/// assert_eq!(switch, Capabilities::switch());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Supports the `BRIGHTNESS` parameter.
    pub brightness: bool,

    /// Supports the `COLOR` and `COLOR_WHITE` parameters.
    pub color: bool,
}

impl Capabilities {
    /// On/off only.
    #[must_use]
    pub const fn switch() -> Self {
        Self {
            brightness: false,
            color: false,
        }
    }

    /// Dimmable colour light.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            brightness: true,
            color: true,
        }
    }

    /// Returns the capabilities of a device type. Unknown types are treated
    /// as switches.
    #[must_use]
    pub fn for_device_type(device_type: &DeviceType) -> Self {
        match device_type {
            DeviceType::Light => Self::light(),
            _ => Self::switch(),
        }
    }

    /// Returns `true` if the device has any light feature.
    #[must_use]
    pub const fn is_light(&self) -> bool {
        self.brightness || self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_switch() {
        assert_eq!(Capabilities::default(), Capabilities::switch());
        assert!(!Capabilities::default().is_light());
    }

    #[test]
    fn from_device_type() {
        assert_eq!(
            Capabilities::for_device_type(&DeviceType::Light),
            Capabilities::light()
        );
        assert_eq!(
            Capabilities::for_device_type(&DeviceType::RollerShutter),
            Capabilities::switch()
        );
        assert_eq!(
            Capabilities::for_device_type(&DeviceType::Other("HEATER".to_string())),
            Capabilities::switch()
        );
    }
}
