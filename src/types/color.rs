// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.
//!
//! Hosts think in hue/saturation ([`HsColor`]). A Lumic light is driven by
//! two parameters instead: an RGB `COLOR` that only carries the hue, and a
//! `COLOR_WHITE` level that mixes in white. [`LightColor`] converts between
//! the two representations.

use std::fmt;

use crate::error::ValueError;

use super::RgbColor;

/// Hue/saturation color.
///
/// # Examples
///
/// ```
/// use lumic_lib::types::HsColor;
///
/// let teal = HsColor::new(180, 60).unwrap();
/// assert_eq!(teal.hue(), 180);
/// assert_eq!(teal.saturation(), 60);
///
/// assert!(HsColor::new(361, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HsColor {
    hue: u16,
    saturation: u8,
}

impl HsColor {
    /// Maximum hue value (wraps at 360).
    pub const MAX_HUE: u16 = 360;

    /// Maximum saturation value.
    pub const MAX_SATURATION: u8 = 100;

    /// Creates a new hue/saturation color.
    ///
    /// # Arguments
    ///
    /// * `hue` - Color hue (0-360 degrees, where 0/360 is red)
    /// * `saturation` - Color saturation (0-100%)
    ///
    /// # Errors
    ///
    /// Returns error if any value is outside its valid range.
    pub fn new(hue: u16, saturation: u8) -> Result<Self, ValueError> {
        if hue > Self::MAX_HUE {
            return Err(ValueError::InvalidHue(hue));
        }
        if saturation > Self::MAX_SATURATION {
            return Err(ValueError::InvalidSaturation(saturation));
        }
        Ok(Self { hue, saturation })
    }

    /// Returns the hue value (0-360).
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation value (0-100).
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }
}

impl fmt::Display for HsColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HS({}, {}%)", self.hue, self.saturation)
    }
}

/// The pair of parameters a Lumic light uses for its color.
///
/// Saturation maps inversely onto the white channel: 0% saturation is full
/// white (255), 100% is no white. When the white channel is full the color
/// channel is switched to black.
///
/// # Examples
///
/// ```
/// use lumic_lib::types::{HsColor, LightColor, RgbColor};
///
/// let color = LightColor::from_hs(HsColor::new(120, 100).unwrap());
/// assert_eq!(color.color, RgbColor::new(0, 255, 0));
/// assert_eq!(color.white, 0);
///
/// let white = LightColor::from_hs(HsColor::new(120, 0).unwrap());
/// assert_eq!(white.color, RgbColor::BLACK);
/// assert_eq!(white.white, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightColor {
    /// Value of the `COLOR` parameter.
    pub color: RgbColor,
    /// Value of the `COLOR_WHITE` parameter.
    pub white: u8,
}

impl LightColor {
    /// Converts a host color into the light's parameters.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_hs(hs: HsColor) -> Self {
        let white = (255.0 - f32::from(hs.saturation()) * 255.0 / 100.0) as u8;
        let color = if white == u8::MAX {
            RgbColor::BLACK
        } else {
            RgbColor::from_hue(hs.hue())
        };
        Self { color, white }
    }

    /// Converts the light's parameters back into a host color.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hs(&self) -> HsColor {
        let saturation = (f32::from(u8::MAX - self.white) * 100.0 / 255.0) as u8;
        HsColor {
            hue: self.color.hue(),
            saturation,
        }
    }
}
