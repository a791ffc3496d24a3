// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and hue conversion.
//!
//! The `COLOR` parameter of a Lumic light is an `#rrggbb` string. Only the
//! hue of that color is meaningful: the white channel is carried separately
//! by `COLOR_WHITE` (see [`LightColor`](super::LightColor)).

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use lumic_lib::types::RgbColor;
///
/// let orange = RgbColor::from_hex("#ff8000").unwrap();
/// assert_eq!(orange.red(), 255);
/// assert_eq!(orange.hue(), 30);
/// assert_eq!(orange.to_parameter_value(), "#ff8000");
///
/// assert_eq!(RgbColor::from_hue(120).to_parameter_value(), "#00ff00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Black, sent as color when only the white channel should be lit.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, in either case.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not a hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(hex.to_string()))
        };

        match digits.len() {
            // ASCII-only past the check above, so byte slicing is safe.
            3 => Ok(Self::new(
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            )),
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ValueError::InvalidHexColor(hex.to_string())),
        }
    }

    /// Creates the fully saturated, full value color for a hue in degrees.
    ///
    /// Follows the hexcone steps of the Lumic app in `f64`; channels are
    /// truncated, not rounded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_hue(hue: u16) -> Self {
        const V: f64 = 255.0;

        let h = f64::from(hue) / 360.0;
        let sector = (h * 6.0).trunc();
        let f = h * 6.0 - sector;
        let q = V * (1.0 - f);
        let t = V * (1.0 - (1.0 - f));

        let (r, g, b) = match (sector as u32) % 6 {
            0 => (V, t, 0.0),
            1 => (q, V, 0.0),
            2 => (0.0, V, t),
            3 => (0.0, q, V),
            4 => (t, 0.0, V),
            _ => (V, 0.0, q),
        };

        Self::new(r as u8, g as u8, b as u8)
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the hue in whole degrees, truncated.
    ///
    /// Grey levels, including black and white, have hue 0.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_cmp
    )]
    pub fn hue(&self) -> u16 {
        let r = f64::from(self.red);
        let g = f64::from(self.green);
        let b = f64::from(self.blue);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == min {
            return 0;
        }

        let range = max - min;
        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        ((h / 6.0).rem_euclid(1.0) * 360.0) as u16
    }

    /// Returns the color as `#rrggbb`, the format of the `COLOR` parameter.
    #[must_use]
    pub fn to_parameter_value(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_parameter_value())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
