// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Lumic device control.
//!
//! Each type ensures values are within their valid ranges at construction
//! time and knows how to render itself as a device parameter value.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off, the `STATE` parameter
//! - [`Brightness`] - Brightness level (0-255), the `BRIGHTNESS` parameter
//! - [`HsColor`] - Hue/saturation color as used by hosts
//! - [`RgbColor`] - Hex color, the `COLOR` parameter
//! - [`LightColor`] - `COLOR` plus `COLOR_WHITE`, converted from/to [`HsColor`]

mod brightness;
mod color;
mod power;
mod rgb_color;

pub use brightness::Brightness;
pub use color::{HsColor, LightColor};
pub use power::PowerState;
pub use rgb_color::RgbColor;
