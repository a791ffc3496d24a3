// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimmable colour light.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{OAuth2Client, TokenEndpoint};
use crate::capabilities::Capabilities;
use crate::client::Client;
use crate::error::Error;
use crate::model::{Device, DeviceId, ParameterType};
use crate::protocol::{GraphQlTransport, HttpTransport};
use crate::state::{DeviceState, StateChange};
use crate::types::{Brightness, HsColor, LightColor};

use super::{DeviceHandle, DeviceInfo};

/// Pause between setting `COLOR` and `COLOR_WHITE`.
pub const DEFAULT_COLOR_SETTLE_DELAY: Duration = Duration::from_millis(500);

const MODEL: &str = "Light V1.0";

/// Attributes of a turn-on command.
///
/// # Examples
///
/// ```
/// use lumic_lib::device::TurnOn;
/// use lumic_lib::types::{Brightness, HsColor};
///
/// let command = TurnOn::new()
///     .with_brightness(Brightness::MAX)
///     .with_hs_color(HsColor::new(30, 100).unwrap());
/// assert_eq!(command.brightness, Some(Brightness::MAX));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnOn {
    /// Brightness to set.
    pub brightness: Option<Brightness>,
    /// Colour to set.
    pub hs_color: Option<HsColor>,
}

impl TurnOn {
    /// Turn on without changing brightness or colour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also sets the brightness.
    #[must_use]
    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Also sets the colour.
    #[must_use]
    pub fn with_hs_color(mut self, hs_color: HsColor) -> Self {
        self.hs_color = Some(hs_color);
        self
    }
}

/// A Lumic light.
///
/// Lights take brightness through the `BRIGHTNESS` parameter (0-255) and
/// colour through two parameters: `COLOR` holds the hue at full saturation as
/// `#rrggbb`, `COLOR_WHITE` the white level that washes it out. The device
/// needs a short pause between the two, see
/// [`with_color_settle_delay`](Self::with_color_settle_delay).
#[derive(Debug)]
pub struct Light<E = OAuth2Client, T = HttpTransport> {
    handle: DeviceHandle<E, T>,
    color_settle_delay: Duration,
}

impl<E: TokenEndpoint, T: GraphQlTransport> Light<E, T> {
    /// Creates a facade for a device of the home devices listing.
    #[must_use]
    pub fn new(client: Arc<Client<E, T>>, device: &Device) -> Self {
        Self {
            handle: DeviceHandle::new(client, device, MODEL, Capabilities::light()),
            color_settle_delay: DEFAULT_COLOR_SETTLE_DELAY,
        }
    }

    /// Sets the pause between the `COLOR` and `COLOR_WHITE` mutations.
    #[must_use]
    pub fn with_color_settle_delay(mut self, delay: Duration) -> Self {
        self.color_settle_delay = delay;
        self
    }

    /// Returns the device id.
    #[must_use]
    pub fn unique_id(&self) -> DeviceId {
        self.handle.id
    }

    /// Returns the device UUID.
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.handle.uuid
    }

    /// Returns the display name: room name and device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.handle.name
    }

    /// Returns the capabilities.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.handle.capabilities
    }

    /// Returns the registry information.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        self.handle.device_info()
    }

    /// Returns a snapshot of the last known state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.handle.state()
    }

    /// Turns the light on, applying brightness and colour first.
    ///
    /// Mutations are sent in order: `BRIGHTNESS`, `COLOR`, a pause,
    /// `COLOR_WHITE`, then `STATE` if the light is not known to be on. The
    /// local state follows each successful mutation.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed mutation; later mutations are
    /// not sent.
    pub async fn turn_on(&self, command: TurnOn) -> Result<(), Error> {
        let _transition = self.handle.transition.lock().await;

        if let Some(brightness) = command.brightness {
            self.handle
                .set(&ParameterType::Brightness, &brightness.to_parameter_value())
                .await?;
            self.handle
                .state
                .write()
                .apply(&StateChange::Brightness(brightness));
        }

        if let Some(hs_color) = command.hs_color {
            let params = LightColor::from_hs(hs_color);
            self.handle
                .set(&ParameterType::Color, &params.color.to_parameter_value())
                .await?;
            self.handle.client.sleep(self.color_settle_delay).await;
            self.handle
                .set(&ParameterType::ColorWhite, &params.white.to_string())
                .await?;
            self.handle
                .state
                .write()
                .apply(&StateChange::HsColor(hs_color));
        }

        self.handle.power_on().await
    }

    /// Turns the light off.
    ///
    /// # Errors
    ///
    /// Returns an error if the `STATE` mutation fails; the state is then left
    /// unchanged.
    pub async fn turn_off(&self) -> Result<(), Error> {
        self.handle.turn_off().await
    }

    /// Reads the device back and refreshes the state.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be fetched; the previous state
    /// is retained.
    pub async fn update(&self) -> Result<(), Error> {
        self.handle.update().await
    }
}
