// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off switch.

use std::sync::Arc;

use crate::auth::{OAuth2Client, TokenEndpoint};
use crate::capabilities::Capabilities;
use crate::client::Client;
use crate::error::Error;
use crate::model::{Device, DeviceId};
use crate::protocol::{GraphQlTransport, HttpTransport};
use crate::state::DeviceState;

use super::{DeviceHandle, DeviceInfo};

const MODEL: &str = "Switch V1.0";

/// A Lumic switch.
#[derive(Debug)]
pub struct Switch<E = OAuth2Client, T = HttpTransport> {
    handle: DeviceHandle<E, T>,
}

impl<E: TokenEndpoint, T: GraphQlTransport> Switch<E, T> {
    /// Creates a facade for a device of the home devices listing.
    #[must_use]
    pub fn new(client: Arc<Client<E, T>>, device: &Device) -> Self {
        Self {
            handle: DeviceHandle::new(client, device, MODEL, Capabilities::switch()),
        }
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

    /// Turns the switch on, unless it is known to be on.
    ///
    /// # Errors
    ///
    /// Returns an error if the `STATE` mutation fails.
    pub async fn turn_on(&self) -> Result<(), Error> {
        let _transition = self.handle.transition.lock().await;
        self.handle.power_on().await
    }

    /// Turns the switch off.
    ///
    /// # Errors
    ///
    /// Returns an error if the `STATE` mutation fails.
    pub async fn turn_off(&self) -> Result<(), Error> {
        self.handle.turn_off().await
    }

    /// Reads the device back and refreshes the on/off state.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be fetched; the previous state
    /// is retained.
    pub async fn update(&self) -> Result<(), Error> {
        self.handle.update().await
    }
}
