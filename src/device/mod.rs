// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity facades for Lumic devices.
//!
//! A facade wraps one device of the home: it keeps the last known
//! [`DeviceState`], translates host commands into parameter mutations and
//! reads the device back with `update()`.
//!
//! - [`Light`]: on/off, brightness and colour
//! - [`Switch`]: on/off
//!
//! Facades share the [`Client`] of their home through an [`Arc`]. Each
//! facade serializes its own on/off transitions; different devices never
//! wait for each other.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use lumic_lib::{Client, Config};
//! use lumic_lib::device::TurnOn;
//! use lumic_lib::types::Brightness;
//!
//! # async fn example() -> lumic_lib::Result<()> {
//! let client = Arc::new(Client::from_config(
//!     &Config::new(4711).with_credentials("client", "secret"),
//! )?);
//!
//! for light in client.lights().await? {
//!     light.update().await?;
//!     if !light.state().is_on() {
//!         light
//!             .turn_on(TurnOn::new().with_brightness(Brightness::new(128)))
//!             .await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod light;
mod switch;

pub use light::{DEFAULT_COLOR_SETTLE_DELAY, Light, TurnOn};
pub use switch::Switch;

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::DOMAIN;
use crate::auth::TokenEndpoint;
use crate::capabilities::Capabilities;
use crate::client::Client;
use crate::error::Error;
use crate::model::{Device, DeviceId, ParameterType};
use crate::protocol::GraphQlTransport;
use crate::state::{DeviceState, StateChange};
use crate::types::PowerState;

/// Manufacturer reported for every device.
pub const MANUFACTURER: &str = "Cedgetec";

/// Software version reported for every device.
pub const SW_VERSION: &str = "0.2";

/// Device registry information for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    /// `(domain, unique id)` pairs.
    pub identifiers: Vec<(String, String)>,
    /// `("mac", address)` pairs, when the address is known.
    pub connections: Vec<(String, String)>,
    /// Display name.
    pub name: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Model, e.g. `Light V1.0`.
    pub model: String,
    /// Software version.
    pub sw_version: String,
}

/// State and plumbing shared by all facades.
#[derive(Debug)]
struct DeviceHandle<E, T> {
    client: Arc<Client<E, T>>,
    id: DeviceId,
    uuid: String,
    name: String,
    model: &'static str,
    capabilities: Capabilities,
    state: RwLock<DeviceState>,
    transition: Mutex<()>,
}

impl<E: TokenEndpoint, T: GraphQlTransport> DeviceHandle<E, T> {
    fn new(
        client: Arc<Client<E, T>>,
        device: &Device,
        model: &'static str,
        capabilities: Capabilities,
    ) -> Self {
        let mut state = DeviceState::new();
        if let Some(address) = &device.hardware_address {
            state.apply(&StateChange::HardwareAddress(address.clone()));
        }

        Self {
            client,
            id: device.id,
            uuid: device.uuid.clone(),
            name: device.display_name(),
            model,
            capabilities,
            state: RwLock::new(state),
            transition: Mutex::new(()),
        }
    }

    fn state(&self) -> DeviceState {
        self.state.read().clone()
    }

    fn device_info(&self) -> DeviceInfo {
        let connections = self
            .state
            .read()
            .hardware_address()
            .map(|address| vec![("mac".to_string(), address.to_string())])
            .unwrap_or_default();

        DeviceInfo {
            identifiers: vec![(DOMAIN.to_string(), self.id.to_string())],
            connections,
            name: self.name.clone(),
            manufacturer: MANUFACTURER.to_string(),
            model: self.model.to_string(),
            sw_version: SW_VERSION.to_string(),
        }
    }

    async fn set(&self, parameter_type: &ParameterType, value: &str) -> Result<(), Error> {
        self.client
            .try_set_device_parameter(&self.uuid, parameter_type, value)
            .await
    }

    /// Switches the device on unless it is known to be on.
    ///
    /// The caller must hold the transition lock.
    async fn power_on(&self) -> Result<(), Error> {
        if self.state.read().is_on() {
            return Ok(());
        }
        self.set_power(PowerState::On).await
    }

    async fn set_power(&self, power: PowerState) -> Result<(), Error> {
        self.set(&ParameterType::State, power.as_parameter_value())
            .await?;
        self.state.write().apply(&StateChange::Power(power));
        tracing::debug!(uuid = %self.uuid, power = %power, "Power state changed");
        Ok(())
    }

    async fn turn_off(&self) -> Result<(), Error> {
        let _transition = self.transition.lock().await;
        self.set_power(PowerState::Off).await
    }

    async fn update(&self) -> Result<(), Error> {
        let Some(details) = self.client.get_device_by_id(self.id).await? else {
            tracing::warn!(id = %self.id, uuid = %self.uuid, "Device no longer reported, keeping last state");
            return Ok(());
        };

        let change = StateChange::from_details(&details, self.capabilities);
        if self.state.write().apply(&change) {
            tracing::debug!(id = %self.id, changes = change.change_count(), "Device state updated");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credentials, Token, TokenManager};
    use crate::error::{EndpointError, RequestError};
    use crate::protocol::GraphQlRequest;
    use serde_json::{Value, json};

    /// Endpoint handing out a fixed token.
    pub(super) struct StaticEndpoint;

    impl TokenEndpoint for StaticEndpoint {
        async fn fetch(&self, _: &Credentials) -> Result<Token, EndpointError> {
            Ok(Token::bearer("static", 300))
        }

        async fn refresh(&self, _: &Credentials, _: &Token) -> Result<Token, EndpointError> {
            Err(EndpointError::NoRefreshToken)
        }
    }

    /// Transport that records mutations and answers queries with a fixed
    /// device.
    #[derive(Default)]
    pub(super) struct RecordingTransport {
        pub(super) mutations: parking_lot::Mutex<Vec<(String, String)>>,
        pub(super) device: Option<Value>,
        pub(super) fail_mutations: bool,
    }

    impl GraphQlTransport for RecordingTransport {
        async fn execute(&self, _: &str, request: &GraphQlRequest) -> Result<Value, RequestError> {
            let variables = request.variables();
            if let Some(parameter) = variables.get("type").and_then(Value::as_str) {
                if self.fail_mutations {
                    return Err(RequestError::Status {
                        status: 500,
                        body: String::new(),
                    });
                }
                let value = variables["value"].as_str().unwrap_or_default().to_string();
                self.mutations.lock().push((parameter.to_string(), value));
                return Ok(json!({ "deviceParameterSet": true }));
            }
            Ok(json!({ "deviceById": self.device.clone().unwrap_or(Value::Null) }))
        }
    }

    pub(super) fn client(
        transport: RecordingTransport,
    ) -> Arc<Client<StaticEndpoint, RecordingTransport>> {
        let auth = TokenManager::new(StaticEndpoint, Credentials::new("id", "secret"));
        Arc::new(Client::new(Some(auth), transport, 1))
    }

    pub(super) fn listed(device_type: &str, hardware_address: Option<&str>) -> Device {
        serde_json::from_value(json!({
            "id": 7,
            "uuid": "uuid-7",
            "name": "Ceiling",
            "hardwareAddress": hardware_address,
            "deviceType": device_type,
            "room": { "name": "Kitchen" }
        }))
        .unwrap()
    }

    #[test]
    fn device_info_carries_identity() {
        let handle = DeviceHandle::new(
            client(RecordingTransport::default()),
            &listed("LIGHT", Some("AA:BB:CC:DD:EE:FF")),
            "Light V1.0",
            Capabilities::light(),
        );

        assert_eq!(
            handle.device_info(),
            DeviceInfo {
                identifiers: vec![("lumic".to_string(), "7".to_string())],
                connections: vec![("mac".to_string(), "AA:BB:CC:DD:EE:FF".to_string())],
                name: "Kitchen Ceiling".to_string(),
                manufacturer: "Cedgetec".to_string(),
                model: "Light V1.0".to_string(),
                sw_version: "0.2".to_string(),
            }
        );
    }

    #[test]
    fn device_info_without_address() {
        let handle = DeviceHandle::new(
            client(RecordingTransport::default()),
            &listed("SWITCH", None),
            "Switch V1.0",
            Capabilities::switch(),
        );

        assert!(handle.device_info().connections.is_empty());
    }

    #[tokio::test]
    async fn update_of_unknown_device_keeps_state() {
        let handle = DeviceHandle::new(
            client(RecordingTransport::default()),
            &listed("SWITCH", None),
            "Switch V1.0",
            Capabilities::switch(),
        );
        handle.state.write().set_power(PowerState::On);

        handle.update().await.unwrap();

        assert!(handle.state().is_on());
    }

    #[test]
    fn state_snapshot_is_detached() {
        let handle = DeviceHandle::new(
            client(RecordingTransport::default()),
            &listed("SWITCH", None),
            "Switch V1.0",
            Capabilities::switch(),
        );
        let before = handle.state();

        handle.state.write().set_power(PowerState::On);

        assert!(!before.is_on());
        assert!(handle.state().is_on());
    }
}
