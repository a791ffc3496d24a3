// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lumic API client.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::auth::{OAuth2Client, TokenEndpoint, TokenManager};
use crate::config::Config;
use crate::device::{Light, Switch};
use crate::error::{Error, ParseError, RequestError, Result};
use crate::model::{Device, DeviceDetails, DeviceId, DeviceType, ParameterType};
use crate::protocol::{GraphQlRequest, GraphQlTransport, HttpTransport, operations};

/// Authenticated access to one Lumic home.
///
/// The client owns the [`TokenManager`]; every request obtains a token from
/// it before talking to the GraphQL endpoint. A client built without
/// credentials answers every request with [`Error::NotAuthenticated`].
///
/// The client is `Send + Sync`; share it through an [`Arc`] between the
/// facades of a home.
///
/// # Examples
///
/// ```no_run
/// use lumic_lib::{Client, Config, DeviceType};
///
/// # async fn example() -> lumic_lib::Result<()> {
/// let config = Config::new(4711)
///     .with_credentials("client", "secret")
///     .with_token_dir("/var/lib/host");
/// let client = Client::from_config(&config)?;
///
/// for device in client.list_devices_by_type(&DeviceType::Light).await? {
///     println!("{} ({})", device.display_name(), device.id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<E = OAuth2Client, T = HttpTransport> {
    auth: Option<TokenManager<E>>,
    transport: T,
    home_id: i64,
}

impl Client {
    /// Creates a client from the host configuration.
    ///
    /// One HTTP connection pool, with the configured timeout, is shared by
    /// the token endpoint and the GraphQL transport.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid, or
    /// `Error::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(RequestError::Http)?;

        let auth = match config.credentials() {
            Some(credentials) => {
                let endpoint = OAuth2Client::new(http.clone(), config.token_endpoint())
                    .with_scopes(config.scopes().to_vec());
                let mut manager = TokenManager::new(endpoint, credentials);
                if let Some(store) = config.token_store() {
                    manager = manager.with_store(store);
                }
                if let Some(margin) = config.refresh_margin() {
                    manager = manager.with_refresh_margin(margin);
                }
                Some(manager)
            }
            None => {
                tracing::warn!(
                    home_id = config.home_id(),
                    "No client credentials configured, requests will fail"
                );
                None
            }
        };

        let transport = HttpTransport::new(http, config.api_endpoint());
        Ok(Self::new(auth, transport, config.home_id()))
    }
}

impl<E: TokenEndpoint, T: GraphQlTransport> Client<E, T> {
    /// Creates a client from its parts. `auth` is `None` when no
    /// credentials are available.
    #[must_use]
    pub fn new(auth: Option<TokenManager<E>>, transport: T, home_id: i64) -> Self {
        Self {
            auth,
            transport,
            home_id,
        }
    }

    /// Returns the home id.
    #[must_use]
    pub fn home_id(&self) -> i64 {
        self.home_id
    }

    /// Returns `true` if credentials are configured.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Returns the token manager, if credentials are configured.
    #[must_use]
    pub fn token_manager(&self) -> Option<&TokenManager<E>> {
        self.auth.as_ref()
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Executes a GraphQL query or mutation and returns its `data` member.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotAuthenticated` without any network I/O if no
    /// credentials are configured, `Error::Authentication` if no token can be
    /// obtained, and `Error::Request` if the API call fails.
    pub async fn request(&self, query: &str, variables: Value) -> Result<Value> {
        let Some(auth) = &self.auth else {
            tracing::error!("Cannot send request without client credentials");
            return Err(Error::NotAuthenticated);
        };

        let token = auth.get_token().await?;
        tracing::trace!(query, %variables, "Executing GraphQL operation");

        let request = GraphQlRequest::new(query, variables);
        self.transport
            .execute(&token.access_token, &request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "GraphQL request failed"))
            .map_err(Error::from)
    }

    /// Lists every device of the home.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not hold a
    /// device list.
    pub async fn list_devices(&self) -> Result<Vec<Device>> {
        let data = self
            .request(operations::HOME_DEVICES, json!({ "id": self.home_id }))
            .await?;

        let home = data
            .get("homeById")
            .filter(|home| !home.is_null())
            .ok_or_else(|| ParseError::MissingField("homeById".to_string()))?;
        let devices = home
            .get("devices")
            .ok_or_else(|| ParseError::MissingField("homeById.devices".to_string()))?;

        decode(devices)
    }

    /// Lists the devices of the given type, in API order.
    ///
    /// # Errors
    ///
    /// Same as [`list_devices`](Self::list_devices).
    pub async fn list_devices_by_type(&self, device_type: &DeviceType) -> Result<Vec<Device>> {
        let mut devices = self.list_devices().await?;
        devices.retain(|device| &device.device_type == device_type);
        tracing::debug!(
            device_type = %device_type,
            count = devices.len(),
            "Listed devices"
        );
        Ok(devices)
    }

    /// Fetches one device with its current parameters.
    ///
    /// Returns `Ok(None)` if the API knows no device with this id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get_device_by_id(&self, id: DeviceId) -> Result<Option<DeviceDetails>> {
        let data = self
            .request(operations::DEVICE_BY_ID, json!({ "id": id.value() }))
            .await?;

        match data.get("deviceById") {
            None => Err(ParseError::MissingField("deviceById".to_string()).into()),
            Some(Value::Null) => {
                tracing::debug!(id = %id, "Device not found");
                Ok(None)
            }
            Some(device) => decode(device).map(Some),
        }
    }

    /// Sets one parameter of a device.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation cannot be executed.
    pub async fn try_set_device_parameter(
        &self,
        uuid: &str,
        parameter_type: &ParameterType,
        value: &str,
    ) -> Result<()> {
        tracing::debug!(uuid, parameter = %parameter_type, value, "Setting device parameter");
        self.request(
            operations::DEVICE_PARAMETER_SET,
            json!({
                "uuid": uuid,
                "type": parameter_type.as_str(),
                "value": value,
            }),
        )
        .await?;
        Ok(())
    }

    /// Sets one parameter of a device, reporting only success.
    ///
    /// Returns `true` if the mutation executed without error. Failures are
    /// logged, never returned.
    pub async fn set_device_parameter(
        &self,
        uuid: &str,
        parameter_type: &ParameterType,
        value: &str,
    ) -> bool {
        match self.try_set_device_parameter(uuid, parameter_type, value).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(uuid, parameter = %parameter_type, error = %e, "Failed to set device parameter");
                false
            }
        }
    }

    /// Pauses between dependent mutations.
    pub async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Creates a [`Light`] for every light of the home.
    ///
    /// # Errors
    ///
    /// Same as [`list_devices`](Self::list_devices).
    pub async fn lights(self: &Arc<Self>) -> Result<Vec<Light<E, T>>> {
        let devices = self.list_devices_by_type(&DeviceType::Light).await?;
        Ok(devices
            .iter()
            .map(|device| Light::new(Arc::clone(self), device))
            .collect())
    }

    /// Creates a [`Switch`] for every switch of the home.
    ///
    /// # Errors
    ///
    /// Same as [`list_devices`](Self::list_devices).
    pub async fn switches(self: &Arc<Self>) -> Result<Vec<Switch<E, T>>> {
        let devices = self.list_devices_by_type(&DeviceType::Switch).await?;
        Ok(devices
            .iter()
            .map(|device| Switch::new(Arc::clone(self), device))
            .collect())
    }
}

fn decode<D: DeserializeOwned>(value: &Value) -> Result<D> {
    D::deserialize(value).map_err(|e| ParseError::Json(e).into())
}
