// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Lumic` Lib - A Rust library to control Lumic smart-home devices.
//!
//! This library provides async APIs to the Lumic cloud: OAuth2
//! client-credentials authentication with a persistent token cache, a GraphQL
//! client for the device API, and light/switch facades for home-automation
//! hosts.
//!
//! # Supported Features
//!
//! - **Authentication**: single-flight token acquisition, refresh with
//!   fallback to a fresh grant, token file surviving restarts
//! - **Device discovery**: list the devices of a home, filtered by type
//! - **Device control**: set parameters (`STATE`, `BRIGHTNESS`, `COLOR`,
//!   `COLOR_WHITE`) and read them back
//! - **Facades**: [`Light`] and [`Switch`] with cached state
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use lumic_lib::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> lumic_lib::Result<()> {
//!     let config = Config::new(4711)
//!         .with_credentials("client-id", "client-secret")
//!         .with_token_dir("/var/lib/host");
//!     let client = Arc::new(Client::from_config(&config)?);
//!
//!     for switch in client.switches().await? {
//!         switch.update().await?;
//!         println!("{}: {}", switch.name(), switch.state().power());
//!         switch.turn_on().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Lower-Level Access
//!
//! ```no_run
//! use lumic_lib::{Client, Config, DeviceId, ParameterType};
//!
//! # async fn example() -> lumic_lib::Result<()> {
//! let client = Client::from_config(&Config::new(4711).with_credentials("id", "secret"))?;
//!
//! if let Some(device) = client.get_device_by_id(DeviceId::new(12)).await? {
//!     client
//!         .try_set_device_parameter(&device.uuid, &ParameterType::Brightness, "128")
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The library logs through [`tracing`] and installs no subscriber. Token
//! values are never logged.

pub mod auth;
mod capabilities;
mod client;
mod config;
pub mod device;
pub mod error;
pub mod model;
pub mod protocol;
pub mod state;
pub mod types;

/// Integration domain, used in device identifiers.
pub const DOMAIN: &str = "lumic";

pub use auth::{Credentials, OAuth2Client, Token, TokenEndpoint, TokenManager, TokenStore};
pub use capabilities::Capabilities;
pub use client::Client;
pub use config::Config;
pub use device::{DeviceInfo, Light, Switch, TurnOn};
pub use error::{
    AuthError, ConfigError, EndpointError, Error, ParseError, RequestError, Result, StoreError,
    ValueError,
};
pub use model::{Device, DeviceDetails, DeviceId, DeviceParameter, DeviceType, ParameterType, Room};
pub use protocol::{GraphQlRequest, GraphQlTransport, HttpTransport};
pub use types::{Brightness, HsColor, LightColor, PowerState, RgbColor};
