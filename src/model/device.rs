// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Devices as returned by the Lumic GraphQL API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::{DeviceParameter, ParameterType};

/// Numeric identifier of a device.
///
/// The API declares ids as `Float`, so they arrive as JSON numbers. Integral
/// floats and numeric strings are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeviceId(i64);

impl DeviceId {
    /// Creates a device id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DeviceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for DeviceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(id) => Ok(Self(id)),
            #[allow(clippy::cast_possible_truncation)]
            Raw::Float(id) if id.fract() == 0.0 && id.abs() < 9.0e15 => Ok(Self(id as i64)),
            Raw::Float(id) => Err(serde::de::Error::custom(format!(
                "device id {id} is not an integer"
            ))),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid device id: {text}"))),
        }
    }
}

/// Kind of device, as reported in `deviceType`.
///
/// Unknown kinds are kept verbatim so filtering still works for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    /// A dimmable color light.
    Light,
    /// An on/off switch.
    Switch,
    /// A roller shutter.
    RollerShutter,
    /// Any other device type.
    Other(String),
}

impl DeviceType {
    /// Returns the wire name of the type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Light => "LIGHT",
            Self::Switch => "SWITCH",
            Self::RollerShutter => "ROLLER_SHUTTER",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for DeviceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LIGHT" => Self::Light,
            "SWITCH" => Self::Switch,
            "ROLLER_SHUTTER" => Self::RollerShutter,
            _ => Self::Other(value),
        }
    }
}

impl From<DeviceType> for String {
    fn from(value: DeviceType) -> Self {
        match value {
            DeviceType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for DeviceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room a device is placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room name.
    pub name: String,
}

/// A device entry of the home devices query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Numeric id, used to query the device.
    pub id: DeviceId,
    /// UUID, used to mutate the device.
    pub uuid: String,
    /// Device name within its room.
    pub name: String,
    /// MAC address.
    #[serde(default)]
    pub hardware_address: Option<String>,
    /// Device kind.
    pub device_type: DeviceType,
    /// Room the device is placed in.
    #[serde(default)]
    pub room: Option<Room>,
}

impl Device {
    /// Returns the name a host should show: room name and device name.
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(self.room.as_ref(), &self.name)
    }
}

/// A device with its current parameters, from the device-by-id query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetails {
    /// UUID, used to mutate the device.
    pub uuid: String,
    /// Device name within its room.
    pub name: String,
    /// MAC address.
    #[serde(default)]
    pub hardware_address: Option<String>,
    /// Device kind.
    pub device_type: DeviceType,
    /// Room the device is placed in.
    #[serde(default)]
    pub room: Option<Room>,
    /// Current parameter values.
    #[serde(default, rename = "deviceParameters")]
    pub parameters: Vec<DeviceParameter>,
}

impl DeviceDetails {
    /// Returns the first parameter of the given type.
    #[must_use]
    pub fn parameter(&self, parameter_type: &ParameterType) -> Option<&DeviceParameter> {
        self.parameters
            .iter()
            .find(|p| &p.parameter_type == parameter_type)
    }

    /// Returns the name a host should show: room name and device name.
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(self.room.as_ref(), &self.name)
    }
}

fn display_name(room: Option<&Room>, name: &str) -> String {
    match room {
        Some(room) => format!("{} {name}", room.name),
        None => name.to_string(),
    }
}
