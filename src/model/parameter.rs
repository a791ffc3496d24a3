// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device parameters: typed key/value attributes of a device.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parameter type, as used by the `ParameterType` GraphQL enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterType {
    /// Power state, `"0"` or `"1"`.
    State,
    /// Brightness, 0-255.
    Brightness,
    /// Color as `#rrggbb`.
    Color,
    /// White channel level, 0-255.
    ColorWhite,
    /// Any other parameter.
    Other(String),
}

impl ParameterType {
    /// Returns the wire name of the parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::State => "STATE",
            Self::Brightness => "BRIGHTNESS",
            Self::Color => "COLOR",
            Self::ColorWhite => "COLOR_WHITE",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for ParameterType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "STATE" => Self::State,
            "BRIGHTNESS" => Self::Brightness,
            "COLOR" => Self::Color,
            "COLOR_WHITE" => Self::ColorWhite,
            _ => Self::Other(value),
        }
    }
}

impl From<ParameterType> for String {
    fn from(value: ParameterType) -> Self {
        match value {
            ParameterType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ParameterType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parameter value of a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceParameter {
    /// Which parameter this is.
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    /// Provider-side value type, e.g. `NUMBER`.
    #[serde(default)]
    pub value_type: Option<String>,
    /// Value as string.
    #[serde(default)]
    pub value: Option<String>,
    /// Value as number, when numeric.
    #[serde(default)]
    pub value_numeric: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_and_unknown_types() {
        assert_eq!(ParameterType::from("COLOR_WHITE".to_string()), ParameterType::ColorWhite);
        assert_eq!(
            "SPEED".parse::<ParameterType>().unwrap(),
            ParameterType::Other("SPEED".to_string())
        );
        assert_eq!(ParameterType::State.to_string(), "STATE");
    }

    #[test]
    fn parameter_with_missing_values() {
        let param: DeviceParameter =
            serde_json::from_value(json!({ "type": "COLOR", "value": "#ff0000" })).unwrap();
        assert_eq!(param.parameter_type, ParameterType::Color);
        assert_eq!(param.value.as_deref(), Some("#ff0000"));
        assert!(param.value_numeric.is_none());
        assert!(param.value_type.is_none());
    }
}
