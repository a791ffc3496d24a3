// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data returned by the Lumic API.
//!
//! These types mirror the GraphQL schema fields requested by the fixed
//! operations in [`protocol`](crate::protocol). The library does not own
//! this data; it only decodes it.

mod device;
mod parameter;

pub use device::{Device, DeviceDetails, DeviceId, DeviceType, Room};
pub use parameter::{DeviceParameter, ParameterType};
