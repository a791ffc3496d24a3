// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed GraphQL operations.

/// All devices of a home. Variables: `id` (home id).
pub const HOME_DEVICES: &str = r"
query get_home_devices($id: Float!) {
    homeById(id: $id) {
        devices {
            id
            uuid
            name
            hardwareAddress
            deviceType
            room {
                name
            }
        }
    }
}
";

/// One device with its parameters. Variables: `id` (device id).
pub const DEVICE_BY_ID: &str = r"
query get_device_by_id($id: Float!) {
    deviceById(id: $id) {
        uuid
        name
        hardwareAddress
        deviceType
        room {
            name
        }
        deviceParameters {
            type
            valueType
            value
            valueNumeric
        }
    }
}
";

/// Sets one parameter of a device. Variables: `uuid`, `type`, `value`.
pub const DEVICE_PARAMETER_SET: &str = r"
mutation device_parameter_set($uuid: String!, $type: ParameterType!, $value: String!) {
    deviceParameterSet(uuid: $uuid, type: $type, value: $value)
}
";
