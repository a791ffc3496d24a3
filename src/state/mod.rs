// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! The [`DeviceState`] struct holds the last known state of a device, while
//! [`StateChange`] represents individual changes, either derived from the
//! device parameters reported by the API or from a successful mutation.
//!
//! # Examples
//!
//! ```
//! use lumic_lib::state::{DeviceState, StateChange};
//! use lumic_lib::types::PowerState;
//!
//! let mut state = DeviceState::new();
//!
//! let change = StateChange::Power(PowerState::On);
//! state.apply(&change);
//!
//! assert!(state.is_on());
//! ```

mod device_state;
mod state_change;

pub use device_state::DeviceState;
pub use state_change::StateChange;
