// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OAuth2 client-credentials authentication.
//!
//! - [`TokenManager`]: owns the current token and serializes acquisition
//! - [`TokenEndpoint`]: one exchange with the provider; [`OAuth2Client`] is
//!   the HTTPS implementation
//! - [`TokenStore`]: the JSON file that keeps the token across restarts

mod endpoint;
mod manager;
mod store;
mod token;

pub use endpoint::{OAuth2Client, TokenEndpoint};
pub use manager::TokenManager;
pub use store::TokenStore;
pub use token::{Credentials, Token};
