// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GraphQL transport for the Lumic API.
//!
//! - [`GraphQlTransport`]: sends one authenticated request
//! - [`HttpTransport`]: the HTTPS implementation
//! - [`operations`]: the fixed queries and mutation the library uses

mod http;
pub mod operations;

pub use http::HttpTransport;

use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use crate::error::RequestError;

/// A GraphQL query or mutation with its variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    query: String,
    variables: Value,
}

impl GraphQlRequest {
    /// Creates a request. `variables` should be a JSON object.
    #[must_use]
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }

    /// Returns the query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the variables.
    #[must_use]
    pub fn variables(&self) -> &Value {
        &self.variables
    }
}

/// Trait for transports that can execute GraphQL requests.
pub trait GraphQlTransport: Send + Sync {
    /// Sends `request` authenticated with `access_token` and returns the
    /// `data` member of the response.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the request fails to send, the API rejects
    /// it, or the response carries GraphQL errors.
    fn execute(
        &self,
        access_token: &str,
        request: &GraphQlRequest,
    ) -> impl Future<Output = Result<Value, RequestError>> + Send;
}
