// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GraphQL over HTTPS.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::error::RequestError;
use crate::protocol::{GraphQlRequest, GraphQlTransport};

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// HTTP transport posting GraphQL requests as JSON with a bearer token.
///
/// # Examples
///
/// ```no_run
/// use lumic_lib::protocol::{GraphQlRequest, GraphQlTransport, HttpTransport, operations};
///
/// # async fn example() -> Result<(), lumic_lib::RequestError> {
/// let transport = HttpTransport::new(reqwest::Client::new(), lumic_lib::Config::DEFAULT_API_ENDPOINT);
/// let request = GraphQlRequest::new(operations::HOME_DEVICES, serde_json::json!({ "id": 1 }));
/// let data = transport.execute("access-token", &request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport for the GraphQL `endpoint`.
    #[must_use]
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GraphQlTransport for HttpTransport {
    async fn execute(
        &self,
        access_token: &str,
        request: &GraphQlRequest,
    ) -> Result<Value, RequestError> {
        tracing::debug!(url = %self.endpoint, "Sending GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(RequestError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GraphQlResponse = response.json().await?;
        if !body.errors.is_empty() {
            return Err(RequestError::GraphQl(
                body.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        let data = body.data.ok_or(RequestError::MissingData)?;
        tracing::trace!(%data, "Received GraphQL response");
        Ok(data)
    }
}
