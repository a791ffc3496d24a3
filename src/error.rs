// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Lumic library.
//!
//! This module provides the error hierarchy for the library: token
//! acquisition, GraphQL requests, payload parsing, value validation and
//! configuration.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// No client credentials are configured, so no request can be
    /// authenticated. Raised before any network I/O.
    #[error("not authenticated: no client credentials configured")]
    NotAuthenticated,

    /// No access token could be obtained from the token endpoint.
    #[error("authentication error: {0}")]
    Authentication(#[from] AuthError),

    /// A GraphQL query or mutation failed.
    #[error("request failed: {0}")]
    Request(#[from] RequestError),

    /// A response payload did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Both the refresh (if attempted) and the fresh fetch failed.
///
/// The refresh cause is kept so callers can tell an expired or revoked
/// refresh token apart from a network problem, even though the manager
/// always falls back to a fresh fetch.
#[derive(Debug, Error)]
#[error("token unavailable: {fetch}")]
pub struct AuthError {
    /// Why the client-credentials fetch failed.
    #[source]
    pub fetch: EndpointError,
    /// Why the preceding refresh failed, if one was attempted.
    pub refresh: Option<EndpointError>,
}

/// Failures of a single exchange with the OAuth2 token endpoint.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The HTTP exchange itself failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with an OAuth2 error response.
    #[error("rejected by provider (HTTP {status}): {error}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// OAuth2 error code, e.g. `invalid_grant`.
        error: String,
        /// Optional human readable description.
        description: Option<String>,
    },

    /// The response body was not a token.
    #[error("invalid token response: {0}")]
    InvalidResponse(String),

    /// A refresh was requested for a token that carries no refresh token.
    #[error("token has no refresh token")]
    NoRefreshToken,
}

impl EndpointError {
    /// Short label for the failure kind, used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) => "transport",
            Self::Rejected { .. } => "rejected",
            Self::InvalidResponse(_) => "invalid_response",
            Self::NoRefreshToken => "no_refresh_token",
        }
    }
}

/// Errors related to GraphQL communication.
#[derive(Debug, Error)]
pub enum RequestError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API refused the bearer token.
    #[error("access token rejected")]
    Unauthorized,

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The GraphQL response carried errors.
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The GraphQL response had neither `data` nor `errors`.
    #[error("response contained no data")]
    MissingData,
}

/// Errors related to parsing API payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A hue value is outside the valid range (0-360).
    #[error("hue value {0} is out of range [0, 360]")]
    InvalidHue(u16),

    /// A saturation value is outside the valid range (0-100).
    #[error("saturation value {0} is out of range [0, 100]")]
    InvalidSaturation(u8),

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// Errors related to configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Only one of client id and client secret was provided.
    #[error("client_id and client_secret must be provided together")]
    IncompleteCredentials,

    /// A required value is empty.
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),

    /// An endpoint is not an http(s) URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// The request timeout is zero.
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Errors of the on-disk token cache.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the token file failed.
    #[error("token file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The token file does not contain a token.
    #[error("token file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
