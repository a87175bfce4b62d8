// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # Error
//!
//! Errors returned by the acceptance helpers.
use reqwest::{Method, StatusCode};
use thiserror::Error;

use openstack_identity_api_types::error::BuilderError;

/// Acceptance helper error.
#[derive(Debug, Error)]
pub enum AcceptanceError {
    /// The identity service answered with an unexpected status.
    #[error("{method} {url} failed with {status}: {body}")]
    Api {
        /// Request method.
        method: Method,
        /// Request URL.
        url: String,
        /// Response status.
        status: StatusCode,
        /// Response body, as returned by the service.
        body: String,
    },

    /// Authentication request was rejected.
    #[error("authentication failed with {0}")]
    AuthenticationFailed(StatusCode),

    /// Builder error.
    #[error(transparent)]
    Builder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },

    /// Configuration error.
    #[error(transparent)]
    Config {
        /// The source of the error.
        #[from]
        source: config::ConfigError,
    },

    /// Teardown of a resource failed.
    #[error("unable to delete {resource} {id}: {source}")]
    Delete {
        /// Resource kind.
        resource: &'static str,
        /// Resource ID.
        id: String,
        /// The source of the error.
        source: Box<AcceptanceError>,
    },

    /// The identity endpoint URL can not carry a path.
    #[error("{0} can not be used as the identity endpoint")]
    EndpointNotBase(String),

    #[error(transparent)]
    HeaderToStr {
        /// The source of the error.
        #[from]
        source: reqwest::header::ToStrError,
    },

    #[error(transparent)]
    HeaderValue {
        /// The source of the error.
        #[from]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// HTTP transport error.
    #[error(transparent)]
    Http {
        /// The source of the error.
        #[from]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Json {
        /// The source of the error.
        #[from]
        source: serde_json::Error,
    },

    /// Path segment would address another resource.
    #[error("invalid path segment {0:?}")]
    InvalidPathSegment(String),

    /// Listing returned no entries.
    #[error("no {resource} found")]
    NotFound {
        /// Resource kind.
        resource: &'static str,
    },

    /// Client has not been authenticated yet.
    #[error("client must be authenticated")]
    NotAuthenticated,

    /// Auth response did not carry the `X-Subject-Token` header.
    #[error("token is missing in the authentication response")]
    TokenMissing,

    /// Revoking a role grant failed.
    #[error("unable to remove role")]
    Unassign {
        /// The source of the error.
        source: Box<AcceptanceError>,
    },

    #[error(transparent)]
    Url {
        /// The source of the error.
        #[from]
        source: url::ParseError,
    },

    /// Request validation error.
    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl AcceptanceError {
    /// HTTP status of the failed call, if the service answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::AuthenticationFailed(status) => Some(*status),
            Self::Delete { source, .. } | Self::Unassign { source } => source.status(),
            Self::Http { source } => source.status(),
            _ => None,
        }
    }
}
