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

//! # OpenStack Identity API types
//!
//! This crate defines the request and response bodies of the OpenStack
//! Identity (Keystone) v3 REST API that the acceptance helpers exchange with
//! the service.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod scope;
pub mod v3;

/// Links of a collection response.
///
/// Keystone returns `next` and `previous` only when the listing is paginated.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CollectionLinks {
    /// Link to the current page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Link to the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Link to the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl CollectionLinks {
    /// Whether the service reported a further page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
