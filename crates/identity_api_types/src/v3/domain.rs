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
//! Domain API types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::CollectionLinks;

/// Domain representation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct Domain {
    /// The description of the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,
    /// If set to true, domain is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// The ID of the domain.
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    /// The name of the domain.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Additional domain properties.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// Domain response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DomainResponse {
    /// Domain object.
    pub domain: Domain,
}

/// List of domains.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DomainList {
    /// Collection of domain objects.
    pub domains: Vec<Domain>,
    /// Pagination links.
    #[serde(default)]
    pub links: CollectionLinks,
}

/// Domain create request body.
///
/// An enabled domain can not be deleted. Set `enabled` to `false` for
/// domains that are going to be removed again.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct DomainCreate {
    /// The description of the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,
    /// If set to true, domain is enabled. Service default is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The name of the domain.
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    /// Additional domain properties.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// Complete create domain request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct DomainCreateRequest {
    /// Domain object.
    #[validate(nested)]
    pub domain: DomainCreate,
}
