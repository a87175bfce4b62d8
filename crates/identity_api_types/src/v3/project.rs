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
//! Project API types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::CollectionLinks;

/// Project representation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct Project {
    /// The description of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,

    /// The ID of the domain for the project.
    #[validate(length(min = 1, max = 64))]
    pub domain_id: String,

    /// If set to true, project is enabled. If set to false, project is
    /// disabled.
    #[serde(default)]
    pub enabled: bool,

    /// The ID for the project.
    #[validate(length(min = 1, max = 64))]
    pub id: String,

    /// Indicates whether the project also acts as a domain.
    #[serde(default)]
    pub is_domain: bool,

    /// The name of the project.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The ID of the parent for the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 64))]
    pub parent_id: Option<String>,

    /// A list of simple strings assigned to a project.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Additional project properties.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// Project response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectResponse {
    /// Project object.
    pub project: Project,
}

/// List of projects.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectList {
    /// Collection of project objects.
    pub projects: Vec<Project>,
    /// Pagination links.
    #[serde(default)]
    pub links: CollectionLinks,
}

/// Project create request body.
///
/// Only the name is mandatory. The service creates an enabled, regular
/// project in the domain of the token when the remaining fields are unset.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct ProjectCreate {
    /// The description of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,

    /// The ID of the domain for the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub domain_id: Option<String>,

    /// If set to true, project is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Indicates whether the project also acts as a domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_domain: Option<bool>,

    /// The name of the project.
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    /// The ID of the parent of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub parent_id: Option<String>,

    /// A list of simple strings assigned to a project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Additional project properties.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// Complete create project request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
pub struct ProjectCreateRequest {
    /// Project object.
    #[validate(nested)]
    pub project: ProjectCreate,
}
