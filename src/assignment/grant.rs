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
//! Role grants of users on projects.
use reqwest::{Method, StatusCode};
use tracing::info;

use openstack_identity_api_types::v3::{project::Project, role::Role, user::User};

use crate::client::ServiceClient;
use crate::error::AcceptanceError;

fn grant_path<'a>(role: &'a Role, user: &'a User, project: &'a Project) -> [&'a str; 7] {
    [
        "v3",
        "projects",
        project.id.as_str(),
        "users",
        user.id.as_str(),
        "roles",
        role.id.as_str(),
    ]
}

/// Grant the role to the user on the project.
pub async fn assign_role_to_user_on_project(
    client: &ServiceClient,
    role: &Role,
    user: &User,
    project: &Project,
) -> Result<(), AcceptanceError> {
    info!(
        "Attempting to grant user {} role {} on project {}",
        user.name, role.name, project.name
    );

    client
        .send_empty(Method::PUT, &grant_path(role, user, project))
        .await?;

    info!(
        "Granted user {} role {} on project {}",
        user.name, role.name, project.name
    );
    Ok(())
}

/// Revoke the role of the user on the project.
///
/// Meant for the test cleanup. Any failure is reported as the generic
/// [`AcceptanceError::Unassign`], the cause is kept as its source.
pub async fn unassign_role_from_user_on_project(
    client: &ServiceClient,
    role: &Role,
    user: &User,
    project: &Project,
) -> Result<(), AcceptanceError> {
    info!(
        "Attempting to remove role {} from user {} on project {}",
        role.name, user.name, project.name
    );

    client
        .send_empty(Method::DELETE, &grant_path(role, user, project))
        .await
        .map_err(|source| AcceptanceError::Unassign {
            source: Box::new(source),
        })?;

    info!(
        "Removed role {} from user {} on project {}",
        role.name, user.name, project.name
    );
    Ok(())
}

/// Check whether the user has the role granted directly on the project.
///
/// # Returns
/// * `Ok(true)` when the grant exists.
/// * `Ok(false)` when the service reports it as not found.
/// * [`AcceptanceError::Api`] for any other status.
pub async fn check_role_on_user_on_project(
    client: &ServiceClient,
    role: &Role,
    user: &User,
    project: &Project,
) -> Result<bool, AcceptanceError> {
    let path = grant_path(role, user, project);
    match client.head(&path).await? {
        StatusCode::NO_CONTENT | StatusCode::OK => Ok(true),
        StatusCode::NOT_FOUND => Ok(false),
        status => Err(AcceptanceError::Api {
            method: Method::HEAD,
            url: client.url(&path)?.to_string(),
            status,
            body: String::new(),
        }),
    }
}
