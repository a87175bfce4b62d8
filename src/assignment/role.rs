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
//! Role helpers.
use reqwest::Method;
use tracing::{debug, info};
use validator::Validate;

use openstack_identity_api_types::v3::role::*;

use crate::client::ServiceClient;
use crate::error::AcceptanceError;
use crate::tools::{random_name, without_name};

/// Create a role with a random name.
///
/// Without `domain_id` in `opts` a global role is created.
pub async fn create_role(
    client: &ServiceClient,
    opts: Option<RoleCreate>,
) -> Result<Role, AcceptanceError> {
    let name = random_name();
    info!("Attempting to create role: {}", name);

    let opts = opts.unwrap_or_default();
    let req = RoleCreateRequest {
        role: RoleCreate {
            name: name.clone(),
            extra: without_name(opts.extra),
            ..opts
        },
    };
    req.validate()?;

    let role = client
        .post_json::<_, RoleResponse>(&["v3", "roles"], &req)
        .await?
        .role;

    info!("Successfully created role {} with ID {}", name, role.id);
    Ok(role)
}

/// Delete the role by ID.
///
/// Keystone drops the grants of the role together with it.
pub async fn delete_role<R: AsRef<str>>(
    client: &ServiceClient,
    role_id: R,
) -> Result<(), AcceptanceError> {
    let role_id = role_id.as_ref();
    client
        .send_empty(Method::DELETE, &["v3", "roles", role_id])
        .await
        .map_err(|source| AcceptanceError::Delete {
            resource: "role",
            id: role_id.to_string(),
            source: Box::new(source),
        })?;

    info!("Deleted role: {}", role_id);
    Ok(())
}

/// Return one role the client has access to.
///
/// Only the first page of the listing is considered and the first entry of it
/// is returned.
pub async fn find_role(client: &ServiceClient) -> Result<Role, AcceptanceError> {
    info!("Attempting to find a role");

    let list: RoleList = client.get_json(&["v3", "roles"]).await?;
    if list.links.has_next() {
        debug!("Only the first page of roles is considered");
    }
    let role = list
        .roles
        .into_iter()
        .next()
        .ok_or(AcceptanceError::NotFound { resource: "role" })?;

    info!("Successfully found a role {} with ID {}", role.name, role.id);
    Ok(role)
}
