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

use reqwest::Method;
use tracing::{debug, info};
use validator::Validate;

use openstack_identity_api_types::v3::group::*;

use crate::client::ServiceClient;
use crate::error::AcceptanceError;
use crate::tools::{random_name, without_name};

/// Create a group with a random name.
pub async fn create_group(
    client: &ServiceClient,
    opts: Option<GroupCreate>,
) -> Result<Group, AcceptanceError> {
    let name = random_name();
    info!("Attempting to create group: {}", name);

    let opts = opts.unwrap_or_default();
    let req = GroupCreateRequest {
        group: GroupCreate {
            name: name.clone(),
            extra: without_name(opts.extra),
            ..opts
        },
    };
    req.validate()?;

    let group = client
        .post_json::<_, GroupResponse>(&["v3", "groups"], &req)
        .await?
        .group;

    info!("Successfully created group {} with ID {}", name, group.id);
    Ok(group)
}

/// Delete the group by ID.
pub async fn delete_group<G: AsRef<str>>(
    client: &ServiceClient,
    group_id: G,
) -> Result<(), AcceptanceError> {
    let group_id = group_id.as_ref();
    client
        .send_empty(Method::DELETE, &["v3", "groups", group_id])
        .await
        .map_err(|source| AcceptanceError::Delete {
            resource: "group",
            id: group_id.to_string(),
            source: Box::new(source),
        })?;

    info!("Deleted group: {}", group_id);
    Ok(())
}

/// Return the first group of the listing.
pub async fn find_group(client: &ServiceClient) -> Result<Group, AcceptanceError> {
    info!("Attempting to find a group");

    let list: GroupList = client.get_json(&["v3", "groups"]).await?;
    if list.links.has_next() {
        debug!("Only the first page of groups is considered");
    }
    let group = list
        .groups
        .into_iter()
        .next()
        .ok_or(AcceptanceError::NotFound { resource: "group" })?;

    info!(
        "Successfully found a group {} with ID {}",
        group.name, group.id
    );
    Ok(group)
}
