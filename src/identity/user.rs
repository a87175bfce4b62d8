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

use openstack_identity_api_types::v3::user::*;

use crate::client::ServiceClient;
use crate::error::AcceptanceError;
use crate::tools::{random_name, without_name};

/// Create a user with a random name.
///
/// All attributes of `opts` except of the name are sent unchanged.
pub async fn create_user(
    client: &ServiceClient,
    opts: Option<UserCreate>,
) -> Result<User, AcceptanceError> {
    let name = random_name();
    info!("Attempting to create user: {}", name);

    let opts = opts.unwrap_or_default();
    let req = UserCreateRequest {
        user: UserCreate {
            name: name.clone(),
            extra: without_name(opts.extra),
            ..opts
        },
    };
    req.validate()?;

    let user = client
        .post_json::<_, UserResponse>(&["v3", "users"], &req)
        .await?
        .user;

    info!("Successfully created user {} with ID {}", name, user.id);
    Ok(user)
}

/// Delete the user by ID.
pub async fn delete_user<U: AsRef<str>>(
    client: &ServiceClient,
    user_id: U,
) -> Result<(), AcceptanceError> {
    let user_id = user_id.as_ref();
    client
        .send_empty(Method::DELETE, &["v3", "users", user_id])
        .await
        .map_err(|source| AcceptanceError::Delete {
            resource: "user",
            id: user_id.to_string(),
            source: Box::new(source),
        })?;

    info!("Deleted user with ID: {}", user_id);
    Ok(())
}

/// Return the first user of the listing.
pub async fn find_user(client: &ServiceClient) -> Result<User, AcceptanceError> {
    info!("Attempting to find a user");

    let list: UserList = client.get_json(&["v3", "users"]).await?;
    if list.links.has_next() {
        debug!("Only the first page of users is considered");
    }
    let user = list
        .users
        .into_iter()
        .next()
        .ok_or(AcceptanceError::NotFound { resource: "user" })?;

    info!("Successfully found a user {} with ID {}", user.name, user.id);
    Ok(user)
}
