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
//! Roles and role grants.

use eyre::Result;
use tracing_test::traced_test;

use openstack_identity_acceptance::assignment::*;
use openstack_identity_acceptance::identity::*;
use openstack_identity_acceptance::resource::*;

use crate::common::*;

#[tokio::test]
#[traced_test]
#[ignore = "requires a running Keystone at KEYSTONE_URL"]
async fn test_role_lifecycle() -> Result<()> {
    let client = admin_client().await?;

    let role = create_role(&client, None).await?;
    assert!(role.domain_id.is_none());
    assert!(!find_role(&client).await?.id.is_empty());

    delete_role(&client, &role.id).await?;
    Ok(())
}

#[tokio::test]
#[traced_test]
#[ignore = "requires a running Keystone at KEYSTONE_URL"]
async fn test_grant_round_trip() -> Result<()> {
    let client = admin_client().await?;

    let project = create_project(&client, None).await?;
    let user = create_user(&client, None).await?;
    let role = create_role(&client, None).await?;

    assert!(!check_role_on_user_on_project(&client, &role, &user, &project).await?);
    assign_role_to_user_on_project(&client, &role, &user, &project).await?;
    assert!(check_role_on_user_on_project(&client, &role, &user, &project).await?);

    unassign_role_from_user_on_project(&client, &role, &user, &project).await?;
    assert!(!check_role_on_user_on_project(&client, &role, &user, &project).await?);

    // Removing it twice is a failure.
    assert!(
        unassign_role_from_user_on_project(&client, &role, &user, &project)
            .await
            .is_err()
    );

    delete_role(&client, &role.id).await?;
    delete_user(&client, &user.id).await?;
    delete_project(&client, &project.id).await?;
    Ok(())
}
