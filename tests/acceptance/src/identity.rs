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
//! Users and groups.

use eyre::Result;
use tracing_test::traced_test;

use openstack_identity_acceptance::identity::*;
use openstack_identity_acceptance::resource::*;
use openstack_identity_acceptance::tools::is_random_name;
use openstack_identity_acceptance::types::v3::group::GroupCreate;
use openstack_identity_acceptance::types::v3::user::UserCreate;

use crate::common::*;

#[tokio::test]
#[traced_test]
#[ignore = "requires a running Keystone at KEYSTONE_URL"]
async fn test_user_lifecycle() -> Result<()> {
    let client = admin_client().await?;
    let project = create_project(&client, None).await?;

    let user = create_user(
        &client,
        Some(UserCreate {
            default_project_id: Some(project.id.clone()),
            password: Some("secretxx".into()),
            ..Default::default()
        }),
    )
    .await?;
    assert!(is_random_name(&user.name));
    assert_eq!(Some(&project.id), user.default_project_id.as_ref());

    delete_user(&client, &user.id).await?;
    delete_project(&client, &project.id).await?;
    Ok(())
}

#[tokio::test]
#[traced_test]
#[ignore = "requires a running Keystone at KEYSTONE_URL"]
async fn test_find_user() -> Result<()> {
    let client = admin_client().await?;
    let user = find_user(&client).await?;
    assert!(!user.id.is_empty());
    Ok(())
}

#[tokio::test]
#[traced_test]
#[ignore = "requires a running Keystone at KEYSTONE_URL"]
async fn test_group_lifecycle() -> Result<()> {
    let client = admin_client().await?;

    let group = create_group(
        &client,
        Some(GroupCreate {
            description: Some("acceptance".into()),
            ..Default::default()
        }),
    )
    .await?;
    assert!(is_random_name(&group.name));

    let found = find_group(&client).await?;
    assert!(!found.id.is_empty());

    delete_group(&client, &group.id).await?;
    Ok(())
}
