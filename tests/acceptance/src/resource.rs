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
//! Projects and domains.

use eyre::Result;
use reqwest::StatusCode;
use tracing_test::traced_test;

use openstack_identity_acceptance::error::AcceptanceError;
use openstack_identity_acceptance::resource::*;
use openstack_identity_acceptance::tools::is_random_name;
use openstack_identity_acceptance::types::v3::domain::DomainCreate;
use openstack_identity_acceptance::types::v3::project::ProjectCreate;

use crate::common::*;

#[tokio::test]
#[traced_test]
#[ignore = "requires a running Keystone at KEYSTONE_URL"]
async fn test_project_lifecycle() -> Result<()> {
    let client = admin_client().await?;

    let project = create_project(
        &client,
        Some(ProjectCreate {
            description: Some("acceptance".into()),
            ..Default::default()
        }),
    )
    .await?;
    assert!(is_random_name(&project.name));
    assert_eq!(Some("acceptance"), project.description.as_deref());

    delete_project(&client, &project.id).await?;

    match delete_project(&client, &project.id).await {
        Err(err @ AcceptanceError::Delete { .. }) => {
            assert_eq!(Some(StatusCode::NOT_FOUND), err.status());
        }
        other => panic!("unexpected result {:?}", other),
    }
    Ok(())
}

#[tokio::test]
#[traced_test]
#[ignore = "requires a running Keystone at KEYSTONE_URL"]
async fn test_find_project() -> Result<()> {
    let client = admin_client().await?;
    let project = find_project(&client).await?;
    assert!(!project.id.is_empty());
    Ok(())
}

#[tokio::test]
#[traced_test]
#[ignore = "requires a running Keystone at KEYSTONE_URL"]
async fn test_domain_lifecycle() -> Result<()> {
    let client = admin_client().await?;

    // Only disabled domains can be deleted.
    let domain = create_domain(
        &client,
        Some(DomainCreate {
            enabled: Some(false),
            ..Default::default()
        }),
    )
    .await?;
    assert!(!domain.enabled);
    assert!(is_random_name(&domain.name));

    let project = create_project(
        &client,
        Some(ProjectCreate {
            domain_id: Some(domain.id.clone()),
            ..Default::default()
        }),
    )
    .await?;
    assert_eq!(domain.id, project.domain_id);

    delete_project(&client, &project.id).await?;
    delete_domain(&client, &domain.id).await?;
    Ok(())
}
