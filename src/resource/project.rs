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
//! Project helpers.
use reqwest::Method;
use tracing::{debug, info};
use validator::Validate;

use openstack_identity_api_types::v3::project::*;

use crate::client::ServiceClient;
use crate::error::AcceptanceError;
use crate::tools::{random_name, without_name};

/// Create a project with a random name.
///
/// Creating a project has many options, so the `ProjectCreate` is optional.
/// The name set in it is always replaced by the random one, every other
/// attribute is sent as passed.
///
/// # Returns
/// * Success with the created [`Project`].
/// * Error of the service (or of the request validation) unchanged.
pub async fn create_project(
    client: &ServiceClient,
    opts: Option<ProjectCreate>,
) -> Result<Project, AcceptanceError> {
    let name = random_name();
    info!("Attempting to create project: {}", name);

    let opts = opts.unwrap_or_default();
    let req = ProjectCreateRequest {
        project: ProjectCreate {
            name: name.clone(),
            extra: without_name(opts.extra),
            ..opts
        },
    };
    req.validate()?;

    let project = client
        .post_json::<_, ProjectResponse>(&["v3", "projects"], &req)
        .await?
        .project;

    info!("Successfully created project {} with ID {}", name, project.id);
    Ok(project)
}

/// Delete the project by ID.
///
/// Meant for the test cleanup: the test should stop when the returned error is
/// [`AcceptanceError::Delete`].
pub async fn delete_project<P: AsRef<str>>(
    client: &ServiceClient,
    project_id: P,
) -> Result<(), AcceptanceError> {
    let project_id = project_id.as_ref();
    client
        .send_empty(Method::DELETE, &["v3", "projects", project_id])
        .await
        .map_err(|source| AcceptanceError::Delete {
            resource: "project",
            id: project_id.to_string(),
            source: Box::new(source),
        })?;

    info!("Deleted project: {}", project_id);
    Ok(())
}

/// Return one project the client has access to.
///
/// Only the first page of the listing is considered and the first entry of it
/// is returned. Which project that is depends on the backend ordering.
pub async fn find_project(client: &ServiceClient) -> Result<Project, AcceptanceError> {
    info!("Attempting to find a project");

    let list: ProjectList = client.get_json(&["v3", "projects"]).await?;
    if list.links.has_next() {
        debug!("Only the first page of projects is considered");
    }
    let project = list
        .projects
        .into_iter()
        .next()
        .ok_or(AcceptanceError::NotFound {
            resource: "project",
        })?;

    info!(
        "Successfully found a project {} with ID {}",
        project.name, project.id
    );
    Ok(project)
}

#[cfg(test)]
mod tests {
    use eyre::Result;
    use httpmock::{Method as MockMethod, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::tests::*;
    use crate::tools::is_random_name;

    fn project(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "domain_id": "default",
            "description": "",
            "enabled": true,
            "is_domain": false,
            "parent_id": "default",
            "tags": [],
            "links": {"self": format!("http://localhost/v3/projects/{}", id)}
        })
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_default() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = mock_create(
            &server,
            "projects",
            "project",
            &["\"name\":\"ACPTTEST"],
            json!({"project": project("pid", "ACPTTESTabcd1234")}),
        )
        .await;
        let client = mocked_client(&server)?;

        let res = create_project(&client, None).await?;
        mock.assert_async().await;
        assert_eq!("pid", res.id);
        assert!(is_random_name(&res.name));
        assert!(logs_contain("Attempting to create project: ACPTTEST"));
        assert!(logs_contain("with ID pid"));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_keeps_overrides() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = mock_create(
            &server,
            "projects",
            "project",
            &[
                "\"description\":\"foo\"",
                "\"domain_id\":\"did\"",
                "\"enabled\":false",
                "\"is_domain\":false",
                "\"tags\":[\"a\"]",
                "\"name\":\"ACPTTEST",
            ],
            json!({"project": project("pid", "ACPTTESTabcd1234")}),
        )
        .await;
        let client = mocked_client(&server)?;

        create_project(
            &client,
            Some(ProjectCreate {
                name: "ignored".into(),
                description: Some("foo".into()),
                domain_id: Some("did".into()),
                enabled: Some(false),
                is_domain: Some(false),
                tags: Some(vec!["a".into()]),
                ..Default::default()
            }),
        )
        .await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_invalid() -> Result<()> {
        let server = MockServer::start_async().await;
        let client = mocked_client(&server)?;
        let res = create_project(
            &client,
            Some(ProjectCreate {
                domain_id: Some(String::new()),
                ..Default::default()
            }),
        )
        .await;
        assert!(matches!(res, Err(AcceptanceError::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_conflict() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_status(&server, MockMethod::POST, "/v3/projects", 409).await;
        let client = mocked_client(&server)?;
        let res = create_project(&client, None).await;
        assert_eq!(
            Some(StatusCode::CONFLICT),
            res.as_ref().err().and_then(AcceptanceError::status)
        );
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = mock_status(&server, MockMethod::DELETE, "/v3/projects/pid", 204).await;
        let client = mocked_client(&server)?;
        delete_project(&client, "pid").await?;
        mock.assert_async().await;
        assert!(logs_contain("Deleted project: pid"));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete_missing() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_not_found(&server, MockMethod::DELETE, "/v3/projects/missing").await;
        let client = mocked_client(&server)?;
        match delete_project(&client, "missing").await {
            Err(AcceptanceError::Delete {
                resource, id, source, ..
            }) => {
                assert_eq!("project", resource);
                assert_eq!("missing", id);
                assert_eq!(Some(StatusCode::NOT_FOUND), source.status());
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(!logs_contain("Deleted project"));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_find() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_list(
            &server,
            "projects",
            vec![project("p1", "admin"), project("p2", "service")],
        )
        .await;
        let client = mocked_client(&server)?;
        let res = find_project(&client).await?;
        assert_eq!("p1", res.id);
        assert_eq!("admin", res.name);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_find_empty() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_list(&server, "projects", Vec::new()).await;
        let client = mocked_client(&server)?;
        assert!(matches!(
            find_project(&client).await,
            Err(AcceptanceError::NotFound {
                resource: "project"
            })
        ));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_ignores_name_in_extra() -> Result<()> {
        let server = MockServer::start_async().await;
        let caller_name = mock_create_conflict(&server, "projects", "chosen-by-caller").await;
        let mock = mock_create(
            &server,
            "projects",
            "project",
            &["\"name\":\"ACPTTEST", "\"email\":\"a@b.c\""],
            json!({"project": project("pid", "ACPTTESTabcd1234")}),
        )
        .await;
        let client = mocked_client(&server)?;
        create_project(
            &client,
            Some(ProjectCreate {
                extra: Some(json!({"name": "chosen-by-caller", "email": "a@b.c"})),
                ..Default::default()
            }),
        )
        .await?;
        mock.assert_async().await;
        assert_eq!(0, caller_name.hits_async().await);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete_escapes_id() -> Result<()> {
        let server = MockServer::start_async().await;
        let collection = mock_status(&server, MockMethod::DELETE, "/v3/projects", 204).await;
        let mock =
            mock_status(&server, MockMethod::DELETE, "/v3/projects/a%2F..%2Fb", 204).await;
        let client = mocked_client(&server)?;
        delete_project(&client, "a/../b").await?;
        mock.assert_async().await;

        match delete_project(&client, "..").await {
            Err(AcceptanceError::Delete { id, source, .. }) => {
                assert_eq!("..", id);
                assert!(matches!(*source, AcceptanceError::InvalidPathSegment(_)));
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(0, collection.hits_async().await);
        Ok(())
    }
}
