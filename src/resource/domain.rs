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
//! Domain helpers.
use reqwest::Method;
use tracing::{debug, info};
use validator::Validate;

use openstack_identity_api_types::v3::domain::*;

use crate::client::ServiceClient;
use crate::error::AcceptanceError;
use crate::tools::{random_name, without_name};

/// Create a domain with a random name.
///
/// The name of `opts` is always replaced. Keystone refuses to delete an
/// enabled domain, so pass `enabled: Some(false)` when the domain is going to
/// be cleaned up with [`delete_domain`].
pub async fn create_domain(
    client: &ServiceClient,
    opts: Option<DomainCreate>,
) -> Result<Domain, AcceptanceError> {
    let name = random_name();
    info!("Attempting to create domain: {}", name);

    let opts = opts.unwrap_or_default();
    let req = DomainCreateRequest {
        domain: DomainCreate {
            name: name.clone(),
            extra: without_name(opts.extra),
            ..opts
        },
    };
    req.validate()?;

    let domain = client
        .post_json::<_, DomainResponse>(&["v3", "domains"], &req)
        .await?
        .domain;

    info!("Successfully created domain {} with ID {}", name, domain.id);
    Ok(domain)
}

/// Delete the domain by ID.
pub async fn delete_domain<D: AsRef<str>>(
    client: &ServiceClient,
    domain_id: D,
) -> Result<(), AcceptanceError> {
    let domain_id = domain_id.as_ref();
    client
        .send_empty(Method::DELETE, &["v3", "domains", domain_id])
        .await
        .map_err(|source| AcceptanceError::Delete {
            resource: "domain",
            id: domain_id.to_string(),
            source: Box::new(source),
        })?;

    info!("Deleted domain: {}", domain_id);
    Ok(())
}

/// Return the first domain of the listing.
pub async fn find_domain(client: &ServiceClient) -> Result<Domain, AcceptanceError> {
    info!("Attempting to find a domain");

    let list: DomainList = client.get_json(&["v3", "domains"]).await?;
    if list.links.has_next() {
        debug!("Only the first page of domains is considered");
    }
    let domain = list
        .domains
        .into_iter()
        .next()
        .ok_or(AcceptanceError::NotFound { resource: "domain" })?;

    info!(
        "Successfully found a domain {} with ID {}",
        domain.name, domain.id
    );
    Ok(domain)
}
