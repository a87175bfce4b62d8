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
//! Common functionality used in the acceptance tests.

use eyre::Result;

use openstack_identity_acceptance::client::ServiceClient;
use openstack_identity_acceptance::config::Config;

/// Client authenticated as the configured admin.
pub async fn admin_client() -> Result<ServiceClient> {
    let config = Config::from_env()?;
    let mut client = ServiceClient::from_config(&config)?;
    client.auth_admin(&config).await?;
    Ok(client)
}
