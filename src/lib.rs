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

//! # OpenStack Identity acceptance helpers
//!
//! Building blocks for the acceptance tests of an OpenStack Identity (Keystone)
//! v3 deployment. Every helper issues exactly one request against the service
//! using an authenticated [`ServiceClient`](client::ServiceClient):
//!
//! - `create_*` creates a project, domain, user, group or role with a random
//!   `ACPTTEST` prefixed name, keeping all other attributes the caller passed.
//! - `delete_*` removes the resource again. The error is meant to stop the
//!   test, the helpers are used for the cleanup.
//! - `find_*` returns the first resource of the (first page of the) listing.
//! - [`assign_role_to_user_on_project`](assignment::assign_role_to_user_on_project)
//!   and
//!   [`unassign_role_from_user_on_project`](assignment::unassign_role_from_user_on_project)
//!   manage the role grants.
//!
//! ```no_run
//! use openstack_identity_acceptance::assignment::*;
//! use openstack_identity_acceptance::client::ServiceClient;
//! use openstack_identity_acceptance::config::Config;
//! use openstack_identity_acceptance::identity::*;
//! use openstack_identity_acceptance::resource::*;
//!
//! # async fn run() -> Result<(), openstack_identity_acceptance::error::AcceptanceError> {
//! let config = Config::from_env()?;
//! let mut client = ServiceClient::from_config(&config)?;
//! client.auth_admin(&config).await?;
//!
//! let project = create_project(&client, None).await?;
//! let user = create_user(&client, None).await?;
//! let role = find_role(&client).await?;
//! assign_role_to_user_on_project(&client, &role, &user, &project).await?;
//!
//! unassign_role_from_user_on_project(&client, &role, &user, &project).await?;
//! delete_user(&client, &user.id).await?;
//! delete_project(&client, &project.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod assignment;
pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod resource;
pub mod tools;


pub use openstack_identity_api_types as types;
