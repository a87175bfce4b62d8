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
//! # Acceptance configuration
//!
//! The configuration is read from an optional INI file, completed with the
//! built-in defaults and finally overridden from the environment. Besides the
//! generic `ACCEPTANCE_<SECTION>__<KEY>` variables the well known variables
//! of the OpenStack test environments are honored:
//!
//! | Key                  | Variable                    | Default    |
//! |----------------------|-----------------------------|------------|
//! | `keystone_url`       | `KEYSTONE_URL`              |            |
//! | `admin.username`     | `OPENSTACK_ADMIN_USERNAME`  | `admin`    |
//! | `admin.password`     | `OPENSTACK_ADMIN_PASSWORD`  | `password` |
//! | `admin.project_name` | `OPENSTACK_ADMIN_PROJECT`   | `admin`    |
//! | `admin.domain_id`    | `OPENSTACK_ADMIN_DOMAIN_ID` | `default`  |
use std::env;
use std::path::PathBuf;

use config::{Environment, File, FileFormat, Map};
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use crate::error::AcceptanceError;

/// Environment variables overriding single configuration keys.
static ENV_OVERRIDES: &[(&str, &str)] = &[
    ("keystone_url", "KEYSTONE_URL"),
    ("admin.username", "OPENSTACK_ADMIN_USERNAME"),
    ("admin.password", "OPENSTACK_ADMIN_PASSWORD"),
    ("admin.project_name", "OPENSTACK_ADMIN_PROJECT"),
    ("admin.domain_id", "OPENSTACK_ADMIN_DOMAIN_ID"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Identity service endpoint, e.g. `http://localhost:5000`.
    pub keystone_url: Url,

    /// Administrative user used to set up the tests.
    pub admin: AdminSection,
}

/// Credentials of the administrative user.
#[derive(Debug, Deserialize, Clone)]
pub struct AdminSection {
    /// User name.
    pub username: String,
    /// Password of the user.
    pub password: SecretString,
    /// Name of the project the admin token is scoped to.
    pub project_name: String,
    /// Domain of the user and of the project.
    pub domain_id: String,
}

impl Config {
    /// Load the configuration.
    ///
    /// The file is optional and silently skipped when it does not exist.
    pub fn new(path: Option<PathBuf>) -> Result<Self, AcceptanceError> {
        Self::load(path, None)
    }

    /// Load the configuration from the environment only.
    pub fn from_env() -> Result<Self, AcceptanceError> {
        Self::new(env::var("ACCEPTANCE_CONFIG").ok().map(PathBuf::from))
    }

    /// Load the configuration with `vars` replacing the process environment.
    fn load(
        path: Option<PathBuf>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, AcceptanceError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if path.is_file() {
                builder = builder.add_source(File::from(path).format(FileFormat::Ini));
            }
        }
        builder = builder.add_source(
            Environment::with_prefix("ACCEPTANCE")
                .prefix_separator("_")
                .separator("__")
                .source(vars.clone()),
        );
        for (key, var) in ENV_OVERRIDES {
            let value = match &vars {
                Some(vars) => vars.get(*var).cloned(),
                None => env::var(var).ok(),
            };
            builder = builder.set_override_option(*key, value)?;
        }

        builder.try_into()
    }
}

impl TryFrom<config::ConfigBuilder<config::builder::DefaultState>> for Config {
    type Error = AcceptanceError;
    fn try_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, Self::Error> {
        let mut builder = builder;
        builder = builder
            .set_default("admin.username", "admin")?
            .set_default("admin.password", "password")?
            .set_default("admin.project_name", "admin")?
            .set_default("admin.domain_id", "default")?;

        Ok(builder.build()?.try_deserialize()?)
    }
}
