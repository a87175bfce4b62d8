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
//! # Token API types
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::BuilderError;
use crate::scope::{Domain, Project, Scope};
use crate::v3::role::Role;

/// Authorization token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Token {
    /// A list of one or two audit IDs. The first audit ID is the current audit
    /// ID for the token. The second one is present only for re-scoped tokens.
    #[serde(default)]
    pub audit_ids: Vec<String>,

    /// The authentication methods that were used to obtain the token.
    #[serde(default)]
    pub methods: Vec<String>,

    /// The date and time when the token expires.
    pub expires_at: DateTime<Utc>,

    /// A user object.
    pub user: User,

    /// The project the token is scoped to. Only present in project scoped
    /// tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,

    /// The domain the token is scoped to. Only present in domain scoped
    /// tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,

    /// A list of role objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenResponse {
    /// Token
    pub token: Token,
}

/// User information of the token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct User {
    /// User ID
    pub id: String,
    /// User Name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// User domain
    pub domain: Domain,
    /// User password expiry date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_expires_at: Option<DateTime<Utc>>,
}

/// An authentication request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuthRequest {
    /// An identity object.
    pub auth: AuthRequestInner,
}

/// An authentication request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuthRequestInner {
    /// An identity object.
    pub identity: Identity,

    /// The authorization scope. Unscoped token is issued when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

/// An identity object.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Identity {
    /// The authentication methods.
    pub methods: Vec<String>,

    /// The password object, contains the authentication information.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<PasswordAuth>,

    /// The token object, contains the authentication information.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenAuth>,
}

/// The password object, contains the authentication information.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct PasswordAuth {
    /// A user object.
    pub user: UserPassword,
}

/// User password information.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserPassword {
    /// User ID
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User Name
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// User domain
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    /// User password
    pub password: String,
}

/// The token object, contains the authentication information.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct TokenAuth {
    /// An authentication token.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::scope::DomainBuilder;

    #[test]
    fn test_password_auth_request() {
        let identity = IdentityBuilder::default()
            .methods(vec!["password".into()])
            .password(
                PasswordAuthBuilder::default()
                    .user(
                        UserPasswordBuilder::default()
                            .name("admin")
                            .password("pass")
                            .domain(DomainBuilder::default().id("default").build().unwrap())
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let req = AuthRequest {
            auth: AuthRequestInner {
                identity,
                scope: None,
            },
        };
        assert_eq!(
            json!({"auth": {"identity": {
                "methods": ["password"],
                "password": {"user": {
                    "name": "admin",
                    "domain": {"id": "default"},
                    "password": "pass"
                }}
            }}}),
            serde_json::to_value(req).unwrap()
        );
    }

    #[test]
    fn test_identity_requires_methods() {
        assert!(matches!(
            IdentityBuilder::default().build(),
            Err(BuilderError::UninitializedField(_))
        ));
    }

    #[test]
    fn test_token_response() {
        let rsp: TokenResponse = serde_json::from_value(json!({"token": {
            "audit_ids": ["a"],
            "methods": ["password"],
            "expires_at": "2026-10-19T12:00:00Z",
            "user": {"id": "uid", "name": "admin", "domain": {"id": "default", "name": "Default"}},
            "project": {"id": "pid", "name": "admin", "domain": {"id": "default"}},
            "roles": [{"id": "rid", "name": "admin"}],
            "catalog": []
        }}))
        .unwrap();
        assert_eq!("uid", rsp.token.user.id);
        assert_eq!("pid", rsp.token.project.unwrap().id);
        assert_eq!("admin", rsp.token.roles.unwrap()[0].name);
    }
}
