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
//! # Identity service client
//!
//! [`ServiceClient`] is the authenticated handle all the helpers operate on.
use reqwest::{
    Client, ClientBuilder, Method, RequestBuilder, Response, StatusCode,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use openstack_identity_api_types::scope::*;
use openstack_identity_api_types::v3::auth::token::*;

use crate::config::Config;
use crate::error::AcceptanceError;

/// Header carrying the token of the request.
static AUTH_TOKEN_HEADER: &str = "x-auth-token";
/// Header carrying the issued token in the authentication response.
static SUBJECT_TOKEN_HEADER: &str = "x-subject-token";

/// Handle to the identity service.
pub struct ServiceClient {
    /// HTTP client sending the `X-Auth-Token` header once authenticated.
    pub client: Client,
    /// Identity endpoint, always ending with `/`.
    pub base_url: Url,
    /// Body of the last authentication response.
    pub auth: Option<TokenResponse>,
    /// Current token.
    pub token: Option<SecretString>,
}

impl ServiceClient {
    /// Unauthenticated client for the identity endpoint.
    pub fn new<U: AsRef<str>>(base_url: U) -> Result<Self, AcceptanceError> {
        let mut base_url: Url = base_url.as_ref().parse()?;
        if base_url.cannot_be_a_base() {
            return Err(AcceptanceError::EndpointNotBase(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            auth: None,
            token: None,
        })
    }

    /// Unauthenticated client for the configured identity endpoint.
    pub fn from_config(config: &Config) -> Result<Self, AcceptanceError> {
        Self::new(config.keystone_url.as_str())
    }

    /// Use an already issued token.
    pub fn with_token(mut self, token: SecretString) -> Result<Self, AcceptanceError> {
        self.set_token(token)?;
        Ok(self)
    }

    fn set_token(&mut self, token: SecretString) -> Result<(), AcceptanceError> {
        let mut header = HeaderValue::from_str(token.expose_secret())?;
        header.set_sensitive(true);
        self.client = ClientBuilder::new()
            .default_headers(HeaderMap::from_iter([(
                HeaderName::from_static(AUTH_TOKEN_HEADER),
                header,
            )]))
            .build()?;
        self.token = Some(token);
        Ok(())
    }

    /// Issue a new token and use it for all further requests.
    #[tracing::instrument(skip(self, identity), fields(methods = ?identity.methods))]
    pub async fn auth(
        &mut self,
        identity: Identity,
        scope: Option<Scope>,
    ) -> Result<&mut Self, AcceptanceError> {
        let auth_request = AuthRequest {
            auth: AuthRequestInner { identity, scope },
        };
        let rsp = self
            .client
            .post(self.url(&["v3", "auth", "tokens"])?)
            .json(&serde_json::to_value(auth_request)?)
            .send()
            .await?;

        if !rsp.status().is_success() {
            return Err(AcceptanceError::AuthenticationFailed(rsp.status()));
        }

        let token = rsp
            .headers()
            .get(SUBJECT_TOKEN_HEADER)
            .ok_or(AcceptanceError::TokenMissing)?
            .to_str()?
            .to_string();

        let auth: TokenResponse = rsp.json().await?;
        self.set_token(SecretString::from(token))?;
        self.auth = Some(auth);
        debug!("Authenticated");
        Ok(self)
    }

    /// Authenticate using the passed password auth and the scope.
    pub async fn auth_password(
        &mut self,
        password_auth: PasswordAuth,
        scope: Option<Scope>,
    ) -> Result<&mut Self, AcceptanceError> {
        let identity = IdentityBuilder::default()
            .methods(vec!["password".into()])
            .password(password_auth)
            .build()?;
        self.auth(identity, scope).await
    }

    /// Exchange the token for a new one with the given scope.
    pub async fn auth_token<S: AsRef<str>>(
        &mut self,
        token: S,
        scope: Option<Scope>,
    ) -> Result<&mut Self, AcceptanceError> {
        let identity = IdentityBuilder::default()
            .methods(vec!["token".into()])
            .token(TokenAuthBuilder::default().id(token.as_ref()).build()?)
            .build()?;
        self.auth(identity, scope).await
    }

    /// Re-scope the current token.
    pub async fn rescope(&mut self, scope: Option<Scope>) -> Result<&mut Self, AcceptanceError> {
        let token = self
            .token
            .as_ref()
            .ok_or(AcceptanceError::NotAuthenticated)?
            .expose_secret()
            .to_string();
        self.auth_token(token, scope).await
    }

    /// Authenticate as the configured admin with the admin project scope.
    pub async fn auth_admin(&mut self, config: &Config) -> Result<&mut Self, AcceptanceError> {
        let admin = &config.admin;
        self.auth_password(
            get_password_auth(
                &admin.username,
                admin.password.expose_secret(),
                &admin.domain_id,
            )?,
            Some(Scope::Project(
                ScopeProjectBuilder::default()
                    .name(admin.project_name.clone())
                    .domain(DomainBuilder::default().id(admin.domain_id.clone()).build()?)
                    .build()?,
            )),
        )
        .await
    }

    /// Append the path segments to the identity endpoint.
    ///
    /// Every segment is percent-encoded, so an ID never reaches another
    /// resource. Empty, `.` and `..` segments are rejected.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, AcceptanceError> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(AcceptanceError::InvalidPathSegment(segment.to_string()));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AcceptanceError::EndpointNotBase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder, AcceptanceError> {
        let url = self.url(path)?;
        debug!("{} {}", method, url);
        Ok(self.client.request(method, url))
    }

    /// Send the JSON body and decode the JSON response.
    pub(crate) async fn post_json<B, R>(&self, path: &[&str], body: &B) -> Result<R, AcceptanceError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let rsp = self
            .request(Method::POST, path)?
            .json(&serde_json::to_value(body)?)
            .send()
            .await?;
        Ok(check_status(Method::POST, rsp).await?.json::<R>().await?)
    }

    /// Fetch and decode the JSON resource.
    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &[&str]) -> Result<R, AcceptanceError> {
        let rsp = self.request(Method::GET, path)?.send().await?;
        Ok(check_status(Method::GET, rsp).await?.json::<R>().await?)
    }

    /// Send a request without body expecting a response without body.
    pub(crate) async fn send_empty(&self, method: Method, path: &[&str]) -> Result<(), AcceptanceError> {
        let rsp = self.request(method.clone(), path)?.send().await?;
        check_status(method, rsp).await?;
        Ok(())
    }

    /// Send a `HEAD` request returning the status without interpreting it.
    pub(crate) async fn head(&self, path: &[&str]) -> Result<StatusCode, AcceptanceError> {
        Ok(self.request(Method::HEAD, path)?.send().await?.status())
    }
}

/// Convert a non successful response into [`AcceptanceError::Api`].
async fn check_status(method: Method, rsp: Response) -> Result<Response, AcceptanceError> {
    let status = rsp.status();
    if status.is_success() {
        return Ok(rsp);
    }
    let url = rsp.url().to_string();
    let body = rsp.text().await.unwrap_or_default();
    Err(AcceptanceError::Api {
        method,
        url,
        status,
        body,
    })
}

/// Get the password auth identity struct
pub fn get_password_auth<U, P, DID>(
    username: U,
    password: P,
    domain_id: DID,
) -> Result<PasswordAuth, AcceptanceError>
where
    U: AsRef<str>,
    P: AsRef<str>,
    DID: AsRef<str>,
{
    Ok(PasswordAuthBuilder::default()
        .user(
            UserPasswordBuilder::default()
                .name(username.as_ref())
                .password(password.as_ref())
                .domain(DomainBuilder::default().id(domain_id.as_ref()).build()?)
                .build()?,
        )
        .build()?)
}
