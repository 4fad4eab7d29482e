//! HTTP backend for the Keywhiz admin API.
//!
//! Blocking requests over `ureq` with one global timeout. No retries.

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use ureq::Agent;
use zeroize::Zeroizing;

use super::RemoteDirectory;
use crate::core::config::Config;
use crate::core::constants::{self, api};
use crate::core::domain::{Client, Group, GroupDetail, SanitizedSecret};
use crate::core::secret_name;
use crate::core::types::{ClientId, GroupId, SecretId};
use crate::error::{Error, NotFoundError, RemoteError, Result};

/// Keywhiz server reached over HTTP(S).
pub struct Http {
    agent: Agent,
    base: String,
    cookie: Option<Zeroizing<String>>,
    user_agent: String,
}

impl std::fmt::Debug for Http {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Http")
            .field("base", &self.base)
            .field("authenticated", &self.cookie.is_some())
            .finish()
    }
}

impl Http {
    /// Build a client for the configured server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingServer` if no server URL is configured.
    pub fn new(config: &Config) -> Result<Self> {
        let base = config.server()?.to_string();
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build();

        Ok(Self {
            agent: Agent::new_with_config(agent_config),
            base,
            cookie: config
                .session()
                .map(|s| Zeroizing::new(format!("{}={}", constants::SESSION_COOKIE, s))),
            user_agent: config.user_agent().to_string(),
        })
    }

    /// Server base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn prepare<B>(&self, request: ureq::RequestBuilder<B>) -> ureq::RequestBuilder<B> {
        let request = request
            .header("Accept", "application/json")
            .header("User-Agent", self.user_agent.as_str());
        match &self.cookie {
            Some(cookie) => request.header("Cookie", cookie.as_str()),
            None => request,
        }
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        missing: impl FnOnce() -> NotFoundError,
    ) -> Result<T> {
        debug!(method = "GET", path, "request");
        let mut request = self.prepare(self.agent.get(&self.url(path)));
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        match request.call() {
            Ok(mut response) => response.body_mut().read_json::<T>().map_err(|e| {
                RemoteError::Decode {
                    path: path.to_string(),
                    message: e.to_string(),
                }
                .into()
            }),
            Err(ureq::Error::StatusCode(404)) => Err(missing().into()),
            Err(e) => Err(classify("GET", path, e)),
        }
    }

    fn put(&self, path: &str) -> Result<()> {
        debug!(method = "PUT", path, "request");
        self.prepare(self.agent.put(&self.url(path)))
            .send_empty()
            .map(|_| ())
            .map_err(|e| classify("PUT", path, e))
    }

    fn delete(&self, path: &str) -> Result<()> {
        debug!(method = "DELETE", path, "request");
        self.prepare(self.agent.delete(&self.url(path)))
            .call()
            .map(|_| ())
            .map_err(|e| classify("DELETE", path, e))
    }
}

impl RemoteDirectory for Http {
    fn group_by_name(&self, name: &str) -> Result<Group> {
        self.get(api::GROUPS, &[("name", name)], || NotFoundError::Group(name.to_string()))
    }

    fn client_by_name(&self, name: &str) -> Result<Client> {
        self.get(api::CLIENTS, &[("name", name)], || NotFoundError::Client(name.to_string()))
    }

    fn create_client(&self, name: &str) -> Result<()> {
        debug!(method = "POST", path = api::CLIENTS, "request");
        let body = json!({
            "name": name,
            "description": "",
            "automationAllowed": false,
        });

        self.prepare(self.agent.post(&self.url(api::CLIENTS)))
            .send_json(&body)
            .map(|_| ())
            .map_err(|e| classify("POST", api::CLIENTS, e))
    }

    fn sanitized_secret_by_name_and_version(
        &self,
        name: &str,
        version: &str,
    ) -> Result<SanitizedSecret> {
        let mut query = vec![("name", name)];
        if !version.is_empty() {
            query.push(("version", version));
        }

        let display = secret_name::format_display_name(name, version);
        self.get(api::SECRETS, &query, || NotFoundError::Secret(display))
    }

    fn group_details(&self, group: GroupId) -> Result<GroupDetail> {
        let path = format!("{}/{}", api::GROUPS, group);
        self.get(&path, &[], || NotFoundError::Group(group.to_string()))
    }

    fn enroll_client(&self, client: ClientId, group: GroupId) -> Result<()> {
        self.put(&membership_path(api::CLIENT_MEMBERSHIPS, client.get(), group))
    }

    fn grant_secret(&self, secret: SecretId, group: GroupId) -> Result<()> {
        self.put(&membership_path(api::SECRET_MEMBERSHIPS, secret.get(), group))
    }

    fn evict_client(&self, client: ClientId, group: GroupId) -> Result<()> {
        self.delete(&membership_path(api::CLIENT_MEMBERSHIPS, client.get(), group))
    }

    fn revoke_secret(&self, secret: SecretId, group: GroupId) -> Result<()> {
        self.delete(&membership_path(api::SECRET_MEMBERSHIPS, secret.get(), group))
    }
}

/// `{base}/{member}/groups/{group}`
fn membership_path(base: &str, member: u64, group: GroupId) -> String {
    format!("{}/{}/groups/{}", base, member, group)
}

fn classify(method: &'static str, path: &str, err: ureq::Error) -> Error {
    match err {
        ureq::Error::StatusCode(status) => RemoteError::Status {
            method,
            path: path.to_string(),
            status,
        }
        .into(),
        other => RemoteError::Transport {
            path: path.to_string(),
            message: other.to_string(),
        }
        .into(),
    }
}
