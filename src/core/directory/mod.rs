//! Remote directory access.
//!
//! The orchestrator reads and mutates group membership only through the
//! `RemoteDirectory` trait. The HTTP backend talks to a Keywhiz server's
//! admin API; test builds also get an in-memory backend.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `RemoteDirectory` trait
//! 2. Add the implementation in a new file (e.g., `grpc.rs`)
//! 3. Re-export from this module

use crate::core::domain::{Client, Group, GroupDetail, SanitizedSecret};
use crate::core::types::{ClientId, GroupId, SecretId};
use crate::error::Result;

mod http;

pub use http::Http;

/// Query and mutation surface of the remote store.
///
/// Lookups fail with `Error::NotFound` when the named object is absent.
/// Any other failure is returned as-is; implementations decide on retries.
pub trait RemoteDirectory {
    /// Look up a group by name.
    fn group_by_name(&self, name: &str) -> Result<Group>;

    /// Look up a client by name.
    fn client_by_name(&self, name: &str) -> Result<Client>;

    /// Create a client with default settings.
    ///
    /// Callers re-resolve the client by name afterwards rather than relying
    /// on the response.
    fn create_client(&self, name: &str) -> Result<()>;

    /// Look up secret metadata by base name and version token.
    ///
    /// An empty version selects the current version.
    fn sanitized_secret_by_name_and_version(
        &self,
        name: &str,
        version: &str,
    ) -> Result<SanitizedSecret>;

    /// Fetch a group's current clients and secrets in one read.
    fn group_details(&self, group: GroupId) -> Result<GroupDetail>;

    /// Enroll a client into a group.
    fn enroll_client(&self, client: ClientId, group: GroupId) -> Result<()>;

    /// Grant a secret to a group.
    fn grant_secret(&self, secret: SecretId, group: GroupId) -> Result<()>;

    /// Remove a client from a group.
    fn evict_client(&self, client: ClientId, group: GroupId) -> Result<()>;

    /// Revoke a secret from a group.
    fn revoke_secret(&self, secret: SecretId, group: GroupId) -> Result<()>;
}
