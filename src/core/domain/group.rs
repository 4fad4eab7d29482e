//! Group and group detail snapshot.

use serde::{Deserialize, Serialize};

use super::{Client, SanitizedSecret};
use crate::core::types::{ClientId, GroupId, SecretId};

/// An access-control group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Group {
    /// Create a group record.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: GroupId(id),
            name: name.into(),
            description: None,
        }
    }
}

/// One consistent read of a group's current clients and secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub secrets: Vec<SanitizedSecret>,
}

impl GroupDetail {
    /// Empty snapshot for a group.
    pub fn empty(group: &Group) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone(),
            clients: Vec::new(),
            secrets: Vec::new(),
        }
    }

    /// Whether the client is enrolled in this group.
    pub fn has_client(&self, id: ClientId) -> bool {
        self.clients.iter().any(|c| c.id == id)
    }

    /// Whether the secret is granted to this group.
    pub fn has_secret(&self, id: SecretId) -> bool {
        self.secrets.iter().any(|s| s.id == id)
    }
}
