//! Client identity.

use serde::{Deserialize, Serialize};

use crate::core::types::ClientId;

/// An identity that can be enrolled into groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub automation_allowed: bool,
}

impl Client {
    /// Create a client record.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ClientId(id),
            name: name.into(),
            description: None,
            enabled: false,
            automation_allowed: false,
        }
    }
}
