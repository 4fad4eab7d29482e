//! Secret metadata.

use serde::{Deserialize, Serialize};

use crate::core::secret_name;
use crate::core::types::{SecretId, SecretName, Version};

/// Metadata view of a secret, without its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedSecret {
    pub id: SecretId,
    pub name: SecretName,
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub description: Option<String>,
}

impl SanitizedSecret {
    /// Create a secret metadata record.
    pub fn new(id: u64, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: SecretId(id),
            name: name.into(),
            version: version.into(),
            description: None,
        }
    }

    /// Name shown to operators, encoding both base name and version.
    pub fn display_name(&self) -> String {
        secret_name::format_display_name(&self.name, &self.version)
    }
}

impl std::fmt::Display for SanitizedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
