//! Identifier types for remote objects.
//!
//! Mutation calls take these rather than names so that a reused name can
//! never redirect a grant to the wrong object.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw numeric value.
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

id_type!(
    /// Numeric id of a group.
    GroupId
);
id_type!(
    /// Numeric id of a client.
    ClientId
);
id_type!(
    /// Numeric id of a secret.
    SecretId
);

/// Base name of a secret, without its version.
pub type SecretName = String;

/// Opaque version token of a secret. Empty means the current version.
pub type Version = String;
