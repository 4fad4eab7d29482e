//! Membership checks against a group snapshot.

use super::GroupDetail;
use crate::core::types::{ClientId, SecretId};

/// A prospective member of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Client(ClientId),
    Secret(SecretId),
}

/// Whether `member` is already part of the snapshot.
pub fn already_assigned(snapshot: &GroupDetail, member: Membership) -> bool {
    match member {
        Membership::Client(id) => snapshot.has_client(id),
        Membership::Secret(id) => snapshot.has_secret(id),
    }
}
