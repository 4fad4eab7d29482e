//! Domain types.

mod client;
mod group;
mod kind;
mod membership;
mod secret;

pub use client::Client;
pub use group::{Group, GroupDetail};
pub use kind::AssignmentKind;
pub use membership::{already_assigned, Membership};
pub use secret::SanitizedSecret;
