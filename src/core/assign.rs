//! Assignment of clients and secrets to groups.
//!
//! Each run validates its input completely before the first remote call,
//! resolves fresh ids, reads the group's membership once, and issues at most
//! one mutation. A run against a group that already has the target is a
//! no-op, so repeating a command is safe.

use tracing::{debug, info};

use crate::core::directory::RemoteDirectory;
use crate::core::domain::{
    already_assigned, AssignmentKind, Client, Group, Membership, SanitizedSecret,
};
use crate::core::secret_name;
use crate::core::types::{SecretName, Version};
use crate::core::validation;
use crate::error::Result;

/// Raw operator input for one assign or unassign invocation.
#[derive(Debug, Clone, Default)]
pub struct AssignRequest {
    /// Assignment type tokens; exactly one of `client` or `secret`.
    pub assign_type: Vec<String>,
    /// Client name or secret display name.
    pub name: String,
    /// Group name.
    pub group: String,
}

impl AssignRequest {
    pub fn new(kind: &str, name: &str, group: &str) -> Self {
        Self {
            assign_type: vec![kind.to_string()],
            name: name.to_string(),
            group: group.to_string(),
        }
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub group: String,
    pub target: Target,
}

/// Validated target of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Client(String),
    Secret { name: SecretName, version: Version },
}

impl Target {
    pub fn kind(&self) -> AssignmentKind {
        match self {
            Target::Client(_) => AssignmentKind::Client,
            Target::Secret { .. } => AssignmentKind::Secret,
        }
    }

    /// Name as the operator typed it.
    pub fn display_name(&self) -> String {
        match self {
            Target::Client(name) => name.clone(),
            Target::Secret { name, version } => secret_name::format_display_name(name, version),
        }
    }
}

/// Check the request without touching the network.
///
/// The assignment type is checked first, then the group name, then the
/// target name.
///
/// # Errors
///
/// Returns `ValidationError` on a missing or unsupported type, an invalid
/// group or client name, or a malformed secret display name.
pub fn plan(request: &AssignRequest) -> Result<Plan> {
    let kind = AssignmentKind::from_tokens(&request.assign_type)?;
    validation::require_valid_name("group", &request.group)?;

    let target = match kind {
        AssignmentKind::Client => {
            validation::require_valid_name("client", &request.name)?;
            Target::Client(request.name.clone())
        }
        AssignmentKind::Secret => {
            // the display name as typed must be a valid name before it is split
            let (name, version) = secret_name::parse_validated(&request.name)?;
            Target::Secret { name, version }
        }
    };

    Ok(Plan {
        group: request.group.clone(),
        target,
    })
}

/// How a client was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Found(Client),
    Created(Client),
}

impl Resolved {
    pub fn client(&self) -> &Client {
        match self {
            Resolved::Found(client) | Resolved::Created(client) => client,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Resolved::Created(_))
    }
}

/// Effect of a run on the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The target was enrolled or granted.
    Added,
    /// The target was evicted or revoked.
    Removed,
    /// Membership already matched; nothing was sent.
    Unchanged,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: AssignmentKind,
    pub target: String,
    pub group: Group,
    pub change: Change,
    /// Whether the client had to be created first.
    pub created: bool,
}

/// Drives validation, resolution and mutation against a directory.
pub struct Orchestrator<'a, D: RemoteDirectory + ?Sized> {
    directory: &'a D,
}

impl<'a, D: RemoteDirectory + ?Sized> Orchestrator<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Make the target a member of the group.
    ///
    /// Clients that do not exist yet are created. Secrets must exist.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` before any remote call on bad input,
    /// `NotFoundError` if the group or secret is missing, and any other
    /// directory error unchanged. A client created before a failing enroll
    /// stays created.
    pub fn assign(&self, request: &AssignRequest) -> Result<Report> {
        let plan = plan(request)?;
        let group = self.resolve_group(&plan.group)?;

        let (member, created) = match &plan.target {
            Target::Client(name) => {
                let resolved = self.get_or_create_client(name)?;
                (
                    Membership::Client(resolved.client().id),
                    resolved.was_created(),
                )
            }
            Target::Secret { name, version } => {
                let secret = self.resolve_secret(name, version)?;
                (Membership::Secret(secret.id), false)
            }
        };

        let snapshot = self.directory.group_details(group.id)?;
        let change = if already_assigned(&snapshot, member) {
            debug!(group = %group.name, ?member, "already assigned");
            Change::Unchanged
        } else {
            match member {
                Membership::Client(client) => {
                    info!(client = %client, group = %group.id, "enrolling client");
                    self.directory.enroll_client(client, group.id)?;
                }
                Membership::Secret(secret) => {
                    info!(secret = %secret, group = %group.id, "granting secret");
                    self.directory.grant_secret(secret, group.id)?;
                }
            }
            Change::Added
        };

        Ok(Report {
            kind: plan.target.kind(),
            target: plan.target.display_name(),
            group,
            change,
            created,
        })
    }

    /// Remove the target from the group.
    ///
    /// Nothing is created; a missing client is `NotFound`.
    ///
    /// # Errors
    ///
    /// Same as [`Orchestrator::assign`], except client lookups are not
    /// recovered.
    pub fn unassign(&self, request: &AssignRequest) -> Result<Report> {
        let plan = plan(request)?;
        let group = self.resolve_group(&plan.group)?;

        let member = match &plan.target {
            Target::Client(name) => {
                debug!(client = %name, "resolving client");
                Membership::Client(self.directory.client_by_name(name)?.id)
            }
            Target::Secret { name, version } => {
                Membership::Secret(self.resolve_secret(name, version)?.id)
            }
        };

        let snapshot = self.directory.group_details(group.id)?;
        let change = if !already_assigned(&snapshot, member) {
            debug!(group = %group.name, ?member, "not assigned");
            Change::Unchanged
        } else {
            match member {
                Membership::Client(client) => {
                    info!(client = %client, group = %group.id, "evicting client");
                    self.directory.evict_client(client, group.id)?;
                }
                Membership::Secret(secret) => {
                    info!(secret = %secret, group = %group.id, "revoking secret");
                    self.directory.revoke_secret(secret, group.id)?;
                }
            }
            Change::Removed
        };

        Ok(Report {
            kind: plan.target.kind(),
            target: plan.target.display_name(),
            group,
            change,
            created: false,
        })
    }

    /// Resolve a client by name, creating it on a lookup miss.
    ///
    /// After creation the client is looked up again; the id comes from that
    /// second read.
    pub fn get_or_create_client(&self, name: &str) -> Result<Resolved> {
        debug!(client = %name, "resolving client");
        match self.directory.client_by_name(name) {
            Ok(client) => Ok(Resolved::Found(client)),
            Err(e) if e.is_not_found() => {
                info!(client = %name, "client not found, creating");
                self.directory.create_client(name)?;
                let client = self.directory.client_by_name(name)?;
                Ok(Resolved::Created(client))
            }
            Err(e) => Err(e),
        }
    }

    fn resolve_group(&self, name: &str) -> Result<Group> {
        debug!(group = %name, "resolving group");
        self.directory.group_by_name(name)
    }

    fn resolve_secret(&self, name: &str, version: &str) -> Result<SanitizedSecret> {
        debug!(secret = %name, version = %version, "resolving secret");
        self.directory.sanitized_secret_by_name_and_version(name, version)
    }
}
