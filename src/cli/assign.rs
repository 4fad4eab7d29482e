//! Assign and unassign commands.

use tracing::debug;

use crate::cli::output;
use crate::cli::GlobalArgs;
use crate::core::assign::{self, AssignRequest, Change, Orchestrator, Report};
use crate::core::config::{Config, Overrides};
use crate::core::domain::AssignmentKind;
use crate::core::directory::Http;
use crate::error::Result;

/// Assign a client or secret to a group.
pub fn assign(request: AssignRequest, global: &GlobalArgs) -> Result<()> {
    // Reject bad input before config is read or a connection is built.
    assign::plan(&request)?;

    let directory = connect(global)?;
    let report = Orchestrator::new(&directory).assign(&request)?;
    print_report(&report, "is already assigned to");
    Ok(())
}

/// Remove a client or secret from a group.
pub fn unassign(request: AssignRequest, global: &GlobalArgs) -> Result<()> {
    assign::plan(&request)?;

    let directory = connect(global)?;
    let report = Orchestrator::new(&directory).unassign(&request)?;
    print_report(&report, "is not assigned to");
    Ok(())
}

fn connect(global: &GlobalArgs) -> Result<Http> {
    let config = Config::load(Overrides {
        config_path: global.config.clone(),
        server: global.server.clone(),
        session: global.session.clone(),
    })?;
    let directory = Http::new(&config)?;
    debug!(server = directory.base(), "connected");
    Ok(directory)
}

fn print_report(report: &Report, unchanged: &str) {
    let target = format!("{} {}", report.kind, output::key(&report.target));
    let group = output::key(&report.group.name);

    if report.created {
        output::success(&format!("created {}", target));
    }

    match (report.change, report.kind) {
        (Change::Added, AssignmentKind::Client) => {
            output::success(&format!("enrolled {} in group {}", target, group))
        }
        (Change::Added, AssignmentKind::Secret) => {
            output::success(&format!("granted {} to group {}", target, group))
        }
        (Change::Removed, AssignmentKind::Client) => {
            output::success(&format!("evicted {} from group {}", target, group))
        }
        (Change::Removed, AssignmentKind::Secret) => {
            output::success(&format!("revoked {} from group {}", target, group))
        }
        (Change::Unchanged, _) => {
            output::dimmed(&format!("{} {} group {}", target, unchanged, group))
        }
    }
}
