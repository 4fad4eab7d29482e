//! Command-line interface.

pub mod assign;
pub mod completions;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::assign::AssignRequest;
use crate::core::constants;
use crate::error::Result;

/// keywhiz - assign clients and secrets to Keywhiz groups.
#[derive(Parser)]
#[command(
    name = "keywhiz",
    about = "Assign clients and secrets to Keywhiz groups",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection settings shared by all remote commands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Keywhiz server base URL
    #[arg(long, global = true, env = constants::SERVER_ENV, value_name = "URL")]
    pub server: Option<String>,

    /// Config file (defaults to ~/.keywhiz/config.toml)
    #[arg(long, global = true, env = constants::CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Session cookie value
    #[arg(
        long,
        global = true,
        env = constants::SESSION_ENV,
        hide = true,
        hide_env_values = true
    )]
    pub session: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Assign a client or secret to a group
    Assign(TargetArgs),

    /// Remove a client or secret from a group
    Unassign(TargetArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// What to (un)assign and where.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Object type: client or secret
    #[arg(short = 't', long = "type", value_name = "TYPE", value_delimiter = ',')]
    pub assign_type: Vec<String>,

    /// Client name, or secret name as `name` or `name..version`
    pub name: String,

    /// Group name
    #[arg(short, long)]
    pub group: String,
}

impl From<TargetArgs> for AssignRequest {
    fn from(args: TargetArgs) -> Self {
        Self {
            assign_type: args.assign_type,
            name: args.name,
            group: args.group,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, global: GlobalArgs) -> Result<()> {
    match command {
        Command::Assign(args) => assign::assign(args.into(), &global),
        Command::Unassign(args) => assign::unassign(args.into(), &global),
        Command::Completions { shell } => completions::execute(shell),
    }
}
