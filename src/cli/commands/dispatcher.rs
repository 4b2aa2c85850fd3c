//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::header::UnitType;
use crate::platform::InstallDirs;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    dirs: InstallDirs,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given install directories.
    pub fn new(dirs: InstallDirs) -> Self {
        Self { dirs }
    }

    /// The install directories commands operate on.
    pub fn dirs(&self) -> &InstallDirs {
        &self.dirs
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Commands::Pull(args) => {
                let cmd = super::pull::PullCommand::new(&self.dirs, args.clone());
                cmd.execute()
            }
            Commands::Pack(args) => {
                let cmd = super::pack::PackCommand::new(&self.dirs, args.clone());
                cmd.execute()
            }
            Commands::Unpack(args) => {
                let cmd = super::unpack::UnpackCommand::new(&self.dirs, args.clone());
                cmd.execute()
            }
            Commands::Rm(args) => {
                let cmd = super::rm::RmCommand::new(&self.dirs, args.clone());
                cmd.execute()
            }
            Commands::Games(args) => {
                let cmd = super::list::ListCommand::new(&self.dirs, UnitType::Game, args.clone());
                cmd.execute()
            }
            Commands::Boots(args) => {
                let cmd = super::list::ListCommand::new(&self.dirs, UnitType::Boot, args.clone());
                cmd.execute()
            }
            Commands::Agents(args) => {
                let cmd = super::list::ListCommand::new(&self.dirs, UnitType::Agent, args.clone());
                cmd.execute()
            }
            Commands::Info => {
                let cmd = super::info::InfoCommand::new(&self.dirs);
                cmd.execute()
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute()
            }
        }
    }
}
