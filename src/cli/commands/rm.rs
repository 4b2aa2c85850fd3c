//! The `rm` command.
//!
//! Removes an installed unit from the builtin directories.

use crate::cli::args::RmArgs;
use crate::error::Result;
use crate::platform::InstallDirs;
use crate::reader::remove_installed;

use super::dispatcher::{Command, CommandResult};

/// The rm command implementation.
pub struct RmCommand<'a> {
    dirs: &'a InstallDirs,
    args: RmArgs,
}

impl<'a> RmCommand<'a> {
    /// Create a new rm command.
    pub fn new(dirs: &'a InstallDirs, args: RmArgs) -> Self {
        Self { dirs, args }
    }
}

impl Command for RmCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        remove_installed(self.dirs, &self.args.target)?;
        println!("Removed {}", self.args.target);
        Ok(CommandResult::success())
    }
}
