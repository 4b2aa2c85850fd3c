//! The `pack` command.
//!
//! Packs an installed or local unit into a zip archive.

use crate::cli::args::PackArgs;
use crate::error::Result;
use crate::platform::InstallDirs;
use crate::reader::{open, OpenOptions};

use super::dispatcher::{Command, CommandResult};

/// The pack command implementation.
pub struct PackCommand<'a> {
    dirs: &'a InstallDirs,
    args: PackArgs,
}

impl<'a> PackCommand<'a> {
    /// Create a new pack command.
    pub fn new(dirs: &'a InstallDirs, args: PackArgs) -> Self {
        Self { dirs, args }
    }
}

impl Command for PackCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        let path = open(self.dirs, OpenOptions::new(&self.args.target), |reader| {
            reader.pack(self.args.output.as_deref())
        })?;

        println!("Packed to {}", path.display());
        Ok(CommandResult::success())
    }
}
