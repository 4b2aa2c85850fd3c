//! The `unpack` command.
//!
//! Extracts a unit's files into a directory.

use crate::cli::args::UnpackArgs;
use crate::error::Result;
use crate::platform::InstallDirs;
use crate::reader::{open, OpenOptions};

use super::dispatcher::{Command, CommandResult};

/// The unpack command implementation.
pub struct UnpackCommand<'a> {
    dirs: &'a InstallDirs,
    args: UnpackArgs,
}

impl<'a> UnpackCommand<'a> {
    /// Create a new unpack command.
    pub fn new(dirs: &'a InstallDirs, args: UnpackArgs) -> Self {
        Self { dirs, args }
    }
}

impl Command for UnpackCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        let path = open(self.dirs, OpenOptions::new(&self.args.target), |reader| {
            reader.unpack(self.args.output.as_deref())
        })?;

        println!("Unpacked to {}", path.display());
        Ok(CommandResult::success())
    }
}
