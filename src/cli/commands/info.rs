//! The `info` command.
//!
//! Prints the data directories and configured sources.

use crate::error::Result;
use crate::platform::InstallDirs;
use crate::sources::{get_sources, SourcesOptions};

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand<'a> {
    dirs: &'a InstallDirs,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command.
    pub fn new(dirs: &'a InstallDirs) -> Self {
        Self { dirs }
    }

    fn render(&self) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Games:   {}\n", self.dirs.games.display()));
        output.push_str(&format!("Boots:   {}\n", self.dirs.boots.display()));
        output.push_str(&format!("Agents:  {}\n", self.dirs.agents.display()));
        output.push_str("Sources:\n");

        for source in get_sources(self.dirs, &SourcesOptions::default())? {
            output.push_str(&format!("  {source}\n"));
        }

        Ok(output)
    }
}

impl Command for InfoCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        print!("{}", self.render()?);
        Ok(CommandResult::success())
    }
}
