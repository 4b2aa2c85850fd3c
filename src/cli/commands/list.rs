//! The listing commands (`games`, `boots`, `agents`).

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::header::UnitType;
use crate::list::list_units;
use crate::platform::InstallDirs;
use crate::ui::{format_size, Table};

use super::dispatcher::{Command, CommandResult};

/// The listing command implementation, shared by the three unit types.
pub struct ListCommand<'a> {
    dirs: &'a InstallDirs,
    unit_type: UnitType,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new listing command for one unit type.
    pub fn new(dirs: &'a InstallDirs, unit_type: UnitType, args: ListArgs) -> Self {
        Self {
            dirs,
            unit_type,
            args,
        }
    }

    fn render(&self) -> Result<String> {
        let units = list_units(self.dirs, self.unit_type.builtin_dir(self.dirs))?;

        if self.args.json {
            return Ok(serde_json::to_string_pretty(&units).map_err(anyhow::Error::from)?);
        }

        if units.is_empty() {
            return Ok(format!("No {}s installed", self.unit_type));
        }

        let mut table = Table::new(vec!["Id", "Size", "Path"]);
        for unit in &units {
            table.add_row(vec![
                unit.id.clone(),
                format_size(unit.size),
                unit.path.display().to_string(),
            ]);
        }

        Ok(table.render())
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        println!("{}", self.render()?);
        Ok(CommandResult::success())
    }
}
