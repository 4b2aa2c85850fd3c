//! Install directories and first-run bootstrap.
//!
//! All install locations derive from a single data root, resolved once at
//! startup and passed explicitly to every operation as [`InstallDirs`].
//! Nothing in the core reads ambient global state, so tests can substitute
//! isolated roots without touching production paths.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Environment variable overriding the data root (used by tests and CI).
pub const DATA_DIR_ENV: &str = "RETRODOCK_DATA_DIR";

/// Default upstream source seeded into `sources.list` on first run.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/retrodock/units/master/releases";

/// Reserved header file name inside every unit.
pub const HEADER_FILE: &str = "header.yml";

/// Archive extension for distributed units.
pub const ARCHIVE_EXT: &str = "zip";

/// The three builtin install roots plus the sources list location.
///
/// Constructed once at process startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallDirs {
    /// Install root for game units.
    pub games: PathBuf,
    /// Install root for boot runtime units.
    pub boots: PathBuf,
    /// Install root for agent units.
    pub agents: PathBuf,
    /// Path of the `sources.list` file.
    pub sources_list: PathBuf,
}

impl InstallDirs {
    /// Build the install directories under an explicit data root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            games: root.join("games"),
            boots: root.join("boots"),
            agents: root.join("agents"),
            sources_list: root.join("sources.list"),
        }
    }

    /// Resolve the data root from the environment.
    ///
    /// `RETRODOCK_DATA_DIR` takes precedence; otherwise the per-user data
    /// directory with a `retrodock` subdirectory.
    pub fn resolve() -> Self {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Self::new(PathBuf::from(dir));
        }

        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("retrodock");
        Self::new(root)
    }

    /// Create the builtin directories and seed `sources.list` on first run.
    pub fn create(&self) -> Result<()> {
        for dir in [&self.games, &self.boots, &self.agents] {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        if !self.sources_list.exists() {
            if let Some(parent) = self.sources_list.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(
                &self.sources_list,
                format!("# Official Retrodock units\n{DEFAULT_SOURCE}\n"),
            )?;
        }

        Ok(())
    }

    /// Iterate the three builtin directories in probing order.
    pub fn builtin_dirs(&self) -> [&Path; 3] {
        [&self.games, &self.boots, &self.agents]
    }
}
