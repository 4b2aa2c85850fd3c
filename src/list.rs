//! Enumeration of installed units.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::header::Header;
use crate::platform::{InstallDirs, ARCHIVE_EXT};
use crate::reader::{open, OpenOptions};

/// One installed unit, as shown by the listing commands.
#[derive(Debug, Clone, Serialize)]
pub struct UnitEntry {
    /// Path of the backing archive or directory.
    pub path: PathBuf,
    /// Canonical id, normalized from the header.
    pub id: String,
    /// Parsed header.
    pub header: Header,
    /// Size in bytes.
    pub size: u64,
}

/// List the units installed under `root`, sorted by id.
///
/// A missing root yields an empty list. Entries that cannot be opened or
/// carry no readable header are skipped, not fatal: one broken archive must
/// not hide the rest of the listing.
pub fn list_units(dirs: &InstallDirs, root: &Path) -> Result<Vec<UnitEntry>> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut units = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_archive = path.extension().is_some_and(|ext| ext == ARCHIVE_EXT);
        if !is_archive && !path.is_dir() {
            continue;
        }

        let opened = open(
            dirs,
            OpenOptions::new(&path.to_string_lossy()),
            |reader| {
                Ok(UnitEntry {
                    path: reader.path().to_path_buf(),
                    id: reader.id().to_string(),
                    header: reader.load_header()?,
                    size: reader.size()?,
                })
            },
        );

        match opened {
            Ok(unit) => units.push(unit),
            Err(err) => tracing::debug!("Skipping {}: {err}", path.display()),
        }
    }

    units.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(units)
}
