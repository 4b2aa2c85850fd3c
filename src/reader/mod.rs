//! Uniform access to installed units.
//!
//! A unit on disk is either a zip archive or a plain directory. [`Reader`]
//! is a tagged variant over the two storage kinds sharing one capability
//! contract (header loading, size, pack, unpack, close, remove), so callers
//! never branch on the physical representation. [`open`] resolves a target
//! string to a concrete path via fixed-priority probing and hands a scoped
//! reader to a callback, guaranteeing close on every exit path.

mod archive;
mod directory;

use std::path::{Path, PathBuf};

pub use archive::ArchiveReader;
pub use directory::DirectoryReader;

use crate::error::{Result, RetrodockError};
use crate::header::Header;
use crate::paths::make_absolute;
use crate::platform::{InstallDirs, ARCHIVE_EXT};
use crate::target::is_id;

/// Handle over an installed unit: archive or directory, never both.
#[derive(Debug)]
pub enum Reader {
    Archive(ArchiveReader),
    Directory(DirectoryReader),
}

impl Reader {
    /// Id of the unit; filename-derived until the header overrides it.
    pub fn id(&self) -> &str {
        match self {
            Reader::Archive(r) => r.id(),
            Reader::Directory(r) => r.id(),
        }
    }

    /// Path of the backing archive or directory.
    pub fn path(&self) -> &Path {
        match self {
            Reader::Archive(r) => r.path(),
            Reader::Directory(r) => r.path(),
        }
    }

    pub fn is_archive(&self) -> bool {
        matches!(self, Reader::Archive(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Reader::Directory(_))
    }

    /// Load the unit's header, caching it and normalizing the id.
    pub fn load_header(&mut self) -> Result<Header> {
        match self {
            Reader::Archive(r) => r.load_header(),
            Reader::Directory(r) => r.load_header(),
        }
    }

    /// The cached header, when [`load_header`](Reader::load_header) has run.
    pub fn header(&self) -> Option<&Header> {
        match self {
            Reader::Archive(r) => r.header(),
            Reader::Directory(r) => r.header(),
        }
    }

    /// Size of the unit in bytes.
    pub fn size(&self) -> Result<u64> {
        match self {
            Reader::Archive(r) => r.size(),
            Reader::Directory(r) => r.size(),
        }
    }

    /// Pack the unit to an archive at `output` (default: CWD, `<id>.zip`).
    pub fn pack(&mut self, output: Option<&Path>) -> Result<PathBuf> {
        match self {
            Reader::Archive(r) => r.pack(output),
            Reader::Directory(r) => r.pack(output),
        }
    }

    /// Unpack the unit's files under `output` (default: CWD).
    pub fn unpack(&mut self, output: Option<&Path>) -> Result<PathBuf> {
        match self {
            Reader::Archive(r) => r.unpack(output),
            Reader::Directory(r) => r.unpack(output),
        }
    }

    /// Release the underlying handle. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        match self {
            Reader::Archive(r) => r.close(),
            Reader::Directory(r) => r.close(),
        }
    }

    /// Delete the unit from disk.
    pub fn remove(&mut self) -> Result<()> {
        match self {
            Reader::Archive(r) => r.remove(),
            Reader::Directory(r) => r.remove(),
        }
    }
}

/// Options for [`open`].
#[derive(Debug, Clone)]
pub struct OpenOptions<'a> {
    /// Id or path of the target.
    pub target: &'a str,
    /// Only probe the builtin directories.
    pub builtin_dirs_only: bool,
}

impl<'a> OpenOptions<'a> {
    pub fn new(target: &'a str) -> Self {
        Self {
            target,
            builtin_dirs_only: false,
        }
    }

    pub fn builtin_dirs_only(mut self) -> Self {
        self.builtin_dirs_only = true;
        self
    }
}

/// Candidate install paths for a target, in fixed probing priority.
///
/// The raw target (absolute or CWD-relative) comes first unless
/// `builtin_dirs_only`, followed by `<dir>/<target>.zip` for each builtin
/// directory in games, boots, agents order.
pub fn install_paths(
    dirs: &InstallDirs,
    target: &str,
    builtin_dirs_only: bool,
) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);
    if !builtin_dirs_only {
        paths.push(make_absolute(target));
    }
    for dir in dirs.builtin_dirs() {
        paths.push(dir.join(format!("{target}.{ARCHIVE_EXT}")));
    }
    paths
}

/// Check whether an id is installed under a builtin directory.
pub fn is_installed(dirs: &InstallDirs, id: &str) -> bool {
    install_paths(dirs, id, true).iter().any(|path| path.exists())
}

/// Open a unit for reading and run `callback` against it.
///
/// The first existing candidate path wins: a `.zip` suffix yields an archive
/// reader, an existing directory a directory reader. The header is loaded
/// eagerly, so HeaderNotFound surfaces before the callback runs and the
/// reader's id is already normalized. The reader is closed on every exit
/// path; close errors are logged and never propagated, so they cannot mask
/// a callback failure.
pub fn open<T, F>(dirs: &InstallDirs, options: OpenOptions<'_>, callback: F) -> Result<T>
where
    F: FnOnce(&mut Reader) -> Result<T>,
{
    let mut found = None;
    for path in install_paths(dirs, options.target, options.builtin_dirs_only) {
        if !path.exists() {
            continue;
        }

        if path.extension().is_some_and(|ext| ext == ARCHIVE_EXT) {
            found = Some(Reader::Archive(ArchiveReader::open(&path)?));
            break;
        }

        if path.is_dir() {
            found = Some(Reader::Directory(DirectoryReader::open(&path)));
            break;
        }
    }

    let Some(mut reader) = found else {
        return Err(RetrodockError::not_found(options.target));
    };

    let result = reader
        .load_header()
        .and_then(|_| callback(&mut reader));

    if let Err(err) = reader.close() {
        tracing::debug!("Could not close reader: {err}");
    }

    result
}

/// Remove an installed unit from the builtin directories.
///
/// Only bare ids are accepted; missing files are not an error.
pub fn remove_installed(dirs: &InstallDirs, target: &str) -> Result<()> {
    if !is_id(target) {
        return Err(RetrodockError::UnexpectedArgument {
            arg: "target".into(),
            reason: "must be an id".into(),
        });
    }

    for path in install_paths(dirs, target, true) {
        tracing::debug!("Remove {}", path.display());
        match std::fs::remove_file(&path) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => return Err(err.into()),
            _ => {}
        }
    }

    Ok(())
}
