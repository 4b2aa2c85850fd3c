//! Reader over a unit stored as a plain directory.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;

use crate::error::{Result, RetrodockError};
use crate::header::Header;
use crate::paths::{make_absolute, output_file};
use crate::platform::{ARCHIVE_EXT, HEADER_FILE};

/// Reader for directories.
#[derive(Debug)]
pub struct DirectoryReader {
    id: String,
    root: PathBuf,
    header: Option<Header>,
}

impl DirectoryReader {
    /// Open a directory for reading.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let id = root
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            id,
            root,
            header: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Load and cache `<root>/header.yml`.
    ///
    /// A missing file is HeaderNotFound, not a generic I/O error; malformed
    /// YAML is InvalidHeader. On success the reader's id is overwritten by
    /// the header's own `id`, permanently.
    pub fn load_header(&mut self) -> Result<Header> {
        if let Some(header) = &self.header {
            return Ok(header.clone());
        }

        let text = match std::fs::read_to_string(self.root.join(HEADER_FILE)) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RetrodockError::HeaderNotFound {
                    id: self.id.clone(),
                })
            }
            Err(err) => return Err(err.into()),
        };

        let header = Header::parse(&text).map_err(|err| RetrodockError::InvalidHeader {
            message: err.to_string(),
        })?;

        if let Some(id) = &header.id {
            self.id = id.clone();
        }
        self.header = Some(header.clone());
        Ok(header)
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Recursive byte count of all files under the root.
    pub fn size(&self) -> Result<u64> {
        let mut total = 0;
        for entry in WalkDir::new(&self.root) {
            let entry = entry.context("failed to walk directory")?;
            if entry.file_type().is_file() {
                total += entry.metadata().context("failed to stat file")?.len();
            }
        }
        Ok(total)
    }

    /// Serialize the directory tree into a new compressed archive.
    ///
    /// A destination without a file extension is treated as a directory and
    /// receives `<id>.zip`.
    pub fn pack(&mut self, output: Option<&Path>) -> Result<PathBuf> {
        let filename = format!("{}.{ARCHIVE_EXT}", self.id);
        let dst = output_file(output.unwrap_or_else(|| Path::new(".")), &filename);

        tracing::info!("Pack to {}", dst.display());
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&dst)?;
        let mut writer = zip::ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.context("failed to walk directory")?;
            let name = entry
                .path()
                .strip_prefix(&self.root)
                .context("entry outside of root")?
                .to_string_lossy()
                .into_owned();

            if entry.file_type().is_dir() {
                writer
                    .add_directory(&name, options)
                    .context("failed to add directory to archive")?;
            } else {
                writer
                    .start_file(&name, options)
                    .context("failed to add file to archive")?;
                let mut file = File::open(entry.path())?;
                io::copy(&mut file, &mut writer)?;
            }
        }

        writer.finish().context("failed to finalize archive")?;
        tracing::debug!("{} bytes packed", std::fs::metadata(&dst)?.len());
        Ok(dst)
    }

    /// Recursively copy the directory tree to the destination.
    ///
    /// Mirrors the archive reader: an existing destination directory gets
    /// `<output>/<id>` appended.
    pub fn unpack(&mut self, output: Option<&Path>) -> Result<PathBuf> {
        let mut dst = make_absolute(output.unwrap_or_else(|| Path::new(".")));
        if dst.is_dir() {
            dst = dst.join(&self.id);
        }

        tracing::info!("Unpack to {}", dst.display());
        std::fs::create_dir_all(&dst)?;

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.context("failed to walk directory")?;
            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .context("entry outside of root")?;
            let entry_path = dst.join(rel);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&entry_path)?;
            } else {
                if let Some(parent) = entry_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::copy(entry.path(), &entry_path)?;
            }
        }

        Ok(dst)
    }

    /// No handle to release.
    pub fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Recursively delete the directory tree. Missing trees are fine.
    pub fn remove(&mut self) -> Result<()> {
        match std::fs::remove_dir_all(&self.root) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
