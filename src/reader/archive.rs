//! Reader over a unit stored as a zip archive.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use zip::ZipArchive;

use crate::error::{Result, RetrodockError};
use crate::header::Header;
use crate::paths::{make_absolute, output_file};
use crate::platform::{ARCHIVE_EXT, HEADER_FILE};

/// Reader for `.zip` archives.
///
/// Owns the archive handle exclusively; [`close`](ArchiveReader::close)
/// drops it and is idempotent.
#[derive(Debug)]
pub struct ArchiveReader {
    id: String,
    path: PathBuf,
    zip: Option<ZipArchive<File>>,
    header: Option<Header>,
}

impl ArchiveReader {
    /// Open an archive for reading.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = File::open(&path)?;
        let zip = ZipArchive::new(file)
            .with_context(|| format!("failed to open archive {}", path.display()))?;

        Ok(Self {
            id,
            path,
            zip: Some(zip),
            header: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and cache the `header.yml` entry.
    ///
    /// Any failure to locate, read, or parse the entry surfaces as
    /// HeaderNotFound. On success the reader's id is overwritten by the
    /// header's own `id`, permanently.
    pub fn load_header(&mut self) -> Result<Header> {
        if let Some(header) = &self.header {
            return Ok(header.clone());
        }

        let zip = self.zip.as_mut().ok_or_else(|| RetrodockError::HeaderNotFound {
            id: self.id.clone(),
        })?;

        let header = read_header_entry(zip).ok_or_else(|| RetrodockError::HeaderNotFound {
            id: self.id.clone(),
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

    /// Byte length of the archive on disk.
    pub fn size(&self) -> Result<u64> {
        Ok(std::fs::metadata(&self.path)?.len())
    }

    /// Copy the archive bytes verbatim to the destination.
    ///
    /// A destination without a file extension is treated as a directory and
    /// receives `<id>.zip`.
    pub fn pack(&mut self, output: Option<&Path>) -> Result<PathBuf> {
        if self.zip.is_none() {
            return Err(RetrodockError::CantPack {
                path: self.path.clone(),
                reason: "reader is closed".into(),
            });
        }

        let filename = format!("{}.{ARCHIVE_EXT}", self.id);
        let dst = output_file(output.unwrap_or_else(|| Path::new(".")), &filename);
        if dst == self.path {
            return Ok(dst);
        }

        tracing::info!("Pack to {}", dst.display());
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(&self.path, &dst)?;
        Ok(dst)
    }

    /// Extract all entries to the destination directory.
    ///
    /// If the destination already exists as a directory, extraction goes to
    /// `<output>/<id>` to avoid collision.
    pub fn unpack(&mut self, output: Option<&Path>) -> Result<PathBuf> {
        let mut dst = make_absolute(output.unwrap_or_else(|| Path::new(".")));
        if dst.is_dir() {
            dst = dst.join(&self.id);
        }

        let zip = self.zip.as_mut().ok_or_else(|| RetrodockError::CantUnpack {
            path: self.path.clone(),
            reason: "reader is closed".into(),
        })?;

        tracing::info!("Unpack to {}", dst.display());
        extract_all(zip, &dst)?;
        Ok(dst)
    }

    /// Drop the archive handle. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        self.zip = None;
        Ok(())
    }

    /// Close the archive, then delete the file. Missing files are fine.
    pub fn remove(&mut self) -> Result<()> {
        self.close()?;
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

fn read_header_entry(zip: &mut ZipArchive<File>) -> Option<Header> {
    let mut entry = zip.by_name(HEADER_FILE).ok()?;
    let mut text = String::new();
    entry.read_to_string(&mut text).ok()?;
    Header::parse(&text).ok()
}

fn extract_all(zip: &mut ZipArchive<File>, dst: &Path) -> Result<()> {
    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .context("failed to read archive entry")?;
        // Entries escaping the destination are skipped.
        let entry_path = match entry.enclosed_name() {
            Some(name) => dst.join(name),
            None => continue,
        };

        if entry.is_dir() {
            std::fs::create_dir_all(&entry_path)?;
        } else {
            if let Some(parent) = entry_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut file = File::create(&entry_path)?;
            io::copy(&mut entry, &mut file)?;
        }
    }

    Ok(())
}
