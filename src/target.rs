//! Target classification.
//!
//! A [`Target`] is a classified reference to an installable unit: a bare id
//! to resolve against configured sources, a local path, or a direct URL.
//! Classification precedence for a raw string is ID > URL > Path; relative
//! paths are made absolute against the current working directory.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Result, RetrodockError};
use crate::paths::make_absolute;
use crate::source::Source;

/// Check whether a string is a bare id.
///
/// True iff the value, once path separators and extension are stripped,
/// equals itself.
pub fn is_id(value: &str) -> bool {
    Path::new(value)
        .file_stem()
        .is_some_and(|stem| stem == std::ffi::OsStr::new(value))
}

/// Check whether a string is an `http(s)` URL.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TargetKind {
    Id,
    Url(Url),
    Path(PathBuf),
}

/// A classified reference to an installable unit.
///
/// The id is derived from the filename at classification time; once a unit's
/// header has been read, the header's own `id` takes over (tracked by the
/// reader, not here — targets are immutable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    id: String,
    kind: TargetKind,
    sources: Vec<String>,
    extra_sources: Vec<String>,
}

impl Target {
    /// Classify a raw string into a target (ID > URL > Path).
    pub fn parse(value: &str) -> Result<Self> {
        if is_id(value) {
            return Ok(Self {
                id: value.to_string(),
                kind: TargetKind::Id,
                sources: Vec::new(),
                extra_sources: Vec::new(),
            });
        }

        if is_valid_url(value) {
            let url = Url::parse(value).map_err(|err| RetrodockError::UnexpectedArgument {
                arg: "target".into(),
                reason: err.to_string(),
            })?;
            return Ok(Self::from_url(url));
        }

        Ok(Self::from_path(make_absolute(value)))
    }

    /// Build a target by combining a source with a relative value.
    ///
    /// URL sources yield URL targets (joined below the prefix); path sources
    /// yield path targets (joined onto the directory).
    pub fn combine(source: &Source, value: &str) -> Result<Self> {
        match source {
            Source::Url(base) => {
                let url = base.join(value).map_err(|err| {
                    RetrodockError::UnexpectedArgument {
                        arg: "target".into(),
                        reason: err.to_string(),
                    }
                })?;
                Ok(Self::from_url(url))
            }
            Source::Path(dir) => Ok(Self::from_path(dir.join(value))),
        }
    }

    fn from_url(url: Url) -> Self {
        let id = Path::new(url.path())
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let full = url.to_string();
        let prefix = match full.rfind('/') {
            Some(i) => full[..=i].to_string(),
            None => full,
        };
        Self {
            id,
            kind: TargetKind::Url(url),
            sources: Vec::new(),
            extra_sources: vec![prefix],
        }
    }

    fn from_path(path: PathBuf) -> Self {
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parent = path
            .parent()
            .map(|dir| dir.to_string_lossy().into_owned())
            .into_iter()
            .collect();
        Self {
            id,
            kind: TargetKind::Path(path),
            sources: Vec::new(),
            extra_sources: parent,
        }
    }

    /// Override the primary sources searched for this target.
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// Add extra sources searched after the primary list.
    pub fn with_extra_sources(mut self, extra_sources: Vec<String>) -> Self {
        self.extra_sources = extra_sources;
        self
    }

    /// Filename-derived id of the target.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The URL, for URL targets.
    pub fn url(&self) -> Option<&Url> {
        match &self.kind {
            TargetKind::Url(url) => Some(url),
            _ => None,
        }
    }

    /// The local path, for path targets.
    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            TargetKind::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Source overrides carried by the target itself.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Additional sources carried by the target itself.
    pub fn extra_sources(&self) -> &[String] {
        &self.extra_sources
    }

    pub fn is_id(&self) -> bool {
        matches!(self.kind, TargetKind::Id)
    }

    pub fn is_url(&self) -> bool {
        matches!(self.kind, TargetKind::Url(_))
    }

    pub fn is_path(&self) -> bool {
        matches!(self.kind, TargetKind::Path(_))
    }

    /// Whether resolving the target requires leaving the local disk.
    pub fn is_remote(&self) -> bool {
        !self.is_path()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TargetKind::Id => write!(f, "{}", self.id),
            TargetKind::Url(url) => write!(f, "{url}"),
            TargetKind::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
