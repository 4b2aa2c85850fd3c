//! Repository sources.
//!
//! A [`Source`] is a normalized repository root searched for id-named
//! archives: either a local directory or a URL prefix. Sources are immutable
//! values, equal by value.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Result, RetrodockError};
use crate::paths::make_absolute;
use crate::target::is_valid_url;

/// A repository root: local directory or URL prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Absolute local directory.
    Path(PathBuf),
    /// URL prefix, normalized to end with `/` so ids join below it.
    Url(Url),
}

impl Source {
    /// Parse a raw source string.
    ///
    /// `http(s)` values become URL sources; anything else is taken as a
    /// local directory, made absolute against the current working
    /// directory. A path carrying a file extension is rejected: sources are
    /// repository roots, not files.
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_url(value) {
            let mut url = Url::parse(value).map_err(|err| {
                RetrodockError::UnexpectedArgument {
                    arg: "source".into(),
                    reason: err.to_string(),
                }
            })?;
            if !url.path().ends_with('/') {
                url.set_path(&format!("{}/", url.path()));
            }
            return Ok(Source::Url(url));
        }

        let path = make_absolute(value);
        if path.extension().is_some() {
            return Err(RetrodockError::UnexpectedArgument {
                arg: "source".into(),
                reason: "must not be a file".into(),
            });
        }

        Ok(Source::Path(path))
    }

    /// The URL prefix, when this is a URL source.
    pub fn url(&self) -> Option<&Url> {
        match self {
            Source::Url(url) => Some(url),
            Source::Path(_) => None,
        }
    }

    /// The local directory, when this is a path source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::Path(path) => Some(path),
            Source::Url(_) => None,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, Source::Url(_))
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Source::Path(_))
    }

    pub fn is_remote(&self) -> bool {
        self.is_url()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{url}"),
        }
    }
}
