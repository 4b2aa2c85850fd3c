//! Ordered source fallback for bare ids.

use crate::error::{Result, RetrodockError};
use crate::platform::{InstallDirs, ARCHIVE_EXT};
use crate::reader::is_installed;
use crate::sources::{get_sources, SourcesOptions};
use crate::target::Target;

use super::disk::pull_from_disk;
use super::options::{PullOptions, PullResult, Pulled};
use super::url::pull_from_url;

/// Pull a target, resolving bare ids against the configured sources.
///
/// Fast path: an id already installed under its builtin directory returns
/// AlreadyDownloaded with no I/O, unless forced or a custom output/unpack
/// was requested. Local paths and direct URLs dispatch straight to the
/// matching acquisition. Bare ids walk the sources in order: each candidate
/// failure is logged and iteration continues; the first success wins and
/// exhaustion surfaces NotFound.
pub fn pull_from_sources(
    dirs: &InstallDirs,
    target: &Target,
    options: &PullOptions,
) -> Result<Pulled> {
    // The download is always forced when unpack is set or output is custom.
    if !options.unpack
        && options.output.is_none()
        && !options.force
        && is_installed(dirs, target.id())
    {
        tracing::debug!("{} already installed", target.id());
        return Ok(Pulled {
            result: PullResult::AlreadyDownloaded,
            id: target.id().to_string(),
            boot: None,
        });
    }

    tracing::info!("Pulling {}...", target.id());

    if !target.is_remote() {
        return pull_from_disk(dirs, target, options);
    }

    if target.is_url() {
        return pull_from_url(dirs, target, options);
    }

    // Bare id: walk the sources, one candidate at a time.
    let sources_options = SourcesOptions {
        sources: if target.sources().is_empty() {
            options.sources.clone()
        } else {
            target.sources().to_vec()
        },
        extra_sources: if target.extra_sources().is_empty() {
            options.extra_sources.clone()
        } else {
            target.extra_sources().to_vec()
        },
    };
    let archive_name = format!("{}.{ARCHIVE_EXT}", target.id());

    for source in get_sources(dirs, &sources_options)? {
        let candidate = match Target::combine(&source, &archive_name) {
            Ok(candidate) => candidate,
            Err(err) => {
                tracing::debug!("Skipping source {source}: {err}");
                continue;
            }
        };

        tracing::info!("Source {candidate}");
        let attempt = if candidate.is_url() {
            pull_from_url(dirs, &candidate, options)
        } else {
            pull_from_disk(dirs, &candidate, options)
        };

        match attempt {
            Ok(pulled) => return Ok(pulled),
            Err(err) => tracing::debug!("Source {source} failed: {err}"),
        }
    }

    Err(RetrodockError::not_found(target.id()))
}
