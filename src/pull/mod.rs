//! Acquisition of units from disk, URLs, or configured sources.
//!
//! [`pull`] is the public entry point: it classifies a raw string into a
//! target and dispatches into [`pull_from_sources`]. The launcher-facing
//! "ensure a game and its boot runtime are present" workflow calls it twice,
//! once per unit and once for the declared boot id ([`pull_boot`]).

mod disk;
mod options;
mod sources;
mod url;

pub use disk::pull_from_disk;
pub use options::{PullOptions, PullResult, Pulled};
pub use sources::pull_from_sources;
pub use url::pull_from_url;

use crate::error::{Result, RetrodockError};
use crate::header::UnitType;
use crate::platform::InstallDirs;
use crate::reader::{open, remove_installed, OpenOptions};
use crate::target::Target;

/// Download a game, boot, or agent from any known source.
///
/// The unit is installed into the builtin directory matching its header
/// type, or to a custom output when the option is set. The returned
/// [`Pulled`] carries the canonical id from the unit's header, which may
/// differ from the filename the target was addressed by.
pub fn pull(dirs: &InstallDirs, target: &str, options: &PullOptions) -> Result<Pulled> {
    let target = Target::parse(target)?;
    let pulled = pull_from_sources(dirs, &target, options)?;
    if pulled.result == PullResult::Downloaded {
        tracing::info!("Installed {}", pulled.id);
    }

    Ok(pulled)
}

/// Download a boot runtime and verify it actually is one.
///
/// Errors are reported against the `boot` argument. When the boot landed in
/// a builtin directory, its header type is checked and a mismatch surfaces
/// as NotAUnit; a freshly downloaded mismatch is uninstalled again so the
/// failed pull leaves nothing behind.
pub fn pull_boot(dirs: &InstallDirs, boot: &str, options: &PullOptions) -> Result<Pulled> {
    let pulled = pull(dirs, boot, options).map_err(|err| match err {
        RetrodockError::NotFound { what } => RetrodockError::NotFound {
            what: format!("boot {what}"),
        },
        RetrodockError::UnexpectedArgument { reason, .. } => {
            RetrodockError::UnexpectedArgument {
                arg: "boot".into(),
                reason,
            }
        }
        other => other,
    })?;

    // Verification only applies to builtin installs.
    if options.output.is_none() && !options.unpack {
        let verified = open(
            dirs,
            OpenOptions::new(&pulled.id).builtin_dirs_only(),
            |reader| match reader.load_header()?.unit_type {
                Some(UnitType::Boot) => Ok(()),
                _ => Err(RetrodockError::NotAUnit {
                    id: reader.id().to_string(),
                    expected: "boot".into(),
                }),
            },
        );

        if let Err(err) = verified {
            // Don't keep a unit this pull just installed.
            if pulled.result == PullResult::Downloaded {
                remove_installed(dirs, &pulled.id)?;
            }
            return Err(err);
        }
    }

    Ok(pulled)
}
