//! The `pull` command.
//!
//! Downloads and installs a unit named by id, URL, or local path.

use std::time::Duration;

use crate::cli::args::PullArgs;
use crate::error::Result;
use crate::platform::InstallDirs;
use crate::pull::{pull, pull_boot, PullOptions, PullResult};
use crate::reader::{open, OpenOptions};

use super::dispatcher::{Command, CommandResult};

/// The pull command implementation.
pub struct PullCommand<'a> {
    dirs: &'a InstallDirs,
    args: PullArgs,
}

impl<'a> PullCommand<'a> {
    /// Create a new pull command.
    pub fn new(dirs: &'a InstallDirs, args: PullArgs) -> Self {
        Self { dirs, args }
    }

    fn options(&self) -> PullOptions {
        PullOptions {
            force: self.args.force,
            unpack: self.args.unpack,
            output: self.args.output.clone(),
            timeout: self.args.timeout.map(Duration::from_secs),
            sources: self.args.sources.clone(),
            extra_sources: self.args.extra_sources.clone(),
        }
    }
}

impl Command for PullCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        let options = self.options();
        let pulled = pull(self.dirs, &self.args.target, &options)?;

        match pulled.result {
            PullResult::Downloaded => println!("Installed {}", pulled.id),
            PullResult::AlreadyDownloaded => println!("{} is already installed", pulled.id),
        }

        // Installing the declared boot only makes sense when the unit itself
        // landed in a builtin directory.
        if self.args.boot && !self.args.unpack && self.args.output.is_none() {
            let boot = match pulled.boot.clone() {
                Some(boot) => Some(boot),
                // An already-installed unit skipped the header read; consult
                // the installed copy instead.
                None => open(
                    self.dirs,
                    OpenOptions::new(&pulled.id).builtin_dirs_only(),
                    |reader| Ok(reader.load_header()?.boot),
                )?,
            };

            match boot {
                Some(boot) => {
                    let boot_options = PullOptions {
                        force: self.args.force,
                        timeout: options.timeout,
                        sources: options.sources.clone(),
                        extra_sources: options.extra_sources.clone(),
                        ..Default::default()
                    };
                    let pulled_boot = pull_boot(self.dirs, &boot, &boot_options)?;
                    if pulled_boot.result == PullResult::Downloaded {
                        println!("Installed boot {}", pulled_boot.id);
                    }
                }
                None => tracing::debug!("{} declares no boot", pulled.id),
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn test_dirs() -> (TempDir, InstallDirs) {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::new(temp.path());
        dirs.create().unwrap();
        (temp, dirs)
    }

    fn write_archive(path: &Path, header: &str) {
        let file = std::fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        writer.start_file("header.yml", options).unwrap();
        writer.write_all(header.as_bytes()).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn pull_command_installs_local_archive() {
        let (temp, dirs) = test_dirs();
        let archive = temp.path().join("pong.zip");
        write_archive(&archive, "type: game\nid: pong\n");

        let args = PullArgs {
            target: archive.to_string_lossy().into_owned(),
            ..Default::default()
        };
        let result = PullCommand::new(&dirs, args).execute().unwrap();

        assert!(result.success);
        assert!(dirs.games.join("pong.zip").is_file());
    }

    #[test]
    fn boot_flag_pulls_declared_boot() {
        let (temp, dirs) = test_dirs();
        let src = temp.path().join("mirror");
        std::fs::create_dir_all(&src).unwrap();
        write_archive(
            &src.join("pong.zip"),
            "type: game\nid: pong\nboot: pixel\n",
        );
        write_archive(&src.join("pixel.zip"), "type: boot\nid: pixel\n");

        let args = PullArgs {
            target: "pong".into(),
            boot: true,
            sources: vec![src.to_string_lossy().into_owned()],
            ..Default::default()
        };
        PullCommand::new(&dirs, args).execute().unwrap();

        assert!(dirs.games.join("pong.zip").is_file());
        assert!(dirs.boots.join("pixel.zip").is_file());
    }

    fn archive_bytes(header: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        writer.start_file("header.yml", options).unwrap();
        writer.write_all(header.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn boot_flag_works_for_url_targets() {
        let (_temp, dirs) = test_dirs();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/pong.zip");
            then.status(200)
                .body(archive_bytes("type: game\nid: pong\nboot: pixel\n"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/releases/pixel.zip");
            then.status(200).body(archive_bytes("type: boot\nid: pixel\n"));
        });

        let args = PullArgs {
            target: server.url("/releases/pong.zip"),
            boot: true,
            sources: vec![server.url("/releases/")],
            ..Default::default()
        };
        let result = PullCommand::new(&dirs, args).execute().unwrap();

        assert!(result.success);
        assert!(dirs.games.join("pong.zip").is_file());
        assert!(dirs.boots.join("pixel.zip").is_file());
    }

    #[test]
    fn boot_flag_resolves_boot_of_already_installed_unit() {
        let (temp, dirs) = test_dirs();
        write_archive(
            &dirs.games.join("pong.zip"),
            "type: game\nid: pong\nboot: pixel\n",
        );
        let src = temp.path().join("mirror");
        std::fs::create_dir_all(&src).unwrap();
        write_archive(&src.join("pixel.zip"), "type: boot\nid: pixel\n");

        let args = PullArgs {
            target: "pong".into(),
            boot: true,
            sources: vec![src.to_string_lossy().into_owned()],
            ..Default::default()
        };
        PullCommand::new(&dirs, args).execute().unwrap();

        assert!(dirs.boots.join("pixel.zip").is_file());
    }

    #[test]
    fn timeout_is_threaded_into_options() {
        let (_temp, dirs) = test_dirs();
        let args = PullArgs {
            target: "pong".into(),
            timeout: Some(30),
            ..Default::default()
        };
        let options = PullCommand::new(&dirs, args).options();
        assert_eq!(options.timeout, Some(Duration::from_secs(30)));
    }
}
