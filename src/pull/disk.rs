//! Local materialization of a unit.

use crate::error::{Result, RetrodockError};
use crate::platform::InstallDirs;
use crate::reader::{open, OpenOptions};
use crate::target::Target;

use super::options::{PullOptions, PullResult, Pulled};

/// Install a unit from a local path.
///
/// Opens the target, validates its header (`type` and `id` are required),
/// and routes it to the builtin directory matching its type — or to the
/// caller's output. With `unpack` the unit's files are extracted instead of
/// installing the archive.
pub fn pull_from_disk(
    dirs: &InstallDirs,
    target: &Target,
    options: &PullOptions,
) -> Result<Pulled> {
    let path = target
        .path()
        .ok_or_else(|| RetrodockError::UnexpectedArgument {
            arg: "target".into(),
            reason: "not a local path".into(),
        })?
        .to_path_buf();

    let (id, boot) = open(dirs, OpenOptions::new(&path.to_string_lossy()), |reader| {
        let header = reader.load_header()?;
        let unit_type = header.unit_type.ok_or_else(|| RetrodockError::InvalidHeader {
            message: "field type not defined".into(),
        })?;
        if header.id.is_none() {
            return Err(RetrodockError::InvalidHeader {
                message: "field id not defined".into(),
            });
        }

        let builtin_dir = unit_type.builtin_dir(dirs);

        if options.unpack {
            reader.unpack(options.output.as_deref())?;
        } else {
            let output = options
                .output
                .clone()
                .unwrap_or_else(|| builtin_dir.to_path_buf());
            reader.pack(Some(&output))?;
        }

        Ok((reader.id().to_string(), header.boot))
    })?;

    Ok(Pulled {
        result: PullResult::Downloaded,
        id,
        boot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn installs_game_into_games_dir_under_header_id() {
        let (temp, dirs) = test_dirs();
        let archive = temp.path().join("renamed.zip");
        write_archive(&archive, "type: game\nid: pong\n");
        let target = Target::parse(&archive.to_string_lossy()).unwrap();

        let pulled = pull_from_disk(&dirs, &target, &PullOptions::default()).unwrap();

        assert_eq!(pulled.result, PullResult::Downloaded);
        // Installed under the header's id, not the filename.
        assert_eq!(pulled.id, "pong");
        assert!(dirs.games.join("pong.zip").is_file());
    }

    #[test]
    fn pulled_outcome_carries_declared_boot() {
        let (temp, dirs) = test_dirs();
        let archive = temp.path().join("pong.zip");
        write_archive(&archive, "type: game\nid: pong\nboot: pixel\n");
        let target = Target::parse(&archive.to_string_lossy()).unwrap();

        let pulled = pull_from_disk(&dirs, &target, &PullOptions::default()).unwrap();
        assert_eq!(pulled.boot.as_deref(), Some("pixel"));
    }

    #[test]
    fn installs_boot_into_boots_dir() {
        let (temp, dirs) = test_dirs();
        let archive = temp.path().join("pixel.zip");
        write_archive(&archive, "type: boot\nid: pixel\n");
        let target = Target::parse(&archive.to_string_lossy()).unwrap();

        pull_from_disk(&dirs, &target, &PullOptions::default()).unwrap();
        assert!(dirs.boots.join("pixel.zip").is_file());
        assert!(!dirs.games.join("pixel.zip").exists());
    }

    #[test]
    fn custom_output_bypasses_builtin_dir() {
        let (temp, dirs) = test_dirs();
        let archive = temp.path().join("pong.zip");
        write_archive(&archive, "type: game\nid: pong\n");
        let out = temp.path().join("custom");
        std::fs::create_dir_all(&out).unwrap();
        let target = Target::parse(&archive.to_string_lossy()).unwrap();

        let options = PullOptions {
            output: Some(out.clone()),
            ..Default::default()
        };
        pull_from_disk(&dirs, &target, &options).unwrap();

        assert!(out.join("pong.zip").is_file());
        assert!(!dirs.games.join("pong.zip").exists());
    }

    #[test]
    fn unpack_extracts_instead_of_installing() {
        let (temp, dirs) = test_dirs();
        let archive = temp.path().join("pong.zip");
        write_archive(&archive, "type: game\nid: pong\n");
        let out = temp.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let target = Target::parse(&archive.to_string_lossy()).unwrap();

        let options = PullOptions {
            unpack: true,
            output: Some(out.clone()),
            ..Default::default()
        };
        pull_from_disk(&dirs, &target, &options).unwrap();

        assert!(out.join("pong/header.yml").is_file());
        assert!(!dirs.games.join("pong.zip").exists());
    }

    #[test]
    fn missing_type_is_invalid_header() {
        let (temp, dirs) = test_dirs();
        let archive = temp.path().join("pong.zip");
        write_archive(&archive, "id: pong\n");
        let target = Target::parse(&archive.to_string_lossy()).unwrap();

        let err = pull_from_disk(&dirs, &target, &PullOptions::default()).unwrap_err();
        assert!(matches!(err, RetrodockError::InvalidHeader { .. }));
    }

    #[test]
    fn missing_id_is_invalid_header() {
        let (temp, dirs) = test_dirs();
        let archive = temp.path().join("pong.zip");
        write_archive(&archive, "type: game\n");
        let target = Target::parse(&archive.to_string_lossy()).unwrap();

        let err = pull_from_disk(&dirs, &target, &PullOptions::default()).unwrap_err();
        assert!(matches!(err, RetrodockError::InvalidHeader { .. }));
    }

    #[test]
    fn missing_path_is_not_found() {
        let (temp, dirs) = test_dirs();
        let target = Target::parse(&temp.path().join("nope.zip").to_string_lossy()).unwrap();
        let err = pull_from_disk(&dirs, &target, &PullOptions::default()).unwrap_err();
        assert!(matches!(err, RetrodockError::NotFound { .. }));
    }
}
