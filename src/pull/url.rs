//! Network acquisition of a unit.

use std::path::Path;

use crate::download::download_file;
use crate::error::{Result, RetrodockError};
use crate::platform::{InstallDirs, ARCHIVE_EXT};
use crate::target::Target;

use super::disk::pull_from_disk;
use super::options::{PullOptions, Pulled};

/// Install a unit from a direct URL.
///
/// Only archive URLs are accepted; the check happens before any network
/// access. The body lands in a scoped temporary file which is then pulled
/// from disk like any local archive and deleted afterwards.
pub fn pull_from_url(
    dirs: &InstallDirs,
    target: &Target,
    options: &PullOptions,
) -> Result<Pulled> {
    let url = target
        .url()
        .ok_or_else(|| RetrodockError::UnexpectedArgument {
            arg: "target".into(),
            reason: "not a URL".into(),
        })?;

    let is_archive = Path::new(url.path())
        .extension()
        .is_some_and(|ext| ext == ARCHIVE_EXT);
    if !is_archive {
        return Err(RetrodockError::UnexpectedArgument {
            arg: "target".into(),
            reason: format!("not a {ARCHIVE_EXT} archive URL"),
        });
    }

    download_file(url, options.timeout, |temp_path| {
        let temp_target = Target::parse(&temp_path.to_string_lossy())?;
        pull_from_disk(dirs, &temp_target, options)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn test_dirs() -> (TempDir, InstallDirs) {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::new(temp.path());
        dirs.create().unwrap();
        (temp, dirs)
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
    fn downloads_and_installs_archive() {
        let (_temp, dirs) = test_dirs();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/pong.zip");
            then.status(200).body(archive_bytes("type: game\nid: pong\n"));
        });

        let target = Target::parse(&server.url("/releases/pong.zip")).unwrap();
        let pulled = pull_from_url(&dirs, &target, &PullOptions::default()).unwrap();

        assert_eq!(pulled.result, crate::pull::PullResult::Downloaded);
        assert_eq!(pulled.id, "pong");
        assert!(dirs.games.join("pong.zip").is_file());
    }

    #[test]
    fn non_archive_url_is_rejected_before_any_request() {
        let (_temp, dirs) = test_dirs();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/releases/pong.txt");
            then.status(200).body("text");
        });

        let target = Target::parse(&server.url("/releases/pong.txt")).unwrap();
        let err = pull_from_url(&dirs, &target, &PullOptions::default()).unwrap_err();

        assert!(matches!(err, RetrodockError::UnexpectedArgument { .. }));
        mock.assert_calls(0);
    }

    #[test]
    fn missing_archive_is_not_found() {
        let (_temp, dirs) = test_dirs();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/missing.zip");
            then.status(404).body("Not Found");
        });

        let target = Target::parse(&server.url("/releases/missing.zip")).unwrap();
        let err = pull_from_url(&dirs, &target, &PullOptions::default()).unwrap_err();
        assert!(matches!(err, RetrodockError::NotFound { .. }));
    }

    #[test]
    fn failed_download_leaves_no_partial_install() {
        let (_temp, dirs) = test_dirs();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/pong.zip");
            then.status(200).body("not a zip archive");
        });

        let target = Target::parse(&server.url("/releases/pong.zip")).unwrap();
        assert!(pull_from_url(&dirs, &target, &PullOptions::default()).is_err());
        assert!(!dirs.games.join("pong.zip").exists());
    }
}
