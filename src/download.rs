//! HTTP downloads to scoped temporary files.

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context};
use url::Url;

use crate::error::{Result, RetrodockError};

/// Download a file and hand its temporary path to `callback`.
///
/// The file keeps the extension of the URL path and lives in a scoped
/// temporary location, deleted after the callback completes regardless of
/// outcome. A 404 maps to NotFound; any other non-200 status is a generic
/// transport failure. `timeout` bounds the whole request.
pub fn download_file<T, F>(url: &Url, timeout: Option<Duration>, callback: F) -> Result<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    let mut builder = reqwest::blocking::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().context("failed to create HTTP client")?;

    let mut response = client
        .get(url.as_str())
        .send()
        .with_context(|| format!("failed to fetch {url}"))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(RetrodockError::not_found(url.as_str()));
    }
    if !response.status().is_success() {
        return Err(anyhow!("HTTP {} fetching {}", response.status(), url).into());
    }

    let suffix = Path::new(url.path())
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let mut temp = tempfile::Builder::new()
        .prefix("retrodock-")
        .suffix(&suffix)
        .tempfile()?;

    io::copy(&mut response, temp.as_file_mut())
        .context("failed to write download to disk")?;

    callback(temp.path())
}
