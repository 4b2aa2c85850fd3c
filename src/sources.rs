//! Ordered enumeration of configured sources.
//!
//! [`get_sources`] yields Source values in deterministic priority: explicit
//! overrides first (bypassing the sources file entirely), otherwise the
//! sources file line by line, then any extra sources. Each call produces an
//! independent cursor over the file, so the sequence is restartable across
//! multiple pull attempts.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::Result;
use crate::platform::InstallDirs;
use crate::source::Source;

/// Overriding or extending the configured sources.
#[derive(Debug, Clone, Default)]
pub struct SourcesOptions {
    /// Replaces the sources file when non-empty.
    pub sources: Vec<String>,
    /// Yielded after the primary list, additively.
    pub extra_sources: Vec<String>,
}

/// Lazy iterator over configured sources.
#[derive(Debug)]
pub struct Sources {
    primary: Primary,
    extras: std::vec::IntoIter<String>,
}

#[derive(Debug)]
enum Primary {
    Explicit(std::vec::IntoIter<String>),
    File(Lines<BufReader<File>>),
}

/// Enumerate sources from overrides, the sources file, and extras.
pub fn get_sources(dirs: &InstallDirs, options: &SourcesOptions) -> Result<Sources> {
    let primary = if options.sources.is_empty() {
        Primary::File(BufReader::new(File::open(&dirs.sources_list)?).lines())
    } else {
        Primary::Explicit(options.sources.clone().into_iter())
    };

    Ok(Sources {
        primary,
        extras: options.extra_sources.clone().into_iter(),
    })
}

/// Extract a source value from one line of the sources file.
///
/// A `#` introduces a trailing comment. Only http(s) URLs (normalized to a
/// trailing `/`) and absolute paths qualify; everything else is dropped
/// without being reported as a configuration error.
fn parse_source_line(line: &str) -> Option<String> {
    let line = match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    };
    let line = line.trim();

    if line.starts_with("http:") || line.starts_with("https:") {
        let mut source = line.to_string();
        if !source.ends_with('/') {
            source.push('/');
        }
        return Some(source);
    }

    if Path::new(line).is_absolute() {
        return Some(line.to_string());
    }

    None
}

impl Sources {
    fn next_raw(&mut self) -> Option<String> {
        match &mut self.primary {
            Primary::Explicit(values) => {
                if let Some(value) = values.next() {
                    return Some(value);
                }
            }
            Primary::File(lines) => {
                for line in lines {
                    let Ok(line) = line else { continue };
                    if let Some(value) = parse_source_line(&line) {
                        return Some(value);
                    }
                }
            }
        }

        self.extras.next()
    }
}

impl Iterator for Sources {
    type Item = Source;

    fn next(&mut self) -> Option<Source> {
        loop {
            let raw = self.next_raw()?;
            match Source::parse(&raw) {
                Ok(source) => return Some(source),
                Err(err) => tracing::warn!("Skipping source {raw}: {err}"),
            }
        }
    }
}
