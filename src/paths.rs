//! Path normalization helpers shared by the reader and pull operations.

use std::path::{Path, PathBuf};

/// Make a path absolute by joining it to the current working directory.
///
/// Already-absolute paths are returned unchanged.
pub fn make_absolute(value: impl AsRef<Path>) -> PathBuf {
    let value = value.as_ref();
    if value.is_absolute() {
        return value.to_path_buf();
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(value)
}

/// Make sure an output path points to a file.
///
/// The path is returned unchanged (made absolute) when it already carries a
/// file extension. A path without extension is treated as a directory and
/// `filename` is appended, so user-supplied destinations always name a file.
pub fn output_file(output: impl AsRef<Path>, filename: &str) -> PathBuf {
    let output = make_absolute(output);
    if output.extension().is_none() {
        return output.join(filename);
    }

    output
}
