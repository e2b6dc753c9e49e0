//! File name and file system helpers

use std::fs;
use std::path::Path;

/// Text after the last `.`, or `""` when there is none.
pub fn extension(filename: &str) -> &str {
    filename
        .rfind('.')
        .map(|idx| &filename[idx + 1..])
        .unwrap_or("")
}

/// Text before the last `.`, or the whole name when there is none.
pub fn name_without_extension(filename: &str) -> &str {
    filename
        .rfind('.')
        .map(|idx| &filename[..idx])
        .unwrap_or(filename)
}

pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

pub fn is_directory(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// `true` for missing or zero-length files.
pub fn is_empty(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}
