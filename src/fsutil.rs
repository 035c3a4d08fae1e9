use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Normalize an output directory: default to the working directory and make absolute.
#[must_use]
pub fn normalize_output_dir(dir: Option<&str>) -> PathBuf {
    let raw = match dir {
        Some(s) if !s.trim().is_empty() => PathBuf::from(s),
        _ => return std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    if raw.is_absolute() {
        raw
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(raw)
    }
}

/// Create a fixture file, refusing to clobber one that already exists.
///
/// # Errors
/// Returns an error if the file already exists or cannot be created.
pub fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
