use crate::reporter;
use std::io::{self, Write};
use std::path::Path;

/// Report whether `path` exists. A missing file is an ordinary outcome.
pub fn check_exists<W: Write>(writer: &mut W, path: &Path, label: &str) -> io::Result<bool> {
    let exists = path.exists();
    reporter::print_exists(writer, exists, label, path)?;
    Ok(exists)
}

/// Like [`check_exists`], but absence is only a warning.
pub fn check_optional<W: Write>(writer: &mut W, path: &Path, label: &str) -> io::Result<bool> {
    let exists = path.exists();
    if exists {
        reporter::print_exists(writer, true, label, path)?;
    } else {
        reporter::print_optional_missing(writer, label, path)?;
    }
    Ok(exists)
}
