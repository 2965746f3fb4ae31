//! File helpers for rewriting source files.

use std::{fs, path::Path};

use thiserror::Error;

use crate::{dispatch::AutoFormatter, host::HostError, process::format_text};

/// Failure while rewriting a file.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Format the file at `path` and return the new contents.
///
/// # Errors
/// Returns an error if reading the file or formatting it fails.
pub fn format_file(path: &Path, formatter: &AutoFormatter) -> Result<String, RewriteError> {
    let text = fs::read_to_string(path)?;
    Ok(format_text(&text, &path.to_string_lossy(), formatter)?)
}

/// Rewrite a file in place with wrapped comments and docstrings.
///
/// The file is only written when its contents change.
///
/// # Errors
/// Returns an error if reading, formatting, or writing the file fails.
pub fn rewrite(path: &Path, formatter: &AutoFormatter) -> Result<bool, RewriteError> {
    let text = fs::read_to_string(path)?;
    let fixed = format_text(&text, &path.to_string_lossy(), formatter)?;
    if fixed == text {
        return Ok(false);
    }
    fs::write(path, fixed)?;
    Ok(true)
}
