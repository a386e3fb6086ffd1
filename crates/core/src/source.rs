// crates/core/src/source.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScanError};

/// Read the whole file into memory.
///
/// The handle is dropped before this returns, so scanning never holds the file open.
///
/// # Errors
///
/// Returns [`ScanError::FileAccess`] if the file cannot be opened or read, or is
/// not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let to_err = |source| ScanError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(to_err)?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(to_err)?;

    debug!(path = %path.display(), bytes = text.len(), "source loaded");
    Ok(text)
}
