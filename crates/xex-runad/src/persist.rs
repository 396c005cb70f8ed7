//! Whole-file load and atomic replace.
//!
//! The new contents go to `<path>.tmp` next to the original, are synced, and
//! are then renamed over the original. The rename is the only step that
//! touches the original file.

use crate::error::FixError;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Path of the temporary file used when replacing `path`.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Read the whole file at `path`.
pub fn read_file(path: &Path) -> Result<Vec<u8>, FixError> {
    let data = fs::read(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), size = data.len(), "Read input file");
    Ok(data)
}

/// Replace the contents of `path` with `data` atomically.
///
/// On failure the original file is left as it was and the temporary file
/// is removed if it was created.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), FixError> {
    let temp = temp_path(path);

    if let Err(source) = write_synced(&temp, data) {
        discard(&temp);
        return Err(FixError::WriteTemp { path: temp, source });
    }
    debug!(path = %temp.display(), size = data.len(), "Wrote temporary file");

    if let Err(source) = fs::rename(&temp, path) {
        discard(&temp);
        return Err(FixError::Replace {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!(path = %path.display(), "Replaced original file");
    Ok(())
}

fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(data)?;
    file.flush()?;
    file.sync_all()
}

fn discard(temp: &Path) {
    if temp.is_file()
        && let Err(e) = fs::remove_file(temp)
    {
        warn!(path = %temp.display(), error = %e, "Failed to remove temporary file");
    }
}
