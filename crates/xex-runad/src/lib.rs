//! In-place RUNAD to INITAD conversion for XEX files.
//!
//! This crate is the file-level half of the tool: it loads the executable,
//! hands the buffer to [`xex_format::rewrite_runad`], and atomically replaces
//! the original with the patched bytes.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = xex_runad::fix_runad(Path::new("game.xex"))?;
//! println!("rewrote header at offset {}", report.offset);
//! # Ok::<(), xex_runad::FixError>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod cli;
pub mod error;
pub mod persist;

pub use cli::Cli;
pub use error::FixError;
pub use xex_format::RewriteReport;

use std::path::Path;
use tracing::info;

/// Rewrite the last RUNAD segment of the file at `path` as INITAD.
///
/// The file is read whole, patched in memory, and replaced through
/// [`persist::write_atomic`]. Nothing is written unless the rewrite succeeds.
pub fn fix_runad(path: &Path) -> Result<RewriteReport, FixError> {
    let mut data = persist::read_file(path)?;
    let report = xex_format::rewrite_runad(&mut data)?;
    persist::write_atomic(path, &data)?;

    info!(
        path = %path.display(),
        offset = report.offset,
        runad_headers = report.runad_headers,
        "Converted RUNAD to INITAD"
    );
    Ok(report)
}
