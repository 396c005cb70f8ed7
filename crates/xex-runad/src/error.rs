//! Error types for the file-level RUNAD rewrite.

use std::path::PathBuf;
use thiserror::Error;
use xex_format::XexError;

/// Errors raised while patching an XEX file on disk.
///
/// I/O variants carry the path that failed; the underlying error is exposed
/// through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum FixError {
    /// Reading the input file failed
    #[error("Failed to read {path}")]
    Read {
        /// Input file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Creating or writing the temporary file failed
    #[error("Failed to write temporary file {path}")]
    WriteTemp {
        /// Temporary file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Renaming the temporary file over the original failed
    #[error("Failed to replace {path}")]
    Replace {
        /// Original file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed container or no RUNAD segment
    #[error(transparent)]
    Format(#[from] XexError),
}
