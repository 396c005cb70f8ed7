//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Arguments of the `fix-runad` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fix-runad",
    about = "Convert RUNAD to INITAD in an XEX file",
    version
)]
pub struct Cli {
    /// Path to XEX file to modify in place
    pub xex: PathBuf,
}

impl Cli {
    /// Parse arguments from the process command line.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }
}
