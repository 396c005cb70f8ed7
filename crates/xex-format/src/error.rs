//! Error types for XEX segment parsing and rewriting

use thiserror::Error;

/// Errors that can occur when walking or patching an XEX segment stream
#[derive(Debug, Error)]
pub enum XexError {
    /// Buffer cannot even hold the leading marker
    #[error("File too small for XEX: {0} bytes")]
    TooSmall(usize),

    /// First 16-bit word is not `0xFFFF`
    #[error("Missing XEX marker 0xFFFF at start (found {0:#06X})")]
    MissingMarker(u16),

    /// Segment header whose end address precedes its start address
    #[error("Invalid segment length at offset {offset:#X}: start {start:#06X}, end {end:#06X}")]
    InvalidSegmentLength {
        /// Byte offset of the header in the buffer
        offset: usize,
        /// Declared start address
        start: u16,
        /// Declared end address
        end: u16,
    },

    /// Access past the end of the buffer
    #[error("Access of {len} bytes at offset {offset:#X} exceeds buffer of {available} bytes")]
    OutOfBounds {
        /// Requested byte offset
        offset: usize,
        /// Requested byte count
        len: usize,
        /// Buffer length
        available: usize,
    },

    /// No segment header carries the RUNAD address pair
    #[error("No RUNAD segment found")]
    RunadNotFound,

    /// Binary read/write error
    #[error("Binary parsing error: {0}")]
    BinRead(String),
}

impl From<binrw::Error> for XexError {
    fn from(e: binrw::Error) -> Self {
        Self::BinRead(e.to_string())
    }
}

/// Result type alias for XEX operations
pub type Result<T> = std::result::Result<T, XexError>;
