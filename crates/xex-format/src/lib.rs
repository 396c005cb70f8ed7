//! Segment stream parsing and RUNAD rewriting for Atari 8-bit XEX executables
//!
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
//! An XEX file is a `0xFFFF` signature followed by segments. Each segment is
//! a little-endian `(start, end)` header and the `end - start + 1` bytes the
//! loader copies to that address range. A segment that loads `0x02E0..=0x02E1`
//! (RUNAD) tells the loader where to jump once loading finishes; one that
//! loads `0x02E2..=0x02E3` (INITAD) is called immediately and loading then
//! continues.
//!
//! This crate walks the segment stream and turns the last RUNAD header into
//! an INITAD header, leaving every other byte as it was.
//!
//! # Usage
//!
//! ```
//! use xex_format::{INITAD, RUNAD, find_runad_headers, rewrite_runad};
//!
//! let mut data = vec![0xFF, 0xFF, 0xE0, 0x02, 0xE1, 0x02, 0x00, 0x20];
//! assert_eq!(find_runad_headers(&data)?, vec![2]);
//!
//! let report = rewrite_runad(&mut data)?;
//! assert_eq!(report.offset, 2);
//! assert_eq!(data, [0xFF, 0xFF, 0xE2, 0x02, 0xE3, 0x02, 0x00, 0x20]);
//! assert_ne!(RUNAD, INITAD);
//! # Ok::<(), xex_format::XexError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod header;
pub mod runad;
pub mod segment;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main types
pub use error::{Result, XexError};
pub use header::{
    INITAD, INITAD_END, INITAD_START, RUNAD, RUNAD_END, RUNAD_START, SegmentHeader, XEX_MARKER,
};
pub use runad::{RewriteReport, find_runad_headers, rewrite_runad};
pub use segment::{Segment, Segments, segments};
