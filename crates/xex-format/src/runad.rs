//! Locating the RUNAD segment and rewriting it as INITAD
//!
//! A file may declare the run address more than once; the loader honours
//! the last declaration, so only the last matching header is rewritten.
//! The rewrite touches the 4 header bytes and nothing else. The payload
//! keeps its position and length.

use crate::error::{Result, XexError};
use crate::header::INITAD;
use crate::segment::segments;
use tracing::{debug, info};

/// Outcome of a successful rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteReport {
    /// Byte offset of the header that now holds the INITAD pair
    pub offset: usize,
    /// Number of RUNAD headers found before the rewrite
    pub runad_headers: usize,
}

/// Offsets of every RUNAD segment header in file order
///
/// Fails on a malformed stream. An empty result is not an error here.
pub fn find_runad_headers(data: &[u8]) -> Result<Vec<usize>> {
    let mut matches = Vec::new();
    for segment in segments(data)? {
        let segment = segment?;
        if segment.header.is_runad() {
            matches.push(segment.offset);
        }
    }
    Ok(matches)
}

/// Rewrite the last RUNAD header in `data` as INITAD
///
/// On error `data` is left unmodified.
pub fn rewrite_runad(data: &mut [u8]) -> Result<RewriteReport> {
    let matches = find_runad_headers(data)?;
    let Some(&offset) = matches.last() else {
        return Err(XexError::RunadNotFound);
    };

    if matches.len() > 1 {
        debug!(
            count = matches.len(),
            ?matches,
            "Multiple RUNAD segments, rewriting the last one"
        );
    }

    INITAD.write_at(data, offset)?;
    info!(offset, "Rewrote RUNAD segment header as INITAD");

    Ok(RewriteReport {
        offset,
        runad_headers: matches.len(),
    })
}
