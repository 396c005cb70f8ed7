//! Segment header and the fixed address constants of the XEX format
//!
//! Layout (little-endian):
//! ```text
//! offset 0x00: u16 start   (first target address of the payload)
//! offset 0x02: u16 end     (last target address, inclusive)
//! offset 0x04: [u8; end - start + 1] payload
//! ```
//!
//! A `0xFFFF` word in place of `start` is a marker, not a header.

use crate::error::{Result, XexError};
use binrw::io::Cursor;
use binrw::{BinRead, BinReaderExt, BinWrite};

/// File signature and inter-segment continuation tag
pub const XEX_MARKER: u16 = 0xFFFF;

/// Start of the run address vector
pub const RUNAD_START: u16 = 0x02E0;
/// End of the run address vector
pub const RUNAD_END: u16 = 0x02E1;
/// Start of the init address vector
pub const INITAD_START: u16 = 0x02E2;
/// End of the init address vector
pub const INITAD_END: u16 = 0x02E3;

/// Segment header: inclusive target address range of the following payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, BinRead, BinWrite)]
#[brw(little)]
pub struct SegmentHeader {
    /// First target address
    pub start: u16,
    /// Last target address (inclusive)
    pub end: u16,
}

/// Header of the segment that loads the run address
pub const RUNAD: SegmentHeader = SegmentHeader::new(RUNAD_START, RUNAD_END);

/// Header of the segment that loads the init address
pub const INITAD: SegmentHeader = SegmentHeader::new(INITAD_START, INITAD_END);

impl SegmentHeader {
    /// Encoded size in bytes
    pub const SIZE: usize = 4;

    /// Create a header for the given address range
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Number of payload bytes following the header, or `None` when
    /// `end < start`
    pub fn payload_len(&self) -> Option<usize> {
        self.end
            .checked_sub(self.start)
            .map(|span| usize::from(span) + 1)
    }

    /// Whether this header loads the run address vector
    pub fn is_runad(&self) -> bool {
        *self == RUNAD
    }

    /// Read a header from `data` at `offset`
    pub fn read_at(data: &[u8], offset: usize) -> Result<Self> {
        let mut cursor = Cursor::new(span(data, offset, Self::SIZE)?);
        Ok(Self::read(&mut cursor)?)
    }

    /// Overwrite the four bytes at `offset` with this header
    pub fn write_at(&self, data: &mut [u8], offset: usize) -> Result<()> {
        let available = data.len();
        let bytes = offset
            .checked_add(Self::SIZE)
            .and_then(|end| data.get_mut(offset..end))
            .ok_or(XexError::OutOfBounds {
                offset,
                len: Self::SIZE,
                available,
            })?;

        let mut cursor = Cursor::new(bytes);
        self.write(&mut cursor)?;
        Ok(())
    }
}

/// Read the little-endian word at `offset`
pub(crate) fn read_word(data: &[u8], offset: usize) -> Result<u16> {
    let mut cursor = Cursor::new(span(data, offset, 2)?);
    Ok(cursor.read_le::<u16>()?)
}

fn span(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(XexError::OutOfBounds {
            offset,
            len,
            available: data.len(),
        })
}
