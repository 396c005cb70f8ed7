//! Sequential walk over the segment stream of an XEX buffer
//!
//! The stream is a leading `0xFFFF` marker followed by segments. Each
//! segment is a 4-byte header and `end - start + 1` payload bytes. Further
//! markers may appear between segments and are skipped. There is no table
//! of contents, so every walk starts at byte 0.

use crate::error::{Result, XexError};
use crate::header::{SegmentHeader, XEX_MARKER, read_word};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// A segment header located in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Byte offset of the 4-byte header
    pub offset: usize,
    /// Decoded header
    pub header: SegmentHeader,
}

/// Start walking the segments of `data`
///
/// Validates the leading marker up front. The returned iterator yields one
/// item per real segment header in file order and stops after the first
/// error.
pub fn segments(data: &[u8]) -> Result<Segments<'_>> {
    if data.len() < 2 {
        return Err(XexError::TooSmall(data.len()));
    }

    let signature = read_word(data, 0)?;
    if signature != XEX_MARKER {
        return Err(XexError::MissingMarker(signature));
    }

    Ok(Segments {
        data,
        cursor: 0,
        finished: false,
    })
}

/// Iterator over the segment headers of an XEX buffer
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    data: &'a [u8],
    cursor: usize,
    finished: bool,
}

impl Segments<'_> {
    /// Bytes left at the cursor; the cursor may run past the end when the
    /// last payload is truncated
    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.cursor)
    }

    fn advance(&mut self) -> Result<Option<Segment>> {
        while self.remaining() >= 2 {
            if read_word(self.data, self.cursor)? == XEX_MARKER {
                trace!(offset = self.cursor, "Skipping XEX marker");
                self.cursor += 2;
                continue;
            }

            if self.remaining() < SegmentHeader::SIZE {
                debug!(
                    offset = self.cursor,
                    trailing = self.remaining(),
                    "Ignoring trailing bytes after last segment"
                );
                return Ok(None);
            }

            let offset = self.cursor;
            let header = SegmentHeader::read_at(self.data, offset)?;
            let Some(payload_len) = header.payload_len() else {
                return Err(XexError::InvalidSegmentLength {
                    offset,
                    start: header.start,
                    end: header.end,
                });
            };

            debug!(
                offset,
                start = header.start,
                end = header.end,
                payload_len,
                "Found segment"
            );

            self.cursor = offset + SegmentHeader::SIZE + payload_len;
            return Ok(Some(Segment { offset, header }));
        }

        Ok(None)
    }
}

impl Iterator for Segments<'_> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.advance() {
            Ok(Some(segment)) => Some(Ok(segment)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::header::RUNAD;
    use crate::test_utils::XexBuilder;
    use pretty_assertions::assert_eq;

    fn collect(data: &[u8]) -> Result<Vec<Segment>> {
        segments(data)?.collect()
    }

    #[test]
    fn test_rejects_empty_and_one_byte_buffers() {
        assert!(matches!(segments(&[]), Err(XexError::TooSmall(0))));
        assert!(matches!(segments(&[0xFF]), Err(XexError::TooSmall(1))));
    }

    #[test]
    fn test_rejects_missing_marker() {
        let result = segments(&[0xAA, 0xBB, 0x00, 0x20, 0x00, 0x20, 0x00]);
        assert!(matches!(result, Err(XexError::MissingMarker(0xBBAA))));
    }

    #[test]
    fn test_marker_only_has_no_segments() {
        assert_eq!(collect(&[0xFF, 0xFF]).unwrap(), Vec::new());
        assert_eq!(collect(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap(), Vec::new());
    }

    #[test]
    fn test_walks_segments_in_file_order() {
        let xex = XexBuilder::new()
            .segment(0x2000, 0x2003, 0x11)
            .segment(0x3000, 0x3000, 0x22)
            .runad(0x2000)
            .build();

        let found = collect(&xex.data).unwrap();
        assert_eq!(
            found,
            vec![
                Segment {
                    offset: 2,
                    header: SegmentHeader::new(0x2000, 0x2003)
                },
                Segment {
                    offset: 10,
                    header: SegmentHeader::new(0x3000, 0x3000)
                },
                Segment {
                    offset: 15,
                    header: RUNAD
                },
            ]
        );
    }

    #[test]
    fn test_skips_repeated_markers_between_segments() {
        let xex = XexBuilder::new()
            .segment(0x2000, 0x2001, 0x00)
            .marker()
            .marker()
            .segment(0x4000, 0x4001, 0x00)
            .build();

        let offsets: Vec<usize> = collect(&xex.data)
            .unwrap()
            .iter()
            .map(|s| s.offset)
            .collect();
        assert_eq!(offsets, vec![2, 12]);
        assert_eq!(offsets, xex.headers);
    }

    #[test]
    fn test_single_byte_segment_is_valid() {
        // end == start declares exactly one payload byte
        let data = [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00];
        let found = collect(&data).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].header, SegmentHeader::new(0, 0));
    }

    #[test]
    fn test_negative_length_is_fatal() {
        let data = [0xFF, 0xFF, 0x05, 0x00, 0x02, 0x00];
        let mut iter = segments(&data).unwrap();

        match iter.next() {
            Some(Err(XexError::InvalidSegmentLength { offset, start, end })) => {
                assert_eq!(offset, 2);
                assert_eq!(start, 0x0005);
                assert_eq!(end, 0x0002);
            }
            other => panic!("Expected InvalidSegmentLength, got {other:?}"),
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_error_after_valid_segment() {
        let xex = XexBuilder::new()
            .runad(0x2000)
            .raw(&[0x10, 0x00, 0x0F, 0x00])
            .build();

        let mut iter = segments(&xex.data).unwrap();
        assert!(matches!(iter.next(), Some(Ok(s)) if s.header == RUNAD));
        assert!(matches!(
            iter.next(),
            Some(Err(XexError::InvalidSegmentLength { offset: 8, .. }))
        ));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_trailing_partial_header_is_ignored() {
        let xex = XexBuilder::new()
            .segment(0x2000, 0x2000, 0x55)
            .raw(&[0x00, 0x30, 0x01])
            .build();

        let found = collect(&xex.data).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, 2);
    }

    #[test]
    fn test_trailing_single_byte_is_ignored() {
        let found = collect(&[0xFF, 0xFF, 0x42]).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_truncated_payload_ends_scan() {
        // Header declares 2 payload bytes but the buffer stops after it
        let data = [0xFF, 0xFF, 0xE0, 0x02, 0xE1, 0x02];
        let found = collect(&data).unwrap();
        assert_eq!(
            found,
            vec![Segment {
                offset: 2,
                header: RUNAD
            }]
        );
    }

    #[test]
    fn test_each_walk_restarts_from_the_beginning() {
        let xex = XexBuilder::new().runad(0x2000).runad(0x3000).build();

        let first = collect(&xex.data).unwrap();
        let second = collect(&xex.data).unwrap();
        assert_eq!(first, second);
    }
}
