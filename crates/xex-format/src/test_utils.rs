//! Builder for synthetic XEX buffers used by the unit tests

use crate::header::{RUNAD, SegmentHeader, XEX_MARKER};

/// A built buffer plus the offsets of every segment header written into it
#[derive(Debug, Clone)]
pub struct TestXex {
    pub data: Vec<u8>,
    pub headers: Vec<usize>,
    pub runad_headers: Vec<usize>,
}

/// Appends markers and segments after the leading `0xFFFF`
#[derive(Debug, Clone)]
pub struct XexBuilder {
    xex: TestXex,
}

impl Default for XexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl XexBuilder {
    pub fn new() -> Self {
        Self {
            xex: TestXex {
                data: XEX_MARKER.to_le_bytes().to_vec(),
                headers: Vec::new(),
                runad_headers: Vec::new(),
            },
        }
    }

    pub fn marker(mut self) -> Self {
        self.xex.data.extend_from_slice(&XEX_MARKER.to_le_bytes());
        self
    }

    /// Segment covering `start..=end` with every payload byte set to `fill`
    pub fn segment(self, start: u16, end: u16, fill: u8) -> Self {
        let header = SegmentHeader::new(start, end);
        let len = header.payload_len().unwrap_or(0);
        self.header_with_payload(header, &vec![fill; len])
    }

    /// RUNAD segment whose payload is `address`
    pub fn runad(self, address: u16) -> Self {
        self.header_with_payload(RUNAD, &address.to_le_bytes())
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.xex.data.extend_from_slice(bytes);
        self
    }

    fn header_with_payload(mut self, header: SegmentHeader, payload: &[u8]) -> Self {
        let offset = self.xex.data.len();
        self.xex.headers.push(offset);
        if header.is_runad() {
            self.xex.runad_headers.push(offset);
        }
        self.xex.data.extend_from_slice(&header.start.to_le_bytes());
        self.xex.data.extend_from_slice(&header.end.to_le_bytes());
        self.xex.data.extend_from_slice(payload);
        self
    }

    pub fn build(self) -> TestXex {
        self.xex
    }
}
