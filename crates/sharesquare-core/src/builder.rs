//! The open share of a splitter.
//!
//! A [`ShareBuilder`] owns the bytes of one in-progress share: its header is
//! written up front and content is appended until the share is full. Both
//! splitters keep exactly one open builder and turn it into a [`Share`] once it
//! is closed.

use crate::consts::{
    COMPACT_SHARE_RESERVED_BYTES, NAMESPACE_SIZE, SEQUENCE_LEN_BYTES, SHARE_INFO_BYTES, SHARE_SIZE,
};
use crate::error::Result;
use crate::info_byte::InfoByte;
use crate::namespace::NamespaceId;
use crate::share::{header_len, Share};

#[derive(Debug, Clone)]
pub(crate) struct ShareBuilder {
    bytes: Vec<u8>,
    header_len: usize,
    is_compact: bool,
    unit_start_recorded: bool,
}

impl ShareBuilder {
    /// Open a share and write its header.
    ///
    /// The sequence length of a sequence-start share and the reserved bytes of
    /// a compact share are written as zero placeholders.
    pub fn new(
        namespace: NamespaceId,
        share_version: u8,
        is_sequence_start: bool,
        is_compact: bool,
    ) -> Result<Self> {
        let info = InfoByte::new(share_version, is_sequence_start)?;
        let header_len = header_len(is_sequence_start, is_compact);

        let mut bytes = Vec::with_capacity(SHARE_SIZE);
        bytes.extend_from_slice(namespace.as_bytes());
        bytes.push(info.to_u8());
        bytes.resize(header_len, 0);

        Ok(Self {
            bytes,
            header_len,
            is_compact,
            unit_start_recorded: false,
        })
    }

    /// Content bytes still free in this share.
    pub fn available(&self) -> usize {
        SHARE_SIZE - self.bytes.len()
    }

    pub fn is_full(&self) -> bool {
        self.available() == 0
    }

    /// Append as much of `data` as fits. Returns the number of bytes taken.
    pub fn write(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(self.available());
        self.bytes.extend_from_slice(&data[..n]);
        n
    }

    /// Record the current position as the first unit start in this share.
    ///
    /// Only the first call has an effect, and only on compact shares.
    pub fn mark_unit_start(&mut self) {
        if !self.is_compact || self.unit_start_recorded {
            return;
        }
        let offset = self.bytes.len() as u32;
        let start = self.header_len - COMPACT_SHARE_RESERVED_BYTES;
        self.bytes[start..self.header_len].copy_from_slice(&offset.to_be_bytes());
        self.unit_start_recorded = true;
    }

    /// Fill the rest of the share with zeros. Returns the number of bytes added.
    pub fn zero_pad(&mut self) -> usize {
        let gap = self.available();
        self.bytes.resize(SHARE_SIZE, 0);
        gap
    }

    /// Overwrite the sequence length placeholder.
    ///
    /// Must only be called on the builder that opened the sequence.
    pub fn set_sequence_len(&mut self, len: u32) {
        let start = NAMESPACE_SIZE + SHARE_INFO_BYTES;
        self.bytes[start..start + SEQUENCE_LEN_BYTES].copy_from_slice(&len.to_be_bytes());
    }

    /// Close the share, zero-padding whatever is left.
    pub fn finish(mut self) -> Share {
        self.zero_pad();
        Share(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{
        CONTINUATION_SPARSE_SHARE_CONTENT_SIZE, FIRST_COMPACT_SHARE_CONTENT_SIZE, TX_NAMESPACE_ID,
    };

    #[test]
    fn test_builder_capacity() {
        let first = ShareBuilder::new(TX_NAMESPACE_ID, 0, true, true).unwrap();
        assert_eq!(first.available(), FIRST_COMPACT_SHARE_CONTENT_SIZE);

        let ns = NamespaceId::from_bytes([3; NAMESPACE_SIZE]);
        let cont = ShareBuilder::new(ns, 0, false, false).unwrap();
        assert_eq!(cont.available(), CONTINUATION_SPARSE_SHARE_CONTENT_SIZE);
    }

    #[test]
    fn test_builder_write_stops_at_capacity() {
        let ns = NamespaceId::from_bytes([3; NAMESPACE_SIZE]);
        let mut builder = ShareBuilder::new(ns, 0, false, false).unwrap();
        let taken = builder.write(&[9u8; 600]);
        assert_eq!(taken, CONTINUATION_SPARSE_SHARE_CONTENT_SIZE);
        assert!(builder.is_full());
    }

    #[test]
    fn test_mark_unit_start_only_once() {
        let mut builder = ShareBuilder::new(TX_NAMESPACE_ID, 0, true, true).unwrap();
        builder.write(&[1, 2, 3]);
        builder.mark_unit_start();
        builder.write(&[4]);
        builder.mark_unit_start();

        let share = builder.finish();
        // 8 namespace + 1 info + 4 sequence len + 4 reserved + 3 content
        assert_eq!(share.reserved_bytes(), Some(20));
    }

    #[test]
    fn test_builder_rejects_bad_version() {
        assert!(ShareBuilder::new(TX_NAMESPACE_ID, 5, true, true).is_err());
    }
}
