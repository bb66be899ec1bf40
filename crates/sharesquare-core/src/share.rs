//! Share: the fixed-size unit of block data.

use std::fmt;

use crate::consts::{
    COMPACT_SHARE_RESERVED_BYTES, NAMESPACE_SIZE, RESERVED_PADDING_NAMESPACE_ID,
    SEQUENCE_LEN_BYTES, SHARE_INFO_BYTES, SHARE_SIZE, TAIL_PADDING_NAMESPACE_ID,
};
use crate::error::{Result, ShareError};
use crate::info_byte::InfoByte;
use crate::namespace::NamespaceId;

/// Offset of the info byte inside a share.
const INFO_BYTE_OFFSET: usize = NAMESPACE_SIZE;

/// Offset of the sequence length inside a sequence-start share.
const SEQUENCE_LEN_OFFSET: usize = NAMESPACE_SIZE + SHARE_INFO_BYTES;

/// A share of exactly [`SHARE_SIZE`] bytes with a supported info byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Share(pub(crate) Vec<u8>);

impl Share {
    /// Wrap raw share bytes, checking the size and the info byte.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != SHARE_SIZE {
            return Err(ShareError::InvalidShareSize {
                expected: SHARE_SIZE,
                actual: bytes.len(),
            });
        }
        InfoByte::parse(bytes[INFO_BYTE_OFFSET])?;
        Ok(Self(bytes))
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the share, returning its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn namespace(&self) -> NamespaceId {
        let mut arr = [0u8; NAMESPACE_SIZE];
        arr.copy_from_slice(&self.0[..NAMESPACE_SIZE]);
        NamespaceId(arr)
    }

    pub fn info_byte(&self) -> InfoByte {
        InfoByte::from_raw(self.0[INFO_BYTE_OFFSET])
    }

    pub fn version(&self) -> u8 {
        self.info_byte().version()
    }

    pub fn is_sequence_start(&self) -> bool {
        self.info_byte().is_sequence_start()
    }

    /// Whether this share belongs to a compact (delimited) sequence.
    pub fn is_compact(&self) -> bool {
        self.namespace().is_compact()
    }

    /// The declared length of the sequence this share starts.
    ///
    /// Continuation shares carry no length and report zero.
    pub fn sequence_len(&self) -> u32 {
        if !self.is_sequence_start() {
            return 0;
        }
        let mut len = [0u8; SEQUENCE_LEN_BYTES];
        len.copy_from_slice(&self.0[SEQUENCE_LEN_OFFSET..SEQUENCE_LEN_OFFSET + SEQUENCE_LEN_BYTES]);
        u32::from_be_bytes(len)
    }

    /// The reserved bytes of a compact share: the offset of the first unit that
    /// starts in it, or zero when none does.
    pub fn reserved_bytes(&self) -> Option<u32> {
        if !self.is_compact() {
            return None;
        }
        let start = self.header_len() - COMPACT_SHARE_RESERVED_BYTES;
        let mut reserved = [0u8; COMPACT_SHARE_RESERVED_BYTES];
        reserved.copy_from_slice(&self.0[start..start + COMPACT_SHARE_RESERVED_BYTES]);
        Some(u32::from_be_bytes(reserved))
    }

    /// Content bytes of this share, including any trailing padding.
    pub fn raw_data(&self) -> &[u8] {
        &self.0[self.header_len()..]
    }

    /// Number of bytes before the content begins.
    fn header_len(&self) -> usize {
        header_len(self.is_sequence_start(), self.is_compact())
    }
}

/// Header length of a share with the given shape.
pub(crate) fn header_len(is_sequence_start: bool, is_compact: bool) -> usize {
    let mut len = NAMESPACE_SIZE + SHARE_INFO_BYTES;
    if is_sequence_start {
        len += SEQUENCE_LEN_BYTES;
    }
    if is_compact {
        len += COMPACT_SHARE_RESERVED_BYTES;
    }
    len
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("namespace", &self.namespace())
            .field("sequence_start", &self.is_sequence_start())
            .field("sequence_len", &self.sequence_len())
            .finish()
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Share {
    type Error = ShareError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for Share {
    type Error = ShareError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes.to_vec())
    }
}

/// Right-pad `raw` with zero bytes to a full share.
pub fn pad_share(mut raw: Vec<u8>) -> Result<Share> {
    if raw.len() > SHARE_SIZE {
        return Err(ShareError::OversizedContent {
            size: raw.len(),
            max: SHARE_SIZE,
        });
    }
    raw.resize(SHARE_SIZE, 0);
    Share::from_bytes(raw)
}

/// A sequence-start share in `namespace` declaring zero bytes of content.
///
/// Used to fill the gap between blobs of different namespaces.
pub fn namespace_padding_share(namespace: NamespaceId) -> Share {
    let mut bytes = vec![0u8; SHARE_SIZE];
    bytes[..NAMESPACE_SIZE].copy_from_slice(namespace.as_bytes());
    // version zero, sequence start
    bytes[INFO_BYTE_OFFSET] = 0b0000_0001;
    Share(bytes)
}

/// `n` namespace padding shares.
pub fn namespace_padding_shares(namespace: NamespaceId, n: usize) -> Vec<Share> {
    vec![namespace_padding_share(namespace); n]
}

/// Filler placed after the reserved shares and before the first blob.
pub fn reserved_padding_share() -> Share {
    namespace_padding_share(RESERVED_PADDING_NAMESPACE_ID)
}

pub fn reserved_padding_shares(n: usize) -> Vec<Share> {
    namespace_padding_shares(RESERVED_PADDING_NAMESPACE_ID, n)
}

/// Filler placed after the last blob to complete the square.
pub fn tail_padding_share() -> Share {
    namespace_padding_share(TAIL_PADDING_NAMESPACE_ID)
}

pub fn tail_padding_shares(n: usize) -> Vec<Share> {
    namespace_padding_shares(TAIL_PADDING_NAMESPACE_ID, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TX_NAMESPACE_ID;

    #[test]
    fn test_pad_share() {
        let mut raw = vec![1u8; NAMESPACE_SIZE];
        raw.push(0x01);
        raw.extend_from_slice(&[0, 0, 0, 3]);
        raw.extend_from_slice(b"abc");

        let share = pad_share(raw).unwrap();
        assert_eq!(share.as_bytes().len(), SHARE_SIZE);
        assert_eq!(share.sequence_len(), 3);
        assert_eq!(&share.raw_data()[..3], b"abc");
        assert!(share.raw_data()[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_pad_share_oversized() {
        let err = pad_share(vec![0u8; SHARE_SIZE + 1]).unwrap_err();
        assert_eq!(
            err,
            ShareError::OversizedContent {
                size: SHARE_SIZE + 1,
                max: SHARE_SIZE
            }
        );
    }

    #[test]
    fn test_from_bytes_checks_size_and_version() {
        assert!(matches!(
            Share::from_bytes(vec![0u8; 10]),
            Err(ShareError::InvalidShareSize { actual: 10, .. })
        ));

        let mut bytes = vec![0u8; SHARE_SIZE];
        bytes[INFO_BYTE_OFFSET] = 0b0000_0011;
        assert_eq!(
            Share::from_bytes(bytes),
            Err(ShareError::InvalidShareVersion(1))
        );
    }

    #[test]
    fn test_padding_shares() {
        let tail = tail_padding_share();
        assert_eq!(tail.namespace(), TAIL_PADDING_NAMESPACE_ID);
        assert!(tail.is_sequence_start());
        assert_eq!(tail.sequence_len(), 0);
        assert!(tail.raw_data().iter().all(|b| *b == 0));

        let reserved = reserved_padding_shares(3);
        assert_eq!(reserved.len(), 3);
        assert!(reserved
            .iter()
            .all(|s| s.namespace() == RESERVED_PADDING_NAMESPACE_ID));
    }

    #[test]
    fn test_compact_header_includes_reserved_bytes() {
        let share = namespace_padding_share(TX_NAMESPACE_ID);
        assert_eq!(share.raw_data().len(), 495);
        assert_eq!(share.reserved_bytes(), Some(0));
        assert_eq!(tail_padding_share().reserved_bytes(), None);
    }
}
