//! Sizing constants shared by every node.
//!
//! Changing any of these values changes the byte layout of blocks, so they are
//! consensus-critical.

use crate::namespace::NamespaceId;

/// Size of a single share in bytes.
pub const SHARE_SIZE: usize = 512;

/// Size of a namespace ID in bytes.
pub const NAMESPACE_SIZE: usize = 8;

/// Bytes used by the info byte.
pub const SHARE_INFO_BYTES: usize = 1;

/// Bytes used by the sequence length that follows the info byte of the first
/// share in a sequence.
pub const SEQUENCE_LEN_BYTES: usize = 4;

/// Bytes reserved in every compact share for the location of the first unit
/// that starts in it.
pub const COMPACT_SHARE_RESERVED_BYTES: usize = 4;

/// The only share version currently accepted.
pub const SHARE_VERSION_ZERO: u8 = 0;

/// Largest share version that fits in the 7 version bits of the info byte.
pub const MAX_SHARE_VERSION: u8 = 127;

/// Usable bytes in the first share of a compact sequence.
pub const FIRST_COMPACT_SHARE_CONTENT_SIZE: usize = SHARE_SIZE
    - NAMESPACE_SIZE
    - SHARE_INFO_BYTES
    - SEQUENCE_LEN_BYTES
    - COMPACT_SHARE_RESERVED_BYTES;

/// Usable bytes in every subsequent share of a compact sequence.
pub const CONTINUATION_COMPACT_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES - COMPACT_SHARE_RESERVED_BYTES;

/// Usable bytes in the first share of a sparse sequence.
pub const FIRST_SPARSE_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES - SEQUENCE_LEN_BYTES;

/// Usable bytes in every subsequent share of a sparse sequence.
pub const CONTINUATION_SPARSE_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES;

/// Smallest square side length a block may use.
pub const DEFAULT_MIN_SQUARE_SIZE: u64 = 1;

/// Largest square side length a block may use.
pub const DEFAULT_MAX_SQUARE_SIZE: u64 = 128;

/// Namespace holding the block's transactions.
pub const TX_NAMESPACE_ID: NamespaceId = NamespaceId([0, 0, 0, 0, 0, 0, 0, 1]);

/// Namespace of the filler shares placed between the reserved shares and the
/// first blob.
pub const RESERVED_PADDING_NAMESPACE_ID: NamespaceId =
    NamespaceId([0, 0, 0, 0, 0, 0, 0, 255]);

/// Every namespace at or below this one is reserved for protocol data.
pub const MAX_RESERVED_NAMESPACE: NamespaceId = NamespaceId([0, 0, 0, 0, 0, 0, 0, 255]);

/// Namespace of the filler shares after the last blob.
pub const TAIL_PADDING_NAMESPACE_ID: NamespaceId =
    NamespaceId([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]);

/// Namespace of erasure-coded parity shares.
pub const PARITY_SHARES_NAMESPACE_ID: NamespaceId = NamespaceId([0xFF; NAMESPACE_SIZE]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_sizes() {
        assert_eq!(FIRST_COMPACT_SHARE_CONTENT_SIZE, 495);
        assert_eq!(CONTINUATION_COMPACT_SHARE_CONTENT_SIZE, 499);
        assert_eq!(FIRST_SPARSE_SHARE_CONTENT_SIZE, 499);
        assert_eq!(CONTINUATION_SPARSE_SHARE_CONTENT_SIZE, 503);
    }

    #[test]
    fn test_reserved_namespace_order() {
        assert!(TX_NAMESPACE_ID < RESERVED_PADDING_NAMESPACE_ID);
        assert!(MAX_RESERVED_NAMESPACE < TAIL_PADDING_NAMESPACE_ID);
        assert!(TAIL_PADDING_NAMESPACE_ID < PARITY_SHARES_NAMESPACE_ID);
    }
}
