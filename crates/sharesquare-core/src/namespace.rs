//! Namespace identifiers.
//!
//! Namespaces are compared byte-wise; that order is the order in which shares
//! appear in the square.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::{
    MAX_RESERVED_NAMESPACE, NAMESPACE_SIZE, PARITY_SHARES_NAMESPACE_ID,
    RESERVED_PADDING_NAMESPACE_ID, TAIL_PADDING_NAMESPACE_ID,
};

/// An 8-byte namespace identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NamespaceId(pub [u8; NAMESPACE_SIZE]);

impl NamespaceId {
    /// Create a NamespaceId from raw bytes.
    pub const fn from_bytes(bytes: [u8; NAMESPACE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; NAMESPACE_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != NAMESPACE_SIZE {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; NAMESPACE_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Whether the namespace is reserved for protocol data.
    pub fn is_reserved(&self) -> bool {
        *self <= MAX_RESERVED_NAMESPACE
    }

    /// Whether the namespace may carry user blobs.
    pub fn is_blob_namespace(&self) -> bool {
        !self.is_reserved()
            && *self != TAIL_PADDING_NAMESPACE_ID
            && *self != PARITY_SHARES_NAMESPACE_ID
    }

    /// Whether shares in this namespace are compact (delimited, densely packed).
    ///
    /// Every reserved namespace below the reserved padding namespace holds
    /// compact shares.
    pub fn is_compact(&self) -> bool {
        self.is_reserved() && !self.is_reserved_padding()
    }

    pub fn is_tail_padding(&self) -> bool {
        *self == TAIL_PADDING_NAMESPACE_ID
    }

    pub fn is_reserved_padding(&self) -> bool {
        *self == RESERVED_PADDING_NAMESPACE_ID
    }
}

impl fmt::Debug for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamespaceId({})", self.to_hex())
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for NamespaceId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; NAMESPACE_SIZE]> for NamespaceId {
    fn from(bytes: [u8; NAMESPACE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for NamespaceId {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; NAMESPACE_SIZE] = slice.try_into()?;
        Ok(Self(arr))
    }
}
