//! The info byte: `(share_version << 1) | is_sequence_start`.

use serde::{Deserialize, Serialize};

use crate::consts::SHARE_VERSION_ZERO;
use crate::error::{Result, ShareError};

/// The byte that follows the namespace in every share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfoByte(u8);

impl InfoByte {
    /// Build an info byte. Only supported share versions are accepted.
    pub fn new(version: u8, is_sequence_start: bool) -> Result<Self> {
        if !is_supported_version(version) {
            return Err(ShareError::InvalidShareVersion(version));
        }
        Ok(Self((version << 1) | u8::from(is_sequence_start)))
    }

    /// Decode a byte read from a share, checking the version.
    pub fn parse(byte: u8) -> Result<Self> {
        let info = Self(byte);
        if !is_supported_version(info.version()) {
            return Err(ShareError::InvalidShareVersion(info.version()));
        }
        Ok(info)
    }

    /// Wrap a byte already known to carry a supported version.
    pub(crate) const fn from_raw(byte: u8) -> Self {
        Self(byte)
    }

    pub fn version(self) -> u8 {
        self.0 >> 1
    }

    pub fn is_sequence_start(self) -> bool {
        self.0 & 1 == 1
    }

    pub fn to_u8(self) -> u8 {
        self.0
    }
}

impl From<InfoByte> for u8 {
    fn from(info: InfoByte) -> Self {
        info.0
    }
}

/// Share versions this implementation can produce and read.
const SUPPORTED_SHARE_VERSIONS: &[u8] = &[SHARE_VERSION_ZERO];

fn is_supported_version(version: u8) -> bool {
    SUPPORTED_SHARE_VERSIONS.contains(&version)
}
