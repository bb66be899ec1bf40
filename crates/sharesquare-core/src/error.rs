//! Error types for share construction and reconstruction.

use thiserror::Error;

use crate::namespace::NamespaceId;

/// Errors that can occur while splitting, reconstructing, or validating shares.
///
/// Every operation in this crate is deterministic, so none of these errors is
/// worth retrying: data received from a peer that fails here is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("unsupported share version: {0}")]
    InvalidShareVersion(u8),

    #[error("content of {size} bytes exceeds the maximum of {max}")]
    OversizedContent { size: usize, max: usize },

    #[error("share must be exactly {expected} bytes, got {actual}")]
    InvalidShareSize { expected: usize, actual: usize },

    #[error("namespace {0} cannot hold this kind of share")]
    InvalidNamespace(NamespaceId),

    #[error("blob in namespace {0} has no data")]
    EmptyBlob(NamespaceId),

    #[error("share sequence has no shares")]
    EmptySequence,

    #[error("first share of the sequence is not a sequence start")]
    MissingSequenceStart,

    #[error("share sequence has {actual} shares but needed {expected}")]
    SequenceLenMismatch { expected: usize, actual: usize },

    #[error("malformed delimiter: {0}")]
    MalformedDelimiter(String),
}

/// Result type for share operations.
pub type Result<T> = std::result::Result<T, ShareError>;
