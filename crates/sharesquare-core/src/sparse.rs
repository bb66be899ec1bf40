//! Sparse shares: exactly one blob per share sequence.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::ShareBuilder;
use crate::consts::{
    CONTINUATION_SPARSE_SHARE_CONTENT_SIZE, FIRST_SPARSE_SHARE_CONTENT_SIZE, SHARE_VERSION_ZERO,
};
use crate::error::{Result, ShareError};
use crate::info_byte::InfoByte;
use crate::namespace::NamespaceId;
use crate::share::Share;

/// User data submitted under a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob {
    pub namespace: NamespaceId,
    pub share_version: u8,
    pub data: Bytes,
}

impl Blob {
    pub fn new(namespace: NamespaceId, data: impl Into<Bytes>) -> Self {
        Self {
            namespace,
            share_version: SHARE_VERSION_ZERO,
            data: data.into(),
        }
    }

    /// Number of payload bytes the blob places in shares.
    pub fn data_used(&self) -> usize {
        self.data.len()
    }
}

/// Builds the share sequence of a single blob.
///
/// Every blob gets its own splitter; nothing is packed across blobs. Export
/// consumes the splitter.
#[derive(Debug)]
pub struct SparseShareSplitter {
    namespace: NamespaceId,
    share_version: u8,
    shares: Vec<ShareBuilder>,
    pending: Option<ShareBuilder>,
    sequence_len: usize,
}

impl SparseShareSplitter {
    /// Create a splitter for `namespace`, which must be a blob namespace.
    ///
    /// Reserved, padding and parity namespaces are rejected: blobs written
    /// there could not be told apart from protocol data or filler.
    pub fn new(namespace: NamespaceId, share_version: u8) -> Result<Self> {
        if !namespace.is_blob_namespace() {
            return Err(ShareError::InvalidNamespace(namespace));
        }
        InfoByte::new(share_version, true)?;
        Ok(Self {
            namespace,
            share_version,
            shares: Vec::new(),
            pending: None,
            sequence_len: 0,
        })
    }

    /// Append the next bytes of the blob.
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        let sequence_len = self.sequence_len + data.len();
        if sequence_len > u32::MAX as usize {
            return Err(ShareError::OversizedContent {
                size: sequence_len,
                max: u32::MAX as usize,
            });
        }

        let mut remaining = data;
        while !remaining.is_empty() {
            let mut pending = match self.pending.take() {
                Some(pending) => pending,
                None => ShareBuilder::new(
                    self.namespace,
                    self.share_version,
                    self.shares.is_empty(),
                    false,
                )?,
            };
            let written = pending.write(remaining);
            remaining = &remaining[written..];
            if pending.is_full() {
                self.shares.push(pending);
            } else {
                self.pending = Some(pending);
            }
        }

        self.sequence_len = sequence_len;
        Ok(())
    }

    /// Number of shares the sequence currently spans.
    pub fn count(&self) -> usize {
        self.shares.len() + usize::from(self.pending.is_some())
    }

    /// Finalize the sequence, returning its shares and the index following the
    /// last one. An empty splitter exports no shares.
    pub fn export(self, start_index: usize) -> (Vec<Share>, usize) {
        let Self {
            namespace,
            mut shares,
            pending,
            sequence_len,
            ..
        } = self;

        if let Some(pending) = pending {
            shares.push(pending);
        }
        if let Some(first) = shares.first_mut() {
            first.set_sequence_len(sequence_len as u32);
        }

        let shares: Vec<Share> = shares.into_iter().map(ShareBuilder::finish).collect();
        debug!(
            namespace = %namespace,
            shares = shares.len(),
            sequence_len,
            start_index,
            "exported sparse shares"
        );
        let next_index = start_index + shares.len();
        (shares, next_index)
    }
}

/// Number of sparse shares a blob of `sequence_len` bytes spans.
pub fn sparse_shares_needed(sequence_len: usize) -> usize {
    if sequence_len == 0 {
        return 0;
    }
    if sequence_len <= FIRST_SPARSE_SHARE_CONTENT_SIZE {
        return 1;
    }
    1 + (sequence_len - FIRST_SPARSE_SHARE_CONTENT_SIZE)
        .div_ceil(CONTINUATION_SPARSE_SHARE_CONTENT_SIZE)
}

/// Split each blob into its own sequence, concatenated in blob order.
///
/// A blob without data has no sequence to occupy and is rejected with
/// [`ShareError::EmptyBlob`].
pub fn split_blobs(blobs: &[Blob]) -> Result<Vec<Share>> {
    let mut shares = Vec::new();
    for blob in blobs {
        if blob.data.is_empty() {
            return Err(ShareError::EmptyBlob(blob.namespace));
        }
        let mut splitter = SparseShareSplitter::new(blob.namespace, blob.share_version)?;
        splitter.write(&blob.data)?;
        let (blob_shares, _) = splitter.export(shares.len());
        shares.extend(blob_shares);
    }
    Ok(shares)
}
