//! Share sequences: the inverse of the splitters.

use crate::compact::compact_shares_needed;
use crate::error::{Result, ShareError};
use crate::namespace::NamespaceId;
use crate::share::{namespace_padding_share, Share};
use crate::sparse::sparse_shares_needed;

/// An ordered run of shares in one namespace carrying one logical payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSequence {
    pub namespace: NamespaceId,
    pub shares: Vec<Share>,
}

impl ShareSequence {
    pub fn new(namespace: NamespaceId, shares: Vec<Share>) -> Self {
        Self { namespace, shares }
    }

    /// The payload carried by the sequence.
    ///
    /// Content from every share is concatenated and truncated to the declared
    /// sequence length. Padding is never inspected, only cut off.
    pub fn raw_data(&self) -> Result<Vec<u8>> {
        let first = self.shares.first().ok_or(ShareError::EmptySequence)?;
        if !first.is_sequence_start() {
            return Err(ShareError::MissingSequenceStart);
        }

        let sequence_len = first.sequence_len() as usize;
        let mut data = Vec::with_capacity(sequence_len);
        for share in &self.shares {
            data.extend_from_slice(share.raw_data());
        }
        if data.len() < sequence_len {
            return Err(self.mismatch());
        }
        data.truncate(sequence_len);
        Ok(data)
    }

    /// Declared sequence length, or zero when the first share is not a
    /// sequence start.
    pub fn sequence_len(&self) -> u32 {
        self.shares.first().map_or(0, Share::sequence_len)
    }

    /// Whether the sequence is filler rather than data.
    pub fn is_padding(&self) -> bool {
        self.namespace.is_tail_padding()
            || self.namespace.is_reserved_padding()
            || self.is_namespace_padding()
    }

    fn is_namespace_padding(&self) -> bool {
        match self.shares.as_slice() {
            [share] => *share == namespace_padding_share(self.namespace),
            _ => false,
        }
    }

    /// Check that the declared sequence length accounts for exactly the shares
    /// present.
    pub fn valid_sequence_len(&self) -> Result<()> {
        let first = self.shares.first().ok_or(ShareError::EmptySequence)?;
        if self.is_padding() {
            return Ok(());
        }
        // a continuation share declares no length, so it always mismatches
        if !first.is_sequence_start() || self.shares_needed() != self.shares.len() {
            return Err(self.mismatch());
        }
        Ok(())
    }

    /// Shares the declared sequence length requires.
    fn shares_needed(&self) -> usize {
        let sequence_len = self.sequence_len() as usize;
        match self.shares.first() {
            Some(first) if first.is_compact() => compact_shares_needed(sequence_len),
            Some(_) => sparse_shares_needed(sequence_len),
            None => 0,
        }
    }

    fn mismatch(&self) -> ShareError {
        ShareError::SequenceLenMismatch {
            expected: self.shares_needed(),
            actual: self.shares.len(),
        }
    }
}
