//! Compact shares: many delimited units packed densely into one sequence.
//!
//! Transactions are written back to back, each prefixed by its varint length.
//! A unit may start anywhere inside a share and continue into the next one; the
//! reserved bytes of each share point at the first unit that starts in it so a
//! reader can resynchronise without the preceding shares.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::builder::ShareBuilder;
use crate::consts::{CONTINUATION_COMPACT_SHARE_CONTENT_SIZE, FIRST_COMPACT_SHARE_CONTENT_SIZE};
use crate::delimiter::{delim_len, marshal_delimited};
use crate::error::{Result, ShareError};
use crate::info_byte::InfoByte;
use crate::namespace::NamespaceId;
use crate::share::Share;

/// Inclusive range of share indexes occupied by one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareRange {
    pub start: usize,
    pub end: usize,
}

impl ShareRange {
    fn offset(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }
}

/// Builds one compact share sequence.
///
/// Create it, [`write`](Self::write) units, then [`export`](Self::export) once.
/// Export consumes the splitter.
#[derive(Debug)]
pub struct CompactShareSplitter {
    namespace: NamespaceId,
    share_version: u8,
    /// Closed shares, in order.
    shares: Vec<ShareBuilder>,
    /// The open share, if any bytes have been written to it.
    pending: Option<ShareBuilder>,
    /// Content bytes written so far, counting gap padding.
    sequence_len: usize,
    ranges: Vec<ShareRange>,
}

impl CompactShareSplitter {
    /// Create a splitter for `namespace`, which must hold compact shares.
    pub fn new(namespace: NamespaceId, share_version: u8) -> Result<Self> {
        if !namespace.is_compact() {
            return Err(ShareError::InvalidNamespace(namespace));
        }
        InfoByte::new(share_version, true)?;
        Ok(Self {
            namespace,
            share_version,
            shares: Vec::new(),
            pending: None,
            sequence_len: 0,
            ranges: Vec::new(),
        })
    }

    /// Append one unit, prefixed by its length delimiter.
    ///
    /// If the open share cannot hold the whole delimiter it is zero-padded and
    /// closed first, so a delimiter never straddles two shares. Empty units
    /// carry nothing and are skipped.
    pub fn write(&mut self, unit: &[u8]) -> Result<()> {
        if unit.is_empty() {
            trace!(namespace = %self.namespace, "skipping empty unit");
            return Ok(());
        }

        let delim_len = delim_len(unit.len());
        let gap = match &self.pending {
            Some(pending) if pending.available() < delim_len => pending.available(),
            _ => 0,
        };
        let sequence_len = self.sequence_len + gap + delim_len + unit.len();
        if sequence_len > u32::MAX as usize {
            return Err(ShareError::OversizedContent {
                size: sequence_len,
                max: u32::MAX as usize,
            });
        }

        if gap > 0 {
            if let Some(mut pending) = self.pending.take() {
                pending.zero_pad();
                self.shares.push(pending);
            }
        }

        let data = marshal_delimited(unit);
        let start = self.shares.len();
        let mut remaining: &[u8] = &data;
        let mut unit_started = false;
        while !remaining.is_empty() {
            let mut pending = match self.pending.take() {
                Some(pending) => pending,
                None => self.open_share()?,
            };
            if !unit_started {
                pending.mark_unit_start();
                unit_started = true;
            }
            let written = pending.write(remaining);
            remaining = &remaining[written..];
            if pending.is_full() {
                self.shares.push(pending);
            } else {
                self.pending = Some(pending);
            }
        }

        self.ranges.push(ShareRange {
            start,
            end: self.count() - 1,
        });
        self.sequence_len = sequence_len;
        Ok(())
    }

    /// Number of shares the sequence currently spans.
    pub fn count(&self) -> usize {
        self.shares.len() + usize::from(self.pending.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Share ranges of every written unit, in write order, shifted by `offset`.
    pub fn share_ranges(&self, offset: usize) -> Vec<ShareRange> {
        self.ranges.iter().map(|r| r.offset(offset)).collect()
    }

    /// Finalize the sequence.
    ///
    /// Marks the first share as the sequence start, writes the sequence length,
    /// pads the last share, and returns the shares together with the index
    /// following the last one.
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
            // bounded by the check in `write`
            first.set_sequence_len(sequence_len as u32);
        }

        let shares: Vec<Share> = shares.into_iter().map(ShareBuilder::finish).collect();
        debug!(
            namespace = %namespace,
            shares = shares.len(),
            sequence_len,
            start_index,
            "exported compact shares"
        );
        let next_index = start_index + shares.len();
        (shares, next_index)
    }

    fn open_share(&self) -> Result<ShareBuilder> {
        ShareBuilder::new(
            self.namespace,
            self.share_version,
            self.shares.is_empty(),
            true,
        )
    }
}

/// Number of compact shares a sequence of `sequence_len` content bytes spans.
pub fn compact_shares_needed(sequence_len: usize) -> usize {
    if sequence_len == 0 {
        return 0;
    }
    if sequence_len <= FIRST_COMPACT_SHARE_CONTENT_SIZE {
        return 1;
    }
    1 + (sequence_len - FIRST_COMPACT_SHARE_CONTENT_SIZE)
        .div_ceil(CONTINUATION_COMPACT_SHARE_CONTENT_SIZE)
}

/// Split `txs` into a single compact sequence in `namespace`.
pub fn split_txs<T: AsRef<[u8]>>(namespace: NamespaceId, txs: &[T]) -> Result<Vec<Share>> {
    let mut splitter = CompactShareSplitter::new(namespace, crate::consts::SHARE_VERSION_ZERO)?;
    for tx in txs {
        splitter.write(tx.as_ref())?;
    }
    Ok(splitter.export(0).0)
}
