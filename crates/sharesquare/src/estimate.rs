//! Square size estimation.
//!
//! The estimator sizes the square in a single pass, before any share is laid
//! out. It deliberately over-packs: a few padding shares are cheaper than
//! searching for an exact fit.

use sharesquare_core::consts::{
    CONTINUATION_COMPACT_SHARE_CONTENT_SIZE, FIRST_COMPACT_SHARE_CONTENT_SIZE,
};
use sharesquare_core::{delim_len, sparse_shares_needed, Blob};
use tracing::debug;

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::parsed_tx::ParsedTx;
use crate::wrapper::OverheadCache;

/// Inflation applied to the linear share count to absorb the padding
/// introduced when namespaces are aligned in the square.
///
/// Other nodes assume this exact value; it must not be tuned.
pub const WORST_CASE_PADDING_RATIO: f64 = 1.35;

/// Sizes squares for candidate blocks.
///
/// Owns the wrapped-transaction overhead memo, so one estimator should be
/// reused across candidate blocks.
#[derive(Debug, Clone)]
pub struct SquareEstimator {
    config: EstimatorConfig,
    overheads: OverheadCache,
}

impl Default for SquareEstimator {
    fn default() -> Self {
        Self {
            config: EstimatorConfig::default(),
            overheads: OverheadCache::new(),
        }
    }
}

impl SquareEstimator {
    /// Create an estimator, validating its configuration.
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            overheads: OverheadCache::new(),
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate `(square_size, nonreserve_start)` for `txs`.
    ///
    /// `nonreserve_start` is the number of transaction shares, estimated at the
    /// maximum square size; blob shares may begin at that index.
    pub fn estimate(&mut self, txs: &[ParsedTx]) -> (u64, usize) {
        let EstimatorConfig {
            min_square_size,
            max_square_size,
        } = self.config;

        let tx_shares = self.estimate_compact_shares(max_square_size, txs);
        let blob_shares = estimate_blob_shares(txs);

        let total_shares = tx_shares + blob_shares;
        if total_shares <= 1 {
            debug!(
                square_size = min_square_size,
                nonreserve_start = tx_shares,
                "block fits in a single share"
            );
            return (min_square_size, tx_shares);
        }

        let padded = total_shares as f64 * WORST_CASE_PADDING_RATIO;
        let min_size = padded.sqrt().ceil() as u64;
        let square_size = round_up_power_of_two(min_size).clamp(min_square_size, max_square_size);

        debug!(
            tx_shares,
            blob_shares,
            square_size,
            nonreserve_start = tx_shares,
            "estimated square size"
        );
        (square_size, tx_shares)
    }

    /// Compact shares needed for every transaction in a square of side
    /// `square_size`, counting blob-bearing transactions at their worst-case
    /// wrapped size.
    pub fn estimate_compact_shares(&mut self, square_size: u64, txs: &[ParsedTx]) -> usize {
        let wrapped_overhead = self.overheads.get(square_size);
        let tx_bytes: usize = txs
            .iter()
            .map(|ptx| {
                let len = match ptx {
                    ParsedTx::Plain(tx) => tx.len(),
                    ParsedTx::BlobBearing { tx, .. } => tx.len() + wrapped_overhead,
                };
                len + delim_len(len)
            })
            .sum();

        if tx_bytes <= FIRST_COMPACT_SHARE_CONTENT_SIZE {
            return 1;
        }
        // integer division plus one rounds up, and over-counts exact multiples
        1 + (tx_bytes - FIRST_COMPACT_SHARE_CONTENT_SIZE) / CONTINUATION_COMPACT_SHARE_CONTENT_SIZE
            + 1
    }
}

/// Sparse shares needed for every blob, each in its own sequence.
pub fn estimate_blob_shares(txs: &[ParsedTx]) -> usize {
    txs.iter()
        .flat_map(ParsedTx::blobs)
        .map(|blob: &Blob| sparse_shares_needed(blob.data_used()))
        .sum()
}

/// Estimate `(square_size, nonreserve_start)` with the default configuration.
pub fn estimate_square_size(txs: &[ParsedTx]) -> (u64, usize) {
    SquareEstimator::default().estimate(txs)
}

/// Smallest power of two `>= n`; one for zero.
pub fn round_up_power_of_two(n: u64) -> u64 {
    n.next_power_of_two()
}
