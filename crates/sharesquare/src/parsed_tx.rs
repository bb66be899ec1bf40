//! Transactions as handed over by transaction selection.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use sharesquare_core::Blob;

/// A transaction destined for the block, already decoded far enough to know
/// whether it pays for blobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedTx {
    /// A transaction that carries no blobs.
    Plain(Bytes),
    /// A transaction paying for one or more blobs. Once laid out it is wrapped
    /// with the index of the shares holding its blobs.
    BlobBearing { tx: Bytes, blobs: Vec<Blob> },
}

impl ParsedTx {
    /// The transaction bytes, without any blobs.
    pub fn tx(&self) -> &Bytes {
        match self {
            ParsedTx::Plain(tx) => tx,
            ParsedTx::BlobBearing { tx, .. } => tx,
        }
    }

    pub fn blobs(&self) -> &[Blob] {
        match self {
            ParsedTx::Plain(_) => &[],
            ParsedTx::BlobBearing { blobs, .. } => blobs,
        }
    }

    pub fn is_blob_bearing(&self) -> bool {
        matches!(self, ParsedTx::BlobBearing { .. })
    }

    /// Total blob bytes this transaction places in sparse shares.
    pub fn data_used(&self) -> usize {
        self.blobs().iter().map(Blob::data_used).sum()
    }
}
