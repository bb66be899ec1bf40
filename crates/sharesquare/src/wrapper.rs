//! Index wrappers and the overhead they add to a transaction.
//!
//! After layout, every blob-bearing transaction is wrapped with the index of the
//! first share of its blobs. The wrapper is a protobuf message, so its size
//! depends on the varint widths of the transaction length and the index, both of
//! which grow with the square.

use std::collections::BTreeMap;

use prost::encoding::{encoded_len_varint, key_len};
use prost::Message;
use sharesquare_core::consts::CONTINUATION_COMPACT_SHARE_CONTENT_SIZE;
use tracing::trace;

use crate::error::{Result, SquareError};

/// Type tag distinguishing an index wrapper from an ordinary transaction.
pub const INDEX_WRAPPER_TYPE_ID: &str = "INDX";

/// Field number of [`IndexWrapper::tx`].
const TX_FIELD_TAG: u32 = 1;

/// A transaction together with the index of the shares holding its blobs.
#[derive(Clone, PartialEq, Message)]
pub struct IndexWrapper {
    #[prost(bytes = "vec", tag = "1")]
    pub tx: Vec<u8>,
    #[prost(uint32, tag = "2")]
    pub share_index: u32,
    #[prost(string, tag = "3")]
    pub type_id: String,
}

impl IndexWrapper {
    pub fn new(share_index: u32, tx: Vec<u8>) -> Self {
        Self {
            tx,
            share_index,
            type_id: INDEX_WRAPPER_TYPE_ID.to_string(),
        }
    }

    fn marshal(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)
            .map_err(|e| SquareError::MarshalFailure(e.to_string()))?;
        Ok(buf)
    }
}

/// Wrap `tx` with `share_index`.
pub fn marshal_index_wrapper(share_index: u32, tx: &[u8]) -> Result<Vec<u8>> {
    IndexWrapper::new(share_index, tx.to_vec()).marshal()
}

/// Decode an index wrapper. Returns `None` for bytes that are not one.
pub fn unmarshal_index_wrapper(bytes: &[u8]) -> Option<IndexWrapper> {
    let wrapper = IndexWrapper::decode(bytes).ok()?;
    (wrapper.type_id == INDEX_WRAPPER_TYPE_ID).then_some(wrapper)
}

/// Worst-case bytes that wrapping adds to a transaction in a square of side
/// `square_size`.
///
/// A transaction as large as the whole square is wrapped with the largest
/// possible share index. The transaction body never changes the wrapper's
/// other fields, so only its key and length prefix are sized; nothing of the
/// body's size is allocated.
///
/// # Panics
///
/// Panics if the square holds more shares than a `u32` share index can
/// address.
pub fn max_wrapped_tx_overhead(square_size: u64) -> usize {
    let share_index = square_size
        .checked_mul(square_size)
        .and_then(|max_shares| u32::try_from(max_shares).ok())
        .unwrap_or_else(|| {
            panic!("square size {} has more shares than a u32 index can address", square_size)
        });
    let max_tx_len = u64::from(share_index) * CONTINUATION_COMPACT_SHARE_CONTENT_SIZE as u64;

    // an empty tx is omitted from the encoding, leaving the index and type id
    let header = IndexWrapper::new(share_index, Vec::new());
    header.encoded_len() + key_len(TX_FIELD_TAG) + encoded_len_varint(max_tx_len)
}

/// Memoized [`max_wrapped_tx_overhead`] per square size.
#[derive(Debug, Clone, Default)]
pub struct OverheadCache {
    by_square_size: BTreeMap<u64, usize>,
}

impl OverheadCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, square_size: u64) -> usize {
        *self.by_square_size.entry(square_size).or_insert_with(|| {
            let overhead = max_wrapped_tx_overhead(square_size);
            trace!(square_size, overhead, "computed wrapped tx overhead");
            overhead
        })
    }
}
