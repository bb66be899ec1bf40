//! Proptest generators for property-based testing.

use bytes::Bytes;
use proptest::prelude::*;

use sharesquare::ParsedTx;
use sharesquare_core::consts::NAMESPACE_SIZE;
use sharesquare_core::{Blob, NamespaceId};

/// Generate a namespace strictly inside the blob range.
pub fn blob_namespace() -> impl Strategy<Value = NamespaceId> {
    any::<[u8; NAMESPACE_SIZE]>()
        .prop_map(NamespaceId::from_bytes)
        .prop_filter("blob namespace", NamespaceId::is_blob_namespace)
}

/// Generate transaction bytes of length `1..=max_len`.
pub fn tx(max_len: usize) -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 1..=max_len).prop_map(Bytes::from)
}

/// Generate a blob of length `1..=max_len`.
pub fn blob(max_len: usize) -> impl Strategy<Value = Blob> {
    (blob_namespace(), prop::collection::vec(any::<u8>(), 1..=max_len))
        .prop_map(|(namespace, data)| Blob::new(namespace, data))
}

/// Generate a plain or blob-bearing transaction.
pub fn parsed_tx() -> impl Strategy<Value = ParsedTx> {
    prop_oneof![
        tx(1000).prop_map(ParsedTx::Plain),
        (tx(500), prop::collection::vec(blob(4000), 1..=3))
            .prop_map(|(tx, blobs)| ParsedTx::BlobBearing { tx, blobs }),
    ]
}

/// Generate up to `max_count` transactions.
pub fn parsed_txs(max_count: usize) -> impl Strategy<Value = Vec<ParsedTx>> {
    prop::collection::vec(parsed_tx(), 0..=max_count)
}
