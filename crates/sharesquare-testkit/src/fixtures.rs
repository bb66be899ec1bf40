//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use sharesquare::ParsedTx;
use sharesquare_core::consts::{MAX_RESERVED_NAMESPACE, NAMESPACE_SIZE};
use sharesquare_core::{pad_share, Blob, NamespaceId, Share};

/// A deterministic source of random transactions and blobs.
pub struct TxFixture {
    rng: StdRng,
}

impl TxFixture {
    /// Create a fixture seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a fixture that yields the same data for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `count` random transactions of exactly `size` bytes.
    pub fn random_txs(&mut self, count: usize, size: usize) -> Vec<Bytes> {
        (0..count).map(|_| self.random_bytes(size)).collect()
    }

    /// A random namespace strictly inside the blob range.
    pub fn random_blob_namespace(&mut self) -> NamespaceId {
        loop {
            let mut bytes = [0u8; NAMESPACE_SIZE];
            self.rng.fill_bytes(&mut bytes);
            let namespace = NamespaceId::from_bytes(bytes);
            if namespace.is_blob_namespace() {
                return namespace;
            }
        }
    }

    /// A blob of `size` random bytes under a random blob namespace.
    pub fn random_blob(&mut self, size: usize) -> Blob {
        let namespace = self.random_blob_namespace();
        Blob::new(namespace, self.random_bytes(size))
    }

    /// A blob-bearing transaction carrying one blob per entry of `blob_sizes`.
    pub fn random_blob_tx(&mut self, tx_size: usize, blob_sizes: &[usize]) -> ParsedTx {
        let tx = self.random_bytes(tx_size);
        let blobs = blob_sizes.iter().map(|&size| self.random_blob(size)).collect();
        ParsedTx::BlobBearing { tx, blobs }
    }

    /// A mix of plain and blob-bearing transactions with sizes up to the
    /// given bounds.
    pub fn random_parsed_txs(
        &mut self,
        count: usize,
        max_tx_size: usize,
        max_blob_size: usize,
    ) -> Vec<ParsedTx> {
        (0..count)
            .map(|_| {
                let tx_size = self.rng.gen_range(1..=max_tx_size);
                if self.rng.gen_bool(0.5) {
                    ParsedTx::Plain(self.random_bytes(tx_size))
                } else {
                    let blob_size = self.rng.gen_range(1..=max_blob_size);
                    self.random_blob_tx(tx_size, &[blob_size])
                }
            })
            .collect()
    }

    fn random_bytes(&mut self, size: usize) -> Bytes {
        let mut data = vec![0u8; size];
        self.rng.fill_bytes(&mut data);
        Bytes::from(data)
    }
}

impl Default for TxFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble a raw share by hand: namespace, info byte for share version 0,
/// the sequence length when `is_sequence_start`, then `data` verbatim.
///
/// No reserved bytes are inserted, so compact shares must include them in
/// `data`.
///
/// # Panics
///
/// Panics if the header plus `data` is larger than a share.
pub fn share_with_data(
    namespace: NamespaceId,
    is_sequence_start: bool,
    sequence_len: u32,
    data: &[u8],
) -> Share {
    let mut raw = namespace.as_bytes().to_vec();
    raw.push(u8::from(is_sequence_start));
    if is_sequence_start {
        raw.extend_from_slice(&sequence_len.to_be_bytes());
    }
    raw.extend_from_slice(data);
    pad_share(raw).expect("fixture data exceeds share size")
}

/// The first namespace above the reserved range.
pub fn first_blob_namespace() -> NamespaceId {
    let mut bytes = *MAX_RESERVED_NAMESPACE.as_bytes();
    bytes[NAMESPACE_SIZE - 2] = 1;
    bytes[NAMESPACE_SIZE - 1] = 0;
    NamespaceId::from_bytes(bytes)
}
