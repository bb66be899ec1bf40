//! Golden share vectors for bit-exact verification.
//!
//! Every node must produce byte-identical shares for the same input. Each
//! vector pins the non-zero prefix of a single share; the rest of the share is
//! zero padding.

use serde::Serialize;
use sharesquare_core::consts::{SHARE_SIZE, SHARE_VERSION_ZERO, TX_NAMESPACE_ID};
use sharesquare_core::{
    reserved_padding_share, split_txs, tail_padding_share, NamespaceId, Share,
    SparseShareSplitter,
};

/// What a vector feeds into the splitters.
#[derive(Debug, Clone, Serialize)]
pub enum VectorInput {
    /// Transactions split into the transaction namespace.
    Txs(&'static [&'static [u8]]),
    /// One blob split into sparse shares.
    Blob {
        namespace: [u8; 8],
        data: &'static [u8],
    },
    TailPadding,
    ReservedPadding,
}

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub input: VectorInput,
    /// Expected share bytes (hex), up to the start of zero padding.
    pub expected_prefix: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "single tx",
            input: VectorInput::Txs(&[b"hello"]),
            // ns | start | len 6 | first unit at 17 | delim 5 | "hello"
            expected_prefix: "0000000000000001\
                              01\
                              00000006\
                              00000011\
                              05\
                              68656c6c6f",
        },
        GoldenVector {
            name: "two txs",
            input: VectorInput::Txs(&[b"ab", b"cde"]),
            expected_prefix: "0000000000000001\
                              01\
                              00000007\
                              00000011\
                              026162\
                              03636465",
        },
        GoldenVector {
            name: "small blob",
            input: VectorInput::Blob {
                namespace: [0, 0, 0, 0, 0, 0, 1, 0],
                data: b"abc",
            },
            expected_prefix: "0000000000000100\
                              01\
                              00000003\
                              616263",
        },
        GoldenVector {
            name: "tail padding",
            input: VectorInput::TailPadding,
            expected_prefix: "fffffffffffffffe01",
        },
        GoldenVector {
            name: "reserved padding",
            input: VectorInput::ReservedPadding,
            expected_prefix: "00000000000000ff01",
        },
    ]
}

/// Produce the shares a vector describes.
///
/// # Panics
///
/// Panics if the vector input is rejected by the splitters.
pub fn generate_share_from_vector(vector: &GoldenVector) -> Vec<Share> {
    match &vector.input {
        VectorInput::Txs(txs) => split_txs(TX_NAMESPACE_ID, txs).expect("vector txs split"),
        VectorInput::Blob { namespace, data } => {
            let mut splitter =
                SparseShareSplitter::new(NamespaceId::from_bytes(*namespace), SHARE_VERSION_ZERO)
                    .expect("vector namespace is a blob namespace");
            splitter.write(data).expect("vector blob fits");
            splitter.export(0).0
        }
        VectorInput::TailPadding => vec![tail_padding_share()],
        VectorInput::ReservedPadding => vec![reserved_padding_share()],
    }
}

/// The full expected share, prefix followed by zero padding.
pub fn expected_share_hex(vector: &GoldenVector) -> String {
    let mut expected = vector.expected_prefix.to_string();
    expected.extend(std::iter::repeat('0').take(SHARE_SIZE * 2 - expected.len()));
    expected
}

/// Check every golden vector against the current implementation.
///
/// Returns `(name, matches, actual hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let shares = generate_share_from_vector(v);
            let hex = shares
                .first()
                .map(|share| hex::encode(share.as_bytes()))
                .unwrap_or_default();
            let matches = shares.len() == 1 && hex == expected_share_hex(v);
            (v.name.to_string(), matches, hex)
        })
        .collect()
}

/// All vectors as JSON, for comparison with other implementations.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}
