//! End-to-end layout of a block: estimate the square, split transactions and
//! blobs, pad, then parse the square back.

use bytes::Bytes;
use sharesquare::core::consts::{SHARE_VERSION_ZERO, TX_NAMESPACE_ID};
use sharesquare::core::{
    parse_blobs, parse_shares, parse_txs, reserved_padding_shares, sparse_shares_needed,
    split_blobs, tail_padding_shares, CompactShareSplitter, Share, ShareRange,
};
use sharesquare::{
    estimate_square_size, marshal_index_wrapper, unmarshal_index_wrapper, Blob, ParsedTx,
};
use sharesquare_testkit::TxFixture;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Lay `txs` out the way a block producer would, with blobs in transaction
/// order directly after the reserved shares.
fn layout(txs: &[ParsedTx]) -> (u64, Vec<Share>) {
    let (square_size, nonreserve_start) = estimate_square_size(txs);

    let mut blob_index = nonreserve_start;
    let mut splitter = CompactShareSplitter::new(TX_NAMESPACE_ID, SHARE_VERSION_ZERO).unwrap();
    let mut blobs: Vec<Blob> = Vec::new();
    for ptx in txs {
        match ptx {
            ParsedTx::Plain(tx) => splitter.write(tx).unwrap(),
            ParsedTx::BlobBearing { tx, blobs: tx_blobs } => {
                let wrapped = marshal_index_wrapper(blob_index as u32, tx).unwrap();
                splitter.write(&wrapped).unwrap();
                for blob in tx_blobs {
                    blob_index += sparse_shares_needed(blob.data_used());
                    blobs.push(blob.clone());
                }
            }
        }
    }

    let (mut square, next) = splitter.export(0);
    assert!(next <= nonreserve_start, "tx shares overflow the reserved range");
    square.extend(reserved_padding_shares(nonreserve_start - next));
    square.extend(split_blobs(&blobs).unwrap());

    let total = (square_size * square_size) as usize;
    assert!(
        square.len() <= total,
        "{} shares in a {}x{} square",
        square.len(),
        square_size,
        square_size
    );
    square.extend(tail_padding_shares(total - square.len()));
    (square_size, square)
}

#[test]
fn test_five_txs_round_trip() {
    init_tracing();
    let mut fixture = TxFixture::with_seed(5);
    let txs = fixture.random_txs(5, 200);

    let mut splitter = CompactShareSplitter::new(TX_NAMESPACE_ID, SHARE_VERSION_ZERO).unwrap();
    for tx in &txs {
        splitter.write(tx).unwrap();
    }
    assert_eq!(
        splitter.share_ranges(0),
        vec![
            ShareRange { start: 0, end: 0 },
            ShareRange { start: 0, end: 0 },
            ShareRange { start: 0, end: 1 },
            ShareRange { start: 1, end: 1 },
            ShareRange { start: 1, end: 2 },
        ]
    );

    let (shares, next) = splitter.export(0);
    assert_eq!(next, 3);
    assert_eq!(shares[0].sequence_len(), 5 * 202);

    let parsed = parse_txs(&shares).unwrap();
    let expected: Vec<Vec<u8>> = txs.iter().map(|tx| tx.to_vec()).collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_block_layout_round_trip() {
    init_tracing();
    let mut fixture = TxFixture::with_seed(11);
    let mut txs: Vec<ParsedTx> = fixture
        .random_txs(3, 200)
        .into_iter()
        .map(ParsedTx::Plain)
        .collect();
    txs.push(fixture.random_blob_tx(100, &[1000]));
    txs.push(fixture.random_blob_tx(100, &[600]));

    let (square_size, square) = layout(&txs);
    // 2 tx shares + 2 + 2 blob shares, inflated to 8.1 -> 4x4
    assert_eq!(square_size, 4);
    assert_eq!(square.len(), 16);

    let sequences = parse_shares(&square).unwrap();
    // one tx sequence, two blobs, ten tail padding shares
    assert_eq!(sequences.len(), 13);

    let expected_blobs: Vec<Blob> = txs.iter().flat_map(|ptx| ptx.blobs().to_vec()).collect();
    assert_eq!(parse_blobs(&square).unwrap(), expected_blobs);

    let units = parse_txs(&square).unwrap();
    assert_eq!(units.len(), txs.len());
    for (unit, ptx) in units.iter().zip(&txs) {
        match ptx {
            ParsedTx::Plain(tx) => assert_eq!(unit.as_slice(), tx.as_ref()),
            ParsedTx::BlobBearing { tx, blobs } => {
                let wrapper = unmarshal_index_wrapper(unit).expect("blob tx is wrapped");
                assert_eq!(wrapper.tx.as_slice(), tx.as_ref());

                let first = &square[wrapper.share_index as usize];
                assert!(first.is_sequence_start());
                assert_eq!(first.namespace(), blobs[0].namespace);
                assert_eq!(first.sequence_len() as usize, blobs[0].data_used());
            }
        }
    }
}

#[test]
fn test_empty_block_layout() {
    init_tracing();
    let (square_size, square) = layout(&[]);
    assert_eq!(square_size, 1);
    // the estimator always reserves one tx share
    assert_eq!(square.len(), 1);
    assert!(parse_txs(&square).unwrap().is_empty());
    assert!(parse_blobs(&square).unwrap().is_empty());
}

#[test]
fn test_parsed_tx_serde() {
    let mut fixture = TxFixture::with_seed(3);
    let txs = vec![
        ParsedTx::Plain(Bytes::from_static(b"plain")),
        fixture.random_blob_tx(32, &[64, 128]),
    ];
    let json = serde_json::to_string(&txs).unwrap();
    let back: Vec<ParsedTx> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, txs);
}
