//! Recovering sequences, transactions, and blobs from a flat run of shares.

use tracing::warn;

use crate::delimiter::parse_delimiter;
use crate::error::{Result, ShareError};
use crate::sequence::ShareSequence;
use crate::share::Share;
use crate::sparse::Blob;

/// Group shares into sequences and validate each one.
///
/// A sequence-start share opens a new sequence; any other share must continue
/// the open sequence in the same namespace.
pub fn parse_shares(shares: &[Share]) -> Result<Vec<ShareSequence>> {
    let mut sequences: Vec<ShareSequence> = Vec::new();
    for share in shares {
        if share.is_sequence_start() {
            sequences.push(ShareSequence::new(share.namespace(), vec![share.clone()]));
            continue;
        }
        match sequences.last_mut() {
            Some(sequence) if sequence.namespace == share.namespace() => {
                sequence.shares.push(share.clone());
            }
            _ => return Err(ShareError::MissingSequenceStart),
        }
    }

    for sequence in &sequences {
        if let Err(e) = sequence.valid_sequence_len() {
            warn!(namespace = %sequence.namespace, error = %e, "invalid share sequence");
            return Err(e);
        }
    }
    Ok(sequences)
}

/// Split the payload of a compact sequence back into its units.
///
/// A zero byte where a delimiter is expected marks padding that runs to the end
/// of the current share.
pub fn parse_compact_units(sequence: &ShareSequence) -> Result<Vec<Vec<u8>>> {
    if !sequence.namespace.is_compact() {
        return Err(ShareError::InvalidNamespace(sequence.namespace));
    }
    let data = sequence.raw_data()?;

    let mut boundaries = Vec::with_capacity(sequence.shares.len());
    let mut end = 0;
    for share in &sequence.shares {
        end += share.raw_data().len();
        boundaries.push(end);
    }

    let mut units = Vec::new();
    let mut pos = 0;
    while pos < data.len() {
        if data[pos] == 0 {
            pos = boundaries
                .iter()
                .copied()
                .find(|boundary| *boundary > pos)
                .unwrap_or(data.len());
            continue;
        }

        let (len, used) = parse_delimiter(&data[pos..])?;
        let start = pos + used;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= data.len())
            .ok_or_else(|| {
                ShareError::MalformedDelimiter(format!(
                    "unit of {} bytes at offset {} overruns sequence of {} bytes",
                    len,
                    pos,
                    data.len()
                ))
            })?;
        units.push(data[start..end].to_vec());
        pos = end;
    }
    Ok(units)
}

/// Every transaction held in the compact sequences of `shares`.
pub fn parse_txs(shares: &[Share]) -> Result<Vec<Vec<u8>>> {
    let mut txs = Vec::new();
    for sequence in parse_shares(shares)? {
        if sequence.namespace.is_compact() {
            txs.extend(parse_compact_units(&sequence)?);
        }
    }
    Ok(txs)
}

/// Every blob held in the sparse, non-padding sequences of `shares`.
pub fn parse_blobs(shares: &[Share]) -> Result<Vec<Blob>> {
    let mut blobs = Vec::new();
    for sequence in parse_shares(shares)? {
        if sequence.namespace.is_compact() || sequence.is_padding() {
            continue;
        }
        let share_version = sequence.shares.first().map_or(0, Share::version);
        blobs.push(Blob {
            namespace: sequence.namespace,
            share_version,
            data: sequence.raw_data()?.into(),
        });
    }
    Ok(blobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::{split_txs, CompactShareSplitter};
    use crate::consts::{NAMESPACE_SIZE, TX_NAMESPACE_ID};
    use crate::namespace::NamespaceId;
    use crate::share::{namespace_padding_share, reserved_padding_shares, tail_padding_shares};
    use crate::sparse::split_blobs;
    use proptest::prelude::*;

    fn ns(byte: u8) -> NamespaceId {
        NamespaceId::from_bytes([byte; NAMESPACE_SIZE])
    }

    #[test]
    fn test_five_txs_roundtrip() {
        let txs: Vec<Vec<u8>> = (0..5u8).map(|i| vec![i + 1; 200]).collect();
        let mut css = CompactShareSplitter::new(TX_NAMESPACE_ID, 0).unwrap();
        for tx in &txs {
            css.write(tx).unwrap();
        }
        let (shares, next) = css.export(0);
        assert_eq!(next, shares.len());

        let sequences = parse_shares(&shares).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(parse_compact_units(&sequences[0]).unwrap(), txs);
    }

    #[test]
    fn test_units_after_gap_padding() {
        let txs = vec![vec![1u8; 492], vec![2u8; 200], vec![3u8; 5]];
        let shares = split_txs(TX_NAMESPACE_ID, &txs).unwrap();
        assert_eq!(parse_txs(&shares).unwrap(), txs);
    }

    #[test]
    fn test_full_layout() {
        let txs = vec![vec![9u8; 1000], vec![8u8; 30]];
        let blobs = vec![
            Blob::new(ns(1), vec![1u8; 700]),
            Blob::new(ns(2), vec![2u8; 3]),
        ];

        let mut shares = split_txs(TX_NAMESPACE_ID, &txs).unwrap();
        shares.extend(reserved_padding_shares(2));
        shares.extend(split_blobs(&blobs).unwrap());
        shares.push(namespace_padding_share(ns(2)));
        shares.extend(tail_padding_shares(3));

        assert_eq!(parse_txs(&shares).unwrap(), txs);
        assert_eq!(parse_blobs(&shares).unwrap(), blobs);
    }

    #[test]
    fn test_continuation_without_start() {
        let shares = split_blobs(&[Blob::new(ns(1), vec![1u8; 700])]).unwrap();
        assert_eq!(
            parse_shares(&shares[1..]),
            Err(ShareError::MissingSequenceStart)
        );
    }

    #[test]
    fn test_continuation_in_other_namespace() {
        let mut shares = split_blobs(&[Blob::new(ns(1), vec![1u8; 10])]).unwrap();
        let other = split_blobs(&[Blob::new(ns(2), vec![2u8; 700])]).unwrap();
        shares.push(other[1].clone());
        assert_eq!(parse_shares(&shares), Err(ShareError::MissingSequenceStart));
    }

    #[test]
    fn test_truncated_sequence_rejected() {
        let shares = split_blobs(&[Blob::new(ns(1), vec![1u8; 1200])]).unwrap();
        assert!(matches!(
            parse_shares(&shares[..2]),
            Err(ShareError::SequenceLenMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_compact_units_rejects_sparse_sequence() {
        let shares = split_blobs(&[Blob::new(ns(1), vec![1u8; 10])]).unwrap();
        let sequence = ShareSequence::new(ns(1), shares);
        assert_eq!(
            parse_compact_units(&sequence),
            Err(ShareError::InvalidNamespace(ns(1)))
        );
    }

    proptest! {
        #[test]
        fn test_compact_units_roundtrip(
            txs in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..1500), 0..12),
        ) {
            let shares = split_txs(TX_NAMESPACE_ID, &txs).unwrap();
            prop_assert_eq!(parse_txs(&shares).unwrap(), txs);
        }
    }
}
