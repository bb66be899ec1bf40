//! Length delimiters for compact share units.
//!
//! Every unit written to a compact share sequence is prefixed with its length as
//! a minimal unsigned varint (protobuf encoding), so a reader can find unit
//! boundaries even when a unit straddles two shares.

use crate::error::{Result, ShareError};

/// Number of bytes the delimiter for a unit of `len` bytes occupies.
pub fn delim_len(len: usize) -> usize {
    prost::length_delimiter_len(len)
}

/// Prefix `unit` with its varint length.
pub fn marshal_delimited(unit: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(delim_len(unit.len()) + unit.len());
    write_delimiter(unit.len(), &mut buf);
    buf.extend_from_slice(unit);
    buf
}

/// Append the varint encoding of `len` to `buf`.
pub(crate) fn write_delimiter(len: usize, buf: &mut Vec<u8>) {
    prost::encode_length_delimiter(len, buf).expect("Vec has unbounded capacity");
}

/// Decode a delimiter from the front of `data`.
///
/// Returns the unit length and the number of bytes the delimiter used.
pub fn parse_delimiter(data: &[u8]) -> Result<(usize, usize)> {
    let mut cursor = data;
    let len = prost::decode_length_delimiter(&mut cursor)
        .map_err(|e| ShareError::MalformedDelimiter(e.to_string()))?;
    Ok((len, data.len() - cursor.len()))
}
