//! # Sharesquare Core
//!
//! Pure primitives for laying block data out as fixed-size, namespaced shares.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over byte strings.
//!
//! ## Key Types
//!
//! - [`Share`] - A fixed-size, namespace-tagged unit of block data
//! - [`NamespaceId`] - The grouping key that orders shares in the square
//! - [`InfoByte`] - Share version plus the sequence-start flag
//! - [`CompactShareSplitter`] - Packs many delimited transactions densely
//! - [`SparseShareSplitter`] - Packs exactly one blob per share sequence
//! - [`ShareSequence`] - A run of shares carrying one logical payload
//!
//! ## Share Layout
//!
//! ```text
//! namespace (8) | info byte (1) | sequence len (4, first share only)
//!              | reserved bytes (4, compact shares only) | data | zero padding
//! ```
//!
//! The layout and the constants in [`consts`] are a bit-exact contract shared by
//! every node on the network.

mod builder;
pub mod compact;
pub mod consts;
pub mod delimiter;
pub mod error;
pub mod info_byte;
pub mod namespace;
pub mod parse;
pub mod sequence;
pub mod share;
pub mod sparse;

pub use compact::{compact_shares_needed, split_txs, CompactShareSplitter, ShareRange};
pub use delimiter::{delim_len, marshal_delimited, parse_delimiter};
pub use error::{Result, ShareError};
pub use info_byte::InfoByte;
pub use namespace::NamespaceId;
pub use parse::{parse_blobs, parse_compact_units, parse_shares, parse_txs};
pub use sequence::ShareSequence;
pub use share::{
    namespace_padding_share, namespace_padding_shares, pad_share, reserved_padding_share,
    reserved_padding_shares, tail_padding_share, tail_padding_shares, Share,
};
pub use sparse::{sparse_shares_needed, split_blobs, Blob, SparseShareSplitter};
