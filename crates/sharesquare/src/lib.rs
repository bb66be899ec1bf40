//! # Sharesquare
//!
//! Lays out a block's transactions and blobs as namespaced shares in a
//! two-dimensional square, and sizes that square before the layout exists.
//!
//! ## Overview
//!
//! - **Shares**: fixed-size units tagged with a namespace (see [`core`])
//! - **Compact shares**: transactions packed densely with length delimiters
//! - **Sparse shares**: one blob per share sequence
//! - **Estimation**: the smallest power-of-two square that fits a block
//!
//! ## Usage
//!
//! ```rust
//! use sharesquare::{estimate_square_size, ParsedTx};
//! use sharesquare::core::{Blob, NamespaceId};
//!
//! let txs = vec![
//!     ParsedTx::Plain(vec![1u8; 250].into()),
//!     ParsedTx::BlobBearing {
//!         tx: vec![2u8; 300].into(),
//!         blobs: vec![Blob::new(NamespaceId::from_bytes([7; 8]), vec![3u8; 4000])],
//!     },
//! ];
//!
//! let (square_size, nonreserve_start) = estimate_square_size(&txs);
//! assert!(square_size.is_power_of_two());
//! assert!(nonreserve_start >= 1);
//! ```
//!
//! ## Re-exports
//!
//! - `sharesquare::core` - Share format, splitters, and sequence parsing

pub mod config;
pub mod error;
pub mod estimate;
pub mod parsed_tx;
pub mod wrapper;

// Re-export component crates
pub use sharesquare_core as core;

pub use config::EstimatorConfig;
pub use error::{Result, SquareError};
pub use estimate::{
    estimate_blob_shares, estimate_square_size, round_up_power_of_two, SquareEstimator,
    WORST_CASE_PADDING_RATIO,
};
pub use parsed_tx::ParsedTx;
pub use wrapper::{
    marshal_index_wrapper, max_wrapped_tx_overhead, unmarshal_index_wrapper, IndexWrapper,
    OverheadCache, INDEX_WRAPPER_TYPE_ID,
};

// Re-export commonly used core types
pub use sharesquare_core::{
    Blob, CompactShareSplitter, NamespaceId, Share, ShareError, ShareSequence,
    SparseShareSplitter,
};
