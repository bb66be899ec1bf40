//! # Sharesquare Testkit
//!
//! Testing utilities for sharesquare.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known shares with their exact bytes, for cross-implementation checks
//! - **Generators**: Proptest strategies for namespaces, transactions and blobs
//! - **Fixtures**: Random transactions and hand-assembled raw shares
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the bit-exact share layout:
//!
//! ```rust
//! use sharesquare_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for (name, matches, hex) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, hex);
//! }
//! # assert!(!all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use sharesquare::estimate_square_size;
//! use sharesquare_testkit::generators::parsed_txs;
//!
//! proptest! {
//!     #[test]
//!     fn square_size_is_power_of_two(txs in parsed_txs(16)) {
//!         let (size, _) = estimate_square_size(&txs);
//!         prop_assert!(size.is_power_of_two());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use sharesquare_testkit::fixtures::TxFixture;
//!
//! let mut fixture = TxFixture::with_seed(7);
//! let txs = fixture.random_txs(5, 200);
//! assert_eq!(txs.len(), 5);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{share_with_data, TxFixture};
pub use generators::{blob, blob_namespace, parsed_tx, parsed_txs, tx};
pub use vectors::{all_vectors, generate_share_from_vector, verify_all_vectors, GoldenVector};
