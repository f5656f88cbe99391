//! # shardblob testkit
//!
//! Testing utilities for shardblob.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known payloads with their exact serialized chunks
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Sample payload types and always-failing codecs
//!
//! ## Golden Vectors
//!
//! ```rust
//! use shardblob_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, hex) in verify_all_vectors() {
//!     assert!(ok, "{}: {}", name, hex);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use shardblob_core::{deserialize_blob, serialize_blob};
//! use shardblob_testkit::generators::BlobParams;
//!
//! proptest! {
//!     #[test]
//!     fn blob_roundtrips(params: BlobParams) {
//!         let blob = params.raw_blob();
//!         prop_assert_eq!(deserialize_blob(&serialize_blob(&blob)).unwrap(), blob);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_transactions, FailingCodec, SampleTransaction};
pub use generators::BlobParams;
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
