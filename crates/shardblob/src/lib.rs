//! # shardblob
//!
//! Fixed-width chunking for sharded-ledger blobs: encode a value, lay the
//! bytes out as 32-byte chunks, and reverse both steps.
//!
//! ## Overview
//!
//! - **Chunk**: 1 indicator byte + 31 data bytes. The indicator packs the
//!   skip-EVM flag (bit 7) and, on the last chunk, its data length (bits 0-4).
//! - **RawBlob**: flags plus the encoded payload, before chunking.
//! - **Codec**: any [`core::Encoder`] / [`core::Decoder`]; deterministic CBOR
//!   by default.
//!
//! ## Usage
//!
//! ```rust
//! use shardblob::{BlobCodec, BlobConfig, DecodedBlob};
//!
//! let codec = BlobCodec::new(BlobConfig::default().with_skip_evm_execution(true));
//!
//! let bytes = codec.serialize(&("transfer", 42u64)).unwrap();
//! assert_eq!(bytes.len() % 32, 0);
//!
//! let decoded: DecodedBlob<(String, u64)> = codec.deserialize(&bytes).unwrap();
//! assert_eq!(decoded.value, ("transfer".to_string(), 42));
//! assert!(decoded.flags.skip_evm_execution);
//! ```
//!
//! ## Re-exports
//!
//! - `shardblob::core` - chunk arithmetic, chunk layout, codec traits

pub mod codec;
pub mod error;

pub use shardblob_core as core;

pub use codec::{BlobCodec, BlobConfig, DecodedBlob, DEFAULT_MAX_SERIALIZED_SIZE};
pub use error::{BlobError, Result};

pub use shardblob_core::{
    num_chunks, serialized_size, terminal_length, CborCodec, Chunk, Flags, RawBlob, CHUNK_SIZE,
};
