//! # shardblob core
//!
//! Pure primitives for laying out a payload as a sharded-ledger blob: a run
//! of fixed 32-byte chunks, each with one indicator byte and 31 data bytes.
//!
//! This crate contains no I/O and no logging. It is pure computation over
//! byte buffers.
//!
//! ## Key Types
//!
//! - [`RawBlob`] - Flags plus an encoded payload, before chunking
//! - [`Chunk`] - One 32-byte chunk
//! - [`Flags`] - Options packed into each chunk's indicator byte
//! - [`Encoder`] / [`Decoder`] - The structured encoding step, over a value type
//!
//! ## Layout
//!
//! [`sizes`] holds the chunk arithmetic, [`serialize_blob`] and
//! [`deserialize_blob`] the byte layout. Values are turned into blobs with
//! [`new_raw_blob`] and back with [`from_raw_blob`], using [`CborCodec`] or
//! any other [`Encoder`] / [`Decoder`].

pub mod blob;
pub mod canonical;
pub mod chunk;
pub mod codec;
pub mod error;
pub mod flags;
pub mod sizes;

pub use blob::{deserialize_blob, serialize_blob, Chunks, RawBlob};
pub use canonical::{CborCodec, CborError};
pub use chunk::Chunk;
pub use codec::{from_raw_blob, new_raw_blob, Decoder, Encoder};
pub use error::{BoxError, ChunkError, CodecError};
pub use flags::Flags;
pub use sizes::{
    checked_serialized_size, num_chunks, serialized_size, terminal_length, CHUNK_DATA_SIZE,
    CHUNK_SIZE, INDICATOR_SIZE,
};
