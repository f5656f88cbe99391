//! Error types for the blob codec.

use shardblob_core::{ChunkError, CodecError};
use thiserror::Error;

/// Errors that can occur while turning values into blobs and back.
#[derive(Debug, Error)]
pub enum BlobError {
    /// The structured encode or decode step failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The serialized bytes are not a valid chunk layout.
    #[error("chunk error: {0}")]
    Chunk(#[from] ChunkError),

    /// The serialized blob would exceed the configured limit.
    #[error("blob too large: {size} bytes serialized (max {max})")]
    BlobTooLarge { size: usize, max: usize },
}

/// Result type for blob codec operations.
pub type Result<T> = std::result::Result<T, BlobError>;
