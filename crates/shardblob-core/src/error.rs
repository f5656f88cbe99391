//! Error types for shardblob core.

use thiserror::Error;

/// Boxed error carried as the cause of a [`CodecError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the structured encode / decode step.
///
/// The underlying cause is kept as the error source so callers can inspect
/// or report it.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The encoder rejected the value.
    #[error("encoding error: {0}")]
    Encoding(#[source] BoxError),

    /// The decoder could not read the blob data as the target type.
    #[error("decoding error: {0}")]
    Decoding(#[source] BoxError),
}

impl CodecError {
    /// Wrap an encoder failure.
    pub fn encoding(cause: impl Into<BoxError>) -> Self {
        CodecError::Encoding(cause.into())
    }

    /// Wrap a decoder failure.
    pub fn decoding(cause: impl Into<BoxError>) -> Self {
        CodecError::Decoding(cause.into())
    }
}

/// Errors for malformed chunk layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("serialized blob length {0} is not a multiple of the chunk size")]
    Misaligned(usize),

    #[error("chunk must be exactly 32 bytes, got {0}")]
    InvalidChunkSize(usize),

    #[error("terminal chunk data length must be 1..=31, got {0}")]
    InvalidTerminalLength(usize),

    #[error("chunk {index} has reserved indicator bits set: {indicator:#04x}")]
    ReservedBits { index: usize, indicator: u8 },

    #[error("chunk {index} flags differ from the first chunk")]
    InconsistentFlags { index: usize },

    #[error("chunk {index} has non-zero padding after its data")]
    NonZeroPadding { index: usize },

    #[error("blob ends without a terminal chunk")]
    MissingTerminal,

    #[error("{0} chunk(s) follow the terminal chunk")]
    TrailingChunks(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_codec_error_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad input");
        let err = CodecError::encoding(cause);

        assert!(err.to_string().starts_with("encoding error"));
        let source = err.source().expect("cause is preserved");
        assert_eq!(source.to_string(), "bad input");
    }

    #[test]
    fn test_codec_error_from_message() {
        let err = CodecError::decoding("truncated");
        assert!(matches!(err, CodecError::Decoding(_)));
        assert_eq!(err.to_string(), "decoding error: truncated");
    }

    #[test]
    fn test_chunk_error_display() {
        let err = ChunkError::ReservedBits {
            index: 2,
            indicator: 0x41,
        };
        assert_eq!(
            err.to_string(),
            "chunk 2 has reserved indicator bits set: 0x41"
        );
        assert!(ChunkError::Misaligned(33).to_string().contains("33"));
    }
}
