//! The blob codec: values in, chunk bytes out, and back.
//!
//! [`BlobCodec`] composes the structured encoding step with the chunk layout
//! and enforces the configured size limit on both directions.

use shardblob_core::{
    checked_serialized_size, deserialize_blob, from_raw_blob, new_raw_blob, serialize_blob,
    CborCodec, Decoder, Encoder, Flags, RawBlob,
};

use crate::error::{BlobError, Result};

/// Serialized size limit of a collation body (2^20 bytes).
pub const DEFAULT_MAX_SERIALIZED_SIZE: usize = 1 << 20;

/// Configuration for the blob codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobConfig {
    /// Flag set on blobs built from values.
    pub skip_evm_execution: bool,
    /// Largest serialized blob accepted or produced. `None` disables the check.
    pub max_serialized_size: Option<usize>,
}

impl BlobConfig {
    /// Set the skip-EVM flag for blobs built from values.
    pub fn with_skip_evm_execution(mut self, skip: bool) -> Self {
        self.skip_evm_execution = skip;
        self
    }

    /// Set the serialized size limit.
    pub fn with_max_serialized_size(mut self, max: Option<usize>) -> Self {
        self.max_serialized_size = max;
        self
    }

    pub fn flags(&self) -> Flags {
        Flags::new(self.skip_evm_execution)
    }
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            skip_evm_execution: false,
            max_serialized_size: Some(DEFAULT_MAX_SERIALIZED_SIZE),
        }
    }
}

/// A value decoded from a blob, with the flags its chunks carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlob<T> {
    pub flags: Flags,
    pub value: T,
}

/// Turns values into chunked blobs and back.
///
/// Generic over the structured encoding; defaults to deterministic CBOR.
#[derive(Debug, Clone, Default)]
pub struct BlobCodec<C = CborCodec> {
    /// The structured encode / decode step.
    codec: C,
    /// Configuration.
    config: BlobConfig,
}

impl BlobCodec<CborCodec> {
    /// Create a CBOR-backed codec.
    pub fn new(config: BlobConfig) -> Self {
        Self::with_codec(CborCodec, config)
    }
}

impl<C> BlobCodec<C> {
    /// Create a codec over a custom encoding.
    pub fn with_codec(codec: C, config: BlobConfig) -> Self {
        Self { codec, config }
    }

    pub fn config(&self) -> &BlobConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Value <-> RawBlob
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a value into a raw blob flagged per the configuration.
    pub fn encode_raw<T>(&self, value: &T) -> Result<RawBlob>
    where
        T: ?Sized,
        C: Encoder<T>,
    {
        Ok(new_raw_blob(
            &self.codec,
            value,
            self.config.skip_evm_execution,
        )?)
    }

    /// Decode the payload of a raw blob.
    pub fn decode_raw<T>(&self, blob: &RawBlob) -> Result<T>
    where
        C: Decoder<T>,
    {
        Ok(from_raw_blob(&self.codec, blob)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chunk layout
    // ─────────────────────────────────────────────────────────────────────────

    /// Serialize a raw blob into chunks, enforcing the size limit.
    pub fn serialize_raw(&self, blob: &RawBlob) -> Result<Vec<u8>> {
        self.check_size(blob.len())?;
        let bytes = serialize_blob(blob);

        tracing::debug!(
            payload_len = blob.len(),
            chunks = blob.num_chunks(),
            skip_evm_execution = blob.flags().skip_evm_execution,
            "serialized blob"
        );
        Ok(bytes)
    }

    /// Parse chunk bytes into a raw blob.
    pub fn deserialize_raw(&self, bytes: &[u8]) -> Result<RawBlob> {
        if let Some(max) = self.config.max_serialized_size {
            if bytes.len() > max {
                tracing::warn!(size = bytes.len(), max, "rejected oversized blob");
                return Err(BlobError::BlobTooLarge {
                    size: bytes.len(),
                    max,
                });
            }
        }

        let blob = deserialize_blob(bytes).map_err(|e| {
            tracing::warn!("Malformed blob: {}", e);
            e
        })?;

        tracing::debug!(
            payload_len = blob.len(),
            chunks = blob.num_chunks(),
            skip_evm_execution = blob.flags().skip_evm_execution,
            "deserialized blob"
        );
        Ok(blob)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Value <-> chunks
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a value and serialize it into chunks.
    pub fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: ?Sized,
        C: Encoder<T>,
    {
        let blob = self.encode_raw(value)?;
        self.serialize_raw(&blob)
    }

    /// Parse chunks and decode the payload as a `T`.
    pub fn deserialize<T>(&self, bytes: &[u8]) -> Result<DecodedBlob<T>>
    where
        C: Decoder<T>,
    {
        let blob = self.deserialize_raw(bytes)?;
        let value = self.decode_raw(&blob)?;
        Ok(DecodedBlob {
            flags: blob.flags(),
            value,
        })
    }

    fn check_size(&self, payload_len: usize) -> Result<()> {
        let Some(max) = self.config.max_serialized_size else {
            return Ok(());
        };
        let size = checked_serialized_size(payload_len).unwrap_or(usize::MAX);
        if size > max {
            tracing::warn!(payload_len, size, max, "rejected oversized blob");
            return Err(BlobError::BlobTooLarge { size, max });
        }
        Ok(())
    }
}
