//! Raw blobs and their chunk serialization.
//!
//! A [`RawBlob`] pairs [`Flags`] with an opaque payload. It is the form a
//! value takes after structured encoding and before chunking.
//! [`serialize_blob`] lays it out as 32-byte chunks and
//! [`deserialize_blob`] reads such a layout back, rejecting anything that
//! [`serialize_blob`] could not have produced.

use std::iter::Peekable;
use std::slice;

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::error::ChunkError;
use crate::flags::Flags;
use crate::sizes::{self, CHUNK_DATA_SIZE, CHUNK_SIZE};

/// Flags plus the encoded payload, prior to chunking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawBlob {
    flags: Flags,
    data: Bytes,
}

impl RawBlob {
    /// Create a raw blob.
    pub fn new(flags: Flags, data: impl Into<Bytes>) -> Self {
        Self {
            flags,
            data: data.into(),
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The encoded payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn num_chunks(&self) -> usize {
        sizes::num_chunks(self.data.len())
    }

    pub fn serialized_size(&self) -> usize {
        sizes::serialized_size(self.data.len())
    }

    /// Iterate over the chunks this blob serializes to.
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            flags: self.flags,
            inner: self.data.chunks(CHUNK_DATA_SIZE).peekable(),
        }
    }

    /// Split into flags and payload.
    pub fn into_parts(self) -> (Flags, Bytes) {
        (self.flags, self.data)
    }
}

/// Iterator over the chunks of a [`RawBlob`], created by [`RawBlob::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    flags: Flags,
    inner: Peekable<slice::Chunks<'a, u8>>,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let data = self.inner.next()?;
        let terminal = self.inner.peek().is_none();
        Some(Chunk::pack(self.flags, data, terminal))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Chunks<'_> {}

/// Serialize a blob into its chunk layout.
///
/// The output is exactly `serialized_size(blob.len())` bytes. An empty blob
/// serializes to nothing, so its flags do not survive the round trip.
pub fn serialize_blob(blob: &RawBlob) -> Vec<u8> {
    let mut out = Vec::with_capacity(blob.serialized_size());
    for chunk in blob.chunks() {
        out.extend_from_slice(chunk.as_bytes());
    }
    debug_assert_eq!(out.len(), blob.serialized_size());
    out
}

/// Parse a chunk layout back into a blob.
///
/// Empty input yields an empty blob with no flags set.
pub fn deserialize_blob(bytes: &[u8]) -> Result<RawBlob, ChunkError> {
    if bytes.len() % CHUNK_SIZE != 0 {
        return Err(ChunkError::Misaligned(bytes.len()));
    }
    if bytes.is_empty() {
        return Ok(RawBlob::default());
    }

    let count = bytes.len() / CHUNK_SIZE;
    let flags = Chunk::try_from(&bytes[..CHUNK_SIZE])?.flags();
    let mut data = Vec::with_capacity(count * CHUNK_DATA_SIZE);

    for (index, raw) in bytes.chunks_exact(CHUNK_SIZE).enumerate() {
        let chunk = Chunk::try_from(raw)?;

        if chunk.has_reserved_bits() {
            return Err(ChunkError::ReservedBits {
                index,
                indicator: chunk.indicator(),
            });
        }
        if chunk.flags() != flags {
            return Err(ChunkError::InconsistentFlags { index });
        }

        data.extend_from_slice(chunk.data());

        if chunk.is_terminal() {
            if chunk.padding().iter().any(|&b| b != 0) {
                return Err(ChunkError::NonZeroPadding { index });
            }
            let trailing = count - index - 1;
            if trailing != 0 {
                return Err(ChunkError::TrailingChunks(trailing));
            }
            return Ok(RawBlob::new(flags, data));
        }
    }

    Err(ChunkError::MissingTerminal)
}
