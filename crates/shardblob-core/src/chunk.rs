//! The fixed-size chunk.
//!
//! A [`Chunk`] is 32 bytes: one indicator byte followed by 31 data bytes.
//! Non-terminal chunks are always full and have a data-length field of zero.
//! The terminal chunk stores its data length (1..=31) in the field, so a full
//! terminal chunk reads `0b11111`. Bytes past the valid data are zero.

use std::fmt;

use crate::error::ChunkError;
use crate::flags::{Flags, DATA_LENGTH_BITS, RESERVED_BITS};
use crate::sizes::{CHUNK_DATA_SIZE, CHUNK_SIZE, INDICATOR_SIZE};

/// One 32-byte chunk of a serialized blob.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk(pub [u8; CHUNK_SIZE]);

impl Chunk {
    /// Create a chunk from its raw bytes. No validation is done.
    pub const fn from_bytes(bytes: [u8; CHUNK_SIZE]) -> Self {
        Self(bytes)
    }

    /// A non-terminal chunk carrying 31 data bytes.
    pub fn full(flags: Flags, data: &[u8; CHUNK_DATA_SIZE]) -> Self {
        Self::pack(flags, data, false)
    }

    /// The last chunk of a blob, carrying 1 to 31 data bytes.
    pub fn terminal(flags: Flags, data: &[u8]) -> Result<Self, ChunkError> {
        if data.is_empty() || data.len() > CHUNK_DATA_SIZE {
            return Err(ChunkError::InvalidTerminalLength(data.len()));
        }
        Ok(Self::pack(flags, data, true))
    }

    /// Caller guarantees `data.len() <= 31`, and `== 31` when not terminal.
    pub(crate) fn pack(flags: Flags, data: &[u8], terminal: bool) -> Self {
        debug_assert!(data.len() <= CHUNK_DATA_SIZE);
        debug_assert!(terminal || data.len() == CHUNK_DATA_SIZE);

        let mut bytes = [0u8; CHUNK_SIZE];
        let length_field = if terminal { data.len() as u8 } else { 0 };
        bytes[0] = flags.to_bits() | length_field;
        bytes[INDICATOR_SIZE..INDICATOR_SIZE + data.len()].copy_from_slice(data);
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; CHUNK_SIZE] {
        &self.0
    }

    pub const fn indicator(&self) -> u8 {
        self.0[0]
    }

    pub const fn flags(&self) -> Flags {
        Flags::from_indicator(self.indicator())
    }

    /// The raw 5-bit data-length field. Zero on non-terminal chunks.
    pub const fn data_length_field(&self) -> u8 {
        self.indicator() & DATA_LENGTH_BITS
    }

    pub const fn is_terminal(&self) -> bool {
        self.data_length_field() != 0
    }

    pub const fn has_reserved_bits(&self) -> bool {
        self.indicator() & RESERVED_BITS != 0
    }

    /// Number of valid data bytes in this chunk.
    pub const fn data_len(&self) -> usize {
        if self.is_terminal() {
            self.data_length_field() as usize
        } else {
            CHUNK_DATA_SIZE
        }
    }

    /// The valid data bytes.
    pub fn data(&self) -> &[u8] {
        &self.0[INDICATOR_SIZE..INDICATOR_SIZE + self.data_len()]
    }

    /// Bytes after the valid data. Empty unless this is a short terminal chunk.
    pub fn padding(&self) -> &[u8] {
        &self.0[INDICATOR_SIZE + self.data_len()..]
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk(indicator={:#04x}, data={})",
            self.indicator(),
            hex::encode(self.data())
        )
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; CHUNK_SIZE]> for Chunk {
    fn from(bytes: [u8; CHUNK_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Chunk {
    type Error = ChunkError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; CHUNK_SIZE] = slice
            .try_into()
            .map_err(|_| ChunkError::InvalidChunkSize(slice.len()))?;
        Ok(Self(arr))
    }
}
