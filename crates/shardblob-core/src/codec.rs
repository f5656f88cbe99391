//! Structured encoding capability and the raw blob codec.
//!
//! Chunking does not care how a value becomes bytes. [`Encoder`] and
//! [`Decoder`] describe that step for a value type `T`; [`new_raw_blob`]
//! and [`from_raw_blob`] run it and wrap failures in [`CodecError`].
//! [`crate::CborCodec`] is the stock implementation.

use crate::blob::RawBlob;
use crate::error::CodecError;
use crate::flags::Flags;

/// Turns a `T` into bytes.
pub trait Encoder<T: ?Sized> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encode a value. Must be deterministic.
    fn encode(&self, value: &T) -> Result<Vec<u8>, Self::Error>;
}

/// Reads a `T` back from bytes.
pub trait Decoder<T> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decode a value, failing on truncated, malformed or mismatched input.
    fn decode(&self, bytes: &[u8]) -> Result<T, Self::Error>;
}

impl<T: ?Sized, E: Encoder<T> + ?Sized> Encoder<T> for &E {
    type Error = E::Error;

    fn encode(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        (**self).encode(value)
    }
}

impl<T, D: Decoder<T> + ?Sized> Decoder<T> for &D {
    type Error = D::Error;

    fn decode(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        (**self).decode(bytes)
    }
}

/// Encode `value` and wrap it in a [`RawBlob`] carrying the given flag.
pub fn new_raw_blob<T, E>(
    encoder: &E,
    value: &T,
    skip_evm_execution: bool,
) -> Result<RawBlob, CodecError>
where
    T: ?Sized,
    E: Encoder<T> + ?Sized,
{
    let data = encoder.encode(value).map_err(CodecError::encoding)?;
    Ok(RawBlob::new(Flags::new(skip_evm_execution), data))
}

/// Decode the payload of `blob` as a `T`. The blob's flags are not consulted.
pub fn from_raw_blob<T, D>(decoder: &D, blob: &RawBlob) -> Result<T, CodecError>
where
    D: Decoder<T> + ?Sized,
{
    decoder.decode(blob.data()).map_err(CodecError::decoding)
}
