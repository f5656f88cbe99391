//! Deterministic CBOR encoding.
//!
//! This module implements RFC 8949 Core Deterministic Encoding for any
//! `serde` value:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats
//!
//! The same value always produces the same bytes, so the same value always
//! produces the same chunks. Decoding accepts any well-formed CBOR item but
//! rejects trailing bytes.

use ciborium::value::{Integer, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::codec::{Decoder, Encoder};

/// Errors from the CBOR codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CborError {
    #[error("value cannot be represented as CBOR: {0}")]
    Unrepresentable(String),

    #[error("floats are not supported in deterministic encoding")]
    UnsupportedFloat,

    #[error("unsupported CBOR value type")]
    UnsupportedValue,

    #[error("malformed CBOR: {0}")]
    Malformed(String),

    #[error("{0} trailing byte(s) after CBOR item")]
    TrailingBytes(usize),

    #[error("CBOR item does not match the target type: {0}")]
    Mismatch(String),
}

/// [`Encoder`] and [`Decoder`] for every `serde` type, using deterministic CBOR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CborCodec;

impl<T: Serialize + ?Sized> Encoder<T> for CborCodec {
    type Error = CborError;

    fn encode(&self, value: &T) -> Result<Vec<u8>, CborError> {
        to_canonical_vec(value)
    }
}

impl<T: DeserializeOwned> Decoder<T> for CborCodec {
    type Error = CborError;

    fn decode(&self, bytes: &[u8]) -> Result<T, CborError> {
        from_slice(bytes)
    }
}

/// Encode a `serde` value to deterministic CBOR bytes.
pub fn to_canonical_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CborError> {
    let value = Value::serialized(value).map_err(|e| CborError::Unrepresentable(e.to_string()))?;
    canonical_bytes(&value)
}

/// Encode a CBOR value to deterministic bytes.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>, CborError> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value)?;
    Ok(buf)
}

/// Decode exactly one CBOR item from `bytes` as a `T`.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CborError> {
    let mut reader = bytes;
    let value: Value =
        ciborium::from_reader(&mut reader).map_err(|e| CborError::Malformed(e.to_string()))?;
    if !reader.is_empty() {
        return Err(CborError::TrailingBytes(reader.len()));
    }
    value
        .deserialized()
        .map_err(|e| CborError::Mismatch(e.to_string()))
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) -> Result<(), CborError> {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => {
            encode_uint(buf, 2, b.len() as u64);
            buf.extend_from_slice(b);
        }
        Value::Text(s) => {
            encode_uint(buf, 3, s.len() as u64);
            buf.extend_from_slice(s.as_bytes());
        }
        Value::Array(arr) => {
            encode_uint(buf, 4, arr.len() as u64);
            for item in arr {
                encode_value_to(buf, item)?;
            }
        }
        Value::Map(entries) => encode_map_canonical(buf, entries)?,
        Value::Tag(tag, inner) => {
            encode_uint(buf, 6, *tag);
            encode_value_to(buf, inner)?;
        }
        Value::Bool(b) => buf.push(if *b { 0xf5 } else { 0xf4 }),
        Value::Null => buf.push(0xf6),
        Value::Float(_) => return Err(CborError::UnsupportedFloat),
        _ => return Err(CborError::UnsupportedValue),
    }
    Ok(())
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a map with keys sorted by their encoded bytes (major type 5).
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) -> Result<(), CborError> {
    let mut pairs = Vec::with_capacity(entries.len());
    for (k, v) in entries {
        let mut key_buf = Vec::new();
        encode_value_to(&mut key_buf, k)?;
        pairs.push((key_buf, v));
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value)?;
    }
    Ok(())
}
