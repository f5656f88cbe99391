//! Test fixtures and helpers.
//!
//! Sample payload types and codecs that always fail, for exercising error
//! paths.

use std::fmt;

use serde::{Deserialize, Serialize};
use shardblob_core::{Decoder, Encoder};

/// A transaction-shaped value to put in blobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTransaction {
    pub nonce: u64,
    pub to: String,
    pub value: u64,
    pub data: Vec<u8>,
}

impl SampleTransaction {
    /// A small transaction whose canonical CBOR fits in one chunk.
    pub fn minimal() -> Self {
        Self {
            nonce: 1,
            to: "ab".into(),
            value: 5,
            data: Vec::new(),
        }
    }

    /// A transaction with `data_len` bytes of call data.
    pub fn with_data(nonce: u64, data_len: usize) -> Self {
        Self {
            nonce,
            to: format!("0x{:040x}", nonce),
            value: nonce * 1_000,
            data: (0..data_len).map(|i| i as u8).collect(),
        }
    }
}

/// Canonical CBOR of [`SampleTransaction::minimal`] (hex).
pub const MINIMAL_TRANSACTION_CBOR: &str =
    "a462746f626162646461746180656e6f6e6365016576616c756505";

/// Serialized chunk of [`SampleTransaction::minimal`] with no flags (hex).
pub const MINIMAL_TRANSACTION_CHUNK: &str =
    "1ba462746f626162646461746180656e6f6e6365016576616c75650500000000";

/// `count` transactions with growing call data.
pub fn sample_transactions(count: usize) -> Vec<SampleTransaction> {
    (0..count)
        .map(|i| SampleTransaction::with_data(i as u64, i * 17))
        .collect()
}

/// Error returned by [`FailingCodec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecRefused(pub &'static str);

impl fmt::Display for CodecRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "codec refused to {}", self.0)
    }
}

impl std::error::Error for CodecRefused {}

/// An encoder and decoder that rejects everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCodec;

impl<T: ?Sized> Encoder<T> for FailingCodec {
    type Error = CodecRefused;

    fn encode(&self, _value: &T) -> Result<Vec<u8>, CodecRefused> {
        Err(CodecRefused("encode"))
    }
}

impl<T> Decoder<T> for FailingCodec {
    type Error = CodecRefused;

    fn decode(&self, _bytes: &[u8]) -> Result<T, CodecRefused> {
        Err(CodecRefused("decode"))
    }
}
