//! Golden test vectors for the chunk layout.
//!
//! Every implementation of the blob layout must turn these payloads into
//! exactly these bytes.

use shardblob_core::{deserialize_blob, serialize_blob, Flags, RawBlob};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Whether the skip-EVM flag is set.
    pub skip_evm_execution: bool,
    /// Payload bytes.
    pub payload: &'static [u8],
    /// Expected serialized chunks (hex).
    pub expected_hex: &'static str,
}

impl GoldenVector {
    /// The raw blob this vector describes.
    pub fn raw_blob(&self) -> RawBlob {
        RawBlob::new(Flags::new(self.skip_evm_execution), self.payload.to_vec())
    }

    /// Expected serialized bytes.
    pub fn expected_bytes(&self) -> Vec<u8> {
        hex::decode(self.expected_hex).unwrap_or_default()
    }
}

/// `0x00..=0x1f`: one byte past a full chunk.
const COUNTING_32: [u8; 32] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f,
];

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty payload",
            skip_evm_execution: false,
            payload: b"",
            expected_hex: "",
        },
        GoldenVector {
            name: "single byte",
            skip_evm_execution: false,
            payload: &[0xab],
            expected_hex: "01ab000000000000000000000000000000000000000000000000000000000000",
        },
        GoldenVector {
            name: "single byte with skip evm",
            skip_evm_execution: true,
            payload: &[0xab],
            expected_hex: "81ab000000000000000000000000000000000000000000000000000000000000",
        },
        GoldenVector {
            name: "exactly one full chunk",
            skip_evm_execution: false,
            payload: &[0x11; 31],
            expected_hex: "1f11111111111111111111111111111111111111111111111111111111111111",
        },
        GoldenVector {
            name: "one byte past a chunk",
            skip_evm_execution: false,
            payload: &COUNTING_32,
            expected_hex: concat!(
                "00000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e",
                "011f000000000000000000000000000000000000000000000000000000000000",
            ),
        },
        GoldenVector {
            name: "two full chunks with skip evm",
            skip_evm_execution: true,
            payload: &[0xff; 62],
            expected_hex: concat!(
                "80ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
                "9fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            ),
        },
    ]
}

/// Check every vector against [`serialize_blob`] and [`deserialize_blob`].
///
/// Returns `(name, matches, actual_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let blob = v.raw_blob();
            let bytes = serialize_blob(&blob);
            let hex = hex::encode(&bytes);

            // Empty payloads lose their flags, so only compare the data there.
            let parsed = deserialize_blob(&bytes);
            let roundtrips = match parsed {
                Ok(parsed) if blob.is_empty() => parsed.is_empty(),
                Ok(parsed) => parsed == blob,
                Err(_) => false,
            };

            (v.name.to_string(), hex == v.expected_hex && roundtrips, hex)
        })
        .collect()
}
