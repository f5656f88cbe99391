//! Proptest generators for property-based testing.

use proptest::prelude::*;

use shardblob_core::{Chunk, Flags, RawBlob, CHUNK_DATA_SIZE};

use crate::fixtures::SampleTransaction;

/// Generate flags.
pub fn flags() -> impl Strategy<Value = Flags> {
    any::<bool>().prop_map(Flags::new)
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a non-empty payload of specified max length.
pub fn non_empty_payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=max_len.max(1))
}

/// Payload lengths clustered around chunk boundaries.
pub fn boundary_length() -> impl Strategy<Value = usize> {
    (0usize..64, -1isize..=1).prop_map(|(chunks, delta)| {
        (chunks * CHUNK_DATA_SIZE).saturating_add_signed(delta)
    })
}

/// Generate a raw blob.
pub fn raw_blob(max_len: usize) -> impl Strategy<Value = RawBlob> {
    (flags(), payload(max_len)).prop_map(|(flags, data)| RawBlob::new(flags, data))
}

/// Generate a well-formed terminal chunk.
pub fn terminal_chunk() -> impl Strategy<Value = Chunk> {
    (flags(), non_empty_payload(CHUNK_DATA_SIZE)).prop_map(|(flags, data)| {
        Chunk::terminal(flags, &data).expect("length is 1..=31")
    })
}

/// Generate a sample transaction.
pub fn sample_transaction() -> impl Strategy<Value = SampleTransaction> {
    (any::<u64>(), "0x[0-9a-f]{40}", any::<u64>(), payload(256)).prop_map(
        |(nonce, to, value, data)| SampleTransaction {
            nonce,
            to,
            value,
            data,
        },
    )
}

/// Parameters for generating a blob.
#[derive(Debug, Clone)]
pub struct BlobParams {
    pub skip_evm_execution: bool,
    pub payload: Vec<u8>,
}

impl BlobParams {
    pub fn raw_blob(&self) -> RawBlob {
        RawBlob::new(Flags::new(self.skip_evm_execution), self.payload.clone())
    }
}

impl Arbitrary for BlobParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<bool>(), non_empty_payload(2000))
            .prop_map(|(skip_evm_execution, payload)| BlobParams {
                skip_evm_execution,
                payload,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardblob_core::{
        deserialize_blob, from_raw_blob, new_raw_blob, num_chunks, serialize_blob,
        serialized_size, terminal_length, CborCodec, CHUNK_SIZE,
    };

    proptest! {
        #[test]
        fn test_blob_roundtrip(params: BlobParams) {
            let blob = params.raw_blob();
            let bytes = serialize_blob(&blob);

            prop_assert_eq!(bytes.len(), serialized_size(params.payload.len()));
            prop_assert_eq!(deserialize_blob(&bytes).unwrap(), blob);
        }

        #[test]
        fn test_serialization_deterministic(params: BlobParams) {
            let b1 = serialize_blob(&params.raw_blob());
            let b2 = serialize_blob(&params.raw_blob());
            prop_assert_eq!(b1, b2);
        }

        #[test]
        fn test_every_chunk_carries_flags(params: BlobParams) {
            let blob = params.raw_blob();
            for chunk in blob.chunks() {
                prop_assert_eq!(chunk.flags(), blob.flags());
                prop_assert!(!chunk.has_reserved_bits());
            }
        }

        #[test]
        fn test_boundary_arithmetic(len in boundary_length()) {
            prop_assert_eq!(serialized_size(len), num_chunks(len) * CHUNK_SIZE);
            if len == 0 {
                prop_assert_eq!(terminal_length(len), 0);
            } else {
                prop_assert!((1..=CHUNK_DATA_SIZE).contains(&terminal_length(len)));
            }
        }

        #[test]
        fn test_terminal_chunk_is_terminal(chunk in terminal_chunk()) {
            prop_assert!(chunk.is_terminal());
            prop_assert!(chunk.padding().iter().all(|&b| b == 0));
        }

        #[test]
        fn test_transaction_roundtrip(tx in sample_transaction(), skip_evm in any::<bool>()) {
            let blob = new_raw_blob(&CborCodec, &tx, skip_evm).unwrap();
            prop_assert_eq!(blob.flags().skip_evm_execution, skip_evm);

            let parsed = deserialize_blob(&serialize_blob(&blob)).unwrap();
            let decoded: SampleTransaction = from_raw_blob(&CborCodec, &parsed).unwrap();
            prop_assert_eq!(decoded, tx);
        }

        #[test]
        fn test_raw_blob_sizes(blob in raw_blob(500)) {
            prop_assert_eq!(blob.chunks().len(), num_chunks(blob.len()));
        }
    }
}
