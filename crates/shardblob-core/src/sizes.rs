//! Chunk size arithmetic.
//!
//! A serialized blob is a run of fixed 32-byte chunks. Each chunk starts with
//! one indicator byte and carries up to 31 payload bytes. Everything here is
//! integer arithmetic over a payload length in bytes; there is no floating
//! point on any path, so results are exact for every `usize`.
//!
//! An empty payload occupies zero chunks and has a terminal length of zero.

/// Size of one serialized chunk in bytes.
pub const CHUNK_SIZE: usize = 32;

/// Size of the indicator byte that prefixes every chunk.
pub const INDICATOR_SIZE: usize = 1;

/// Number of payload bytes one chunk can carry.
pub const CHUNK_DATA_SIZE: usize = CHUNK_SIZE - INDICATOR_SIZE;

/// Number of chunks needed to carry `len` payload bytes.
///
/// Integer ceiling division by [`CHUNK_DATA_SIZE`], written so that it cannot
/// overflow near `usize::MAX`.
pub const fn num_chunks(len: usize) -> usize {
    len / CHUNK_DATA_SIZE + (len % CHUNK_DATA_SIZE != 0) as usize
}

/// Total serialized size in bytes of a `len`-byte payload.
///
/// Cannot overflow for any length an allocation can actually have
/// (`len <= isize::MAX`). Use [`checked_serialized_size`] for lengths read
/// from untrusted input.
pub const fn serialized_size(len: usize) -> usize {
    num_chunks(len) * CHUNK_SIZE
}

/// Like [`serialized_size`], but returns `None` instead of overflowing.
pub const fn checked_serialized_size(len: usize) -> Option<usize> {
    num_chunks(len).checked_mul(CHUNK_SIZE)
}

/// Number of real payload bytes in the last chunk.
///
/// In `1..=31` for any non-empty payload, `0` for an empty one.
pub const fn terminal_length(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    len - (num_chunks(len) - 1) * CHUNK_DATA_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert_eq!(CHUNK_SIZE, 32);
        assert_eq!(INDICATOR_SIZE, 1);
        assert_eq!(CHUNK_DATA_SIZE, 31);
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(num_chunks(0), 0);
        assert_eq!(serialized_size(0), 0);
        assert_eq!(terminal_length(0), 0);
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(num_chunks(1), 1);
        assert_eq!(serialized_size(1), 32);
        assert_eq!(terminal_length(1), 1);
    }

    #[test]
    fn test_exactly_one_chunk() {
        assert_eq!(num_chunks(31), 1);
        assert_eq!(terminal_length(31), 31);
        assert_eq!(serialized_size(31), 32);
    }

    #[test]
    fn test_one_past_a_chunk() {
        assert_eq!(num_chunks(32), 2);
        assert_eq!(terminal_length(32), 1);
        assert_eq!(serialized_size(32), 64);
    }

    #[test]
    fn test_two_full_chunks() {
        assert_eq!(num_chunks(62), 2);
        assert_eq!(terminal_length(62), 31);
        assert_eq!(serialized_size(62), 64);
    }

    #[test]
    fn test_large_payload() {
        let len = 31 * 1000 + 5;
        assert_eq!(num_chunks(len), 1001);
        assert_eq!(terminal_length(len), 5);
        assert_eq!(serialized_size(len), 1001 * 32);
    }

    #[test]
    fn test_near_usize_max() {
        // Would be off by one with f64 division at this magnitude.
        let len = usize::MAX - 3;
        let expected = len / 31 + (len % 31 != 0) as usize;
        assert_eq!(num_chunks(len), expected);
        assert_eq!(num_chunks(usize::MAX), usize::MAX / 31 + 1);
        assert!(terminal_length(usize::MAX) >= 1);
        assert!(terminal_length(usize::MAX) <= 31);
    }

    #[test]
    fn test_checked_serialized_size() {
        assert_eq!(checked_serialized_size(0), Some(0));
        assert_eq!(checked_serialized_size(32), Some(64));
        assert_eq!(checked_serialized_size(usize::MAX), None);
        assert!(checked_serialized_size(isize::MAX as usize).is_some());
    }

    #[test]
    fn test_usable_in_const_context() {
        const SIZE: usize = serialized_size(100);
        let buf = [0u8; SIZE];
        assert_eq!(buf.len(), 128);
    }

    proptest! {
        #[test]
        fn prop_size_is_chunk_multiple(len in 1usize..1_000_000) {
            prop_assert_eq!(serialized_size(len), num_chunks(len) * CHUNK_SIZE);
            let terminal = terminal_length(len);
            prop_assert!((1..=CHUNK_DATA_SIZE).contains(&terminal));
        }

        #[test]
        fn prop_chunks_cover_payload(len in 1usize..1_000_000) {
            let chunks = num_chunks(len);
            prop_assert_eq!((chunks - 1) * CHUNK_DATA_SIZE + terminal_length(len), len);
            prop_assert!(chunks * CHUNK_DATA_SIZE >= len);
            prop_assert!((chunks - 1) * CHUNK_DATA_SIZE < len);
        }
    }
}
