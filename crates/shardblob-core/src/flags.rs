//! Chunk flags and the indicator-byte bit masks.
//!
//! Indicator byte layout:
//!
//! ```text
//!   bit  7     6 5        4 3 2 1 0
//!      [skip] [reserved] [data length]
//! ```

use serde::{Deserialize, Serialize};

/// Indicator bit set when EVM execution should be skipped for the blob.
pub const SKIP_EVM_BITS: u8 = 0x80;

/// Indicator bits holding the chunk's data-length field.
pub const DATA_LENGTH_BITS: u8 = 0x1F;

/// Indicator bits that carry no meaning yet and must be zero.
pub const RESERVED_BITS: u8 = !(SKIP_EVM_BITS | DATA_LENGTH_BITS);

/// Options serialized into the high bits of every chunk's indicator byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    /// Whether consumers should skip EVM execution of this blob.
    pub skip_evm_execution: bool,
}

impl Flags {
    /// No flags set.
    pub const NONE: Self = Self {
        skip_evm_execution: false,
    };

    /// Create flags.
    pub const fn new(skip_evm_execution: bool) -> Self {
        Self { skip_evm_execution }
    }

    /// Indicator bits for these flags. The data-length bits are always zero.
    pub const fn to_bits(self) -> u8 {
        if self.skip_evm_execution {
            SKIP_EVM_BITS
        } else {
            0
        }
    }

    /// Read the flags out of an indicator byte, ignoring every other bit.
    pub const fn from_indicator(indicator: u8) -> Self {
        Self {
            skip_evm_execution: indicator & SKIP_EVM_BITS != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_partition_the_byte() {
        assert_eq!(RESERVED_BITS, 0x60);
        assert_eq!(SKIP_EVM_BITS & DATA_LENGTH_BITS, 0);
        assert_eq!(SKIP_EVM_BITS | DATA_LENGTH_BITS | RESERVED_BITS, 0xFF);
    }

    #[test]
    fn test_to_bits() {
        assert_eq!(Flags::NONE.to_bits(), 0x00);
        assert_eq!(Flags::new(true).to_bits(), 0x80);
    }

    #[test]
    fn test_from_indicator_ignores_length() {
        assert_eq!(Flags::from_indicator(0x9f), Flags::new(true));
        assert_eq!(Flags::from_indicator(0x1f), Flags::NONE);
        assert_eq!(Flags::from_indicator(0x60), Flags::NONE);
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Flags::default(), Flags::NONE);
    }
}
