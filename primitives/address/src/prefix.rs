use std::fmt;

use crate::{Error, Result};

/// Network identifier used when no chain-specific prefix is supplied.
pub const DEFAULT_SS58_PREFIX: u16 = 42;

/// Largest identifier representable by the two byte prefix form (14 bits).
pub const MAX_SS58_PREFIX: u16 = 0b0011_1111_1111_1111;

/// Identifiers up to this value are encoded in a single byte.
const MAX_SINGLE_BYTE_PREFIX: u16 = 63;

/// An SS58 network identifier.
///
/// Identifiers `0..=63` take one byte, `64..=16383` take two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct AddressPrefix(u16);

impl AddressPrefix {
    /// Validates `prefix` against the 14 bit identifier space.
    pub const fn new(prefix: u16) -> Result<Self> {
        if prefix > MAX_SS58_PREFIX {
            return Err(Error::InvalidPrefix(prefix));
        }
        Ok(Self(prefix))
    }

    /// Returns the numeric identifier.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Number of bytes the prefix takes inside an address.
    pub const fn encoded_len(self) -> usize {
        if self.0 <= MAX_SINGLE_BYTE_PREFIX {
            1
        } else {
            2
        }
    }

    /// Serializes the prefix into its one or two byte form.
    pub fn to_bytes(self) -> Vec<u8> {
        let ident = self.0;
        if ident <= MAX_SINGLE_BYTE_PREFIX {
            return vec![ident as u8];
        }
        // upper six bits of the lower byte go first, tagged with 0b01
        let first = ((ident & 0b0000_0000_1111_1100) as u8) >> 2;
        // lower two bits of the lower byte on top of the upper byte
        let second = ((ident >> 8) as u8) | ((ident & 0b0000_0000_0000_0011) as u8) << 6;
        vec![first | 0b0100_0000, second]
    }

    /// Parses the prefix at the start of a decoded address, returning it with its length.
    pub fn from_encoded(raw: &[u8]) -> Result<(Self, usize)> {
        match raw {
            [] => Err(Error::TruncatedAddress {
                expected: 1,
                actual: 0,
            }),
            [first @ 0..=63, ..] => Ok((Self(*first as u16), 1)),
            [first @ 64..=127, second, ..] => {
                // 01aaaaaa bbcccccc carries the identifier aaaaaabb 00cccccc (little endian)
                let lower = (first << 2) | (second >> 6);
                let upper = second & 0b0011_1111;
                Ok((Self(lower as u16 | (upper as u16) << 8), 2))
            }
            [64..=127] => Err(Error::TruncatedAddress {
                expected: 2,
                actual: 1,
            }),
            [first, ..] => Err(Error::InvalidPrefix(*first as u16)),
        }
    }
}

impl Default for AddressPrefix {
    fn default() -> Self {
        Self(DEFAULT_SS58_PREFIX)
    }
}

impl TryFrom<u16> for AddressPrefix {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AddressPrefix> for u16 {
    fn from(value: AddressPrefix) -> Self {
        value.0
    }
}

impl fmt::Display for AddressPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
