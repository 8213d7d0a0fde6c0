use thiserror::Error;

use crate::AddressPrefix;

/// Address codec error handling implementor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains a character outside of the base58 alphabet.
    #[error("invalid base58 character {character:?} at index {index}")]
    MalformedEncoding { character: char, index: usize },

    /// The trailing checksum does not match the one computed from the prefix and payload.
    #[error("checksum mismatch, expected {expected:02x?}, but received {received:02x?} instead")]
    ChecksumMismatch { expected: [u8; 2], received: [u8; 2] },

    /// The decoded address is too short to hold a prefix, a payload and a checksum.
    #[error("address is truncated, expected at least {expected} bytes, but decoded {actual}")]
    TruncatedAddress { expected: usize, actual: usize },

    /// The decoded payload does not have the length the caller requires.
    #[error("payload has length {actual}, instead of {expected}")]
    InvalidPayloadLength { expected: usize, actual: usize },

    /// Hex input (H160 address or public key) is malformed.
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(String),

    /// The network identifier cannot be represented in the SS58 format.
    #[error("invalid SS58 prefix {0}")]
    InvalidPrefix(u16),

    /// The address belongs to a different network than the one requested.
    #[error("address prefix {actual} does not match the expected prefix {expected}")]
    PrefixMismatch {
        expected: AddressPrefix,
        actual: AddressPrefix,
    },

    /// Mixed-case H160 input that does not match its EIP-55 checksum.
    #[error("mixed-case address {0} does not match its EIP-55 checksum")]
    InvalidH160Checksum(String),
}

impl Error {
    /// Returns `true` for errors raised on well-formed input whose contents are
    /// corrupted or belong to another network, as opposed to input format errors.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            Error::ChecksumMismatch { .. }
                | Error::TruncatedAddress { .. }
                | Error::PrefixMismatch { .. }
                | Error::InvalidH160Checksum(_)
        )
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidHexEncoding(err.to_string())
    }
}
