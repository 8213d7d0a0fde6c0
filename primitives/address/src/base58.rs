//! Base58 encoding over the Bitcoin alphabet.
//!
//! The input is treated as a big-endian unsigned integer, every leading zero
//! byte is kept as a literal leading `1`.

use crate::{Error, Result};

/// The Bitcoin base58 alphabet, `0`, `O`, `I` and `l` are excluded.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes `bytes` as base58.
pub fn encode<B: AsRef<[u8]>>(bytes: B) -> String {
    bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decodes a base58 string into the bytes it represents.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    bs58::decode(encoded)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|err| malformed(encoded, err))
}

fn malformed(encoded: &str, err: bs58::decode::Error) -> Error {
    match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            Error::MalformedEncoding { character, index }
        }
        // Every byte before `index` is ASCII, so `index` is a char boundary.
        bs58::decode::Error::NonAsciiCharacter { index } => Error::MalformedEncoding {
            character: encoded[index..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        },
        // `into_vec` sizes its own buffer, there is nothing else to report
        _ => Error::MalformedEncoding {
            character: char::REPLACEMENT_CHARACTER,
            index: 0,
        },
    }
}
