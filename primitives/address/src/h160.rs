//! Ethereum style 20 byte addresses.

use std::{fmt, str::FromStr};

use tiny_keccak::{Hasher, Keccak};

use crate::{account::parse_hex, Error, Result};

/// Length of an H160 address, in bytes.
pub const H160_LENGTH: usize = 20;

/// A 20 byte EVM account address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct H160(pub [u8; H160_LENGTH]);

impl H160 {
    pub const fn new(bytes: [u8; H160_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; H160_LENGTH] {
        &self.0
    }

    /// Lowercase hex encoding with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Mixed-case [EIP-55](https://eips.ethereum.org/EIPS/eip-55) encoding.
    pub fn to_checksum_string(&self) -> String {
        let lowercase = hex::encode(self.0);
        let hash = keccak256(lowercase.as_bytes());

        let mut result = String::with_capacity(2 + H160_LENGTH * 2);
        result.push_str("0x");
        for (i, c) in lowercase.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if nibble >= 8 {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
        }
        result
    }

    /// Parses an address with an optional `0x` prefix and exactly 40 hex characters.
    ///
    /// Single-case input is accepted as is, mixed-case input must carry a
    /// valid EIP-55 checksum.
    pub fn from_hex(s: &str) -> Result<Self> {
        let address = Self(parse_hex(s)?);

        let digits = s.strip_prefix("0x").unwrap_or(s);
        let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper && address.to_checksum_string()[2..] != *digits {
            return Err(Error::InvalidH160Checksum(s.to_string()));
        }

        Ok(address)
    }
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut output = [0; 32];
    let mut hasher = Keccak::v256();
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

impl From<[u8; H160_LENGTH]> for H160 {
    fn from(bytes: [u8; H160_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for H160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for H160 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for H160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H160({})", self.to_hex())
    }
}

impl fmt::Display for H160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for H160 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for H160 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
