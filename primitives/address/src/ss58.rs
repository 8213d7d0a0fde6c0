//! SS58 address composition: `base58(prefix ++ payload ++ checksum)`.
//!
//! See the [SS58 format](https://docs.substrate.io/reference/address-formats/)
//! for the layout of the prefix bytes.

use std::{fmt, str::FromStr};

use crate::{
    account::{PublicKey, PUBLIC_KEY_LENGTH},
    base58,
    checksum::{ss58_checksum, CHECKSUM_LENGTH},
    AddressPrefix, Error, Result,
};

/// Encodes `payload` as an SS58 address for the network `prefix`.
pub fn encode(prefix: AddressPrefix, payload: &[u8]) -> String {
    let mut raw = prefix.to_bytes();
    raw.reserve(payload.len() + CHECKSUM_LENGTH);
    raw.extend_from_slice(payload);
    let checksum = ss58_checksum(&raw);
    raw.extend_from_slice(&checksum);
    base58::encode(raw)
}

/// Decodes an SS58 address into its network prefix and payload.
///
/// The payload is everything between the prefix and the checksum, it must
/// be at least 32 bytes long.
pub fn decode(address: &str) -> Result<(AddressPrefix, Vec<u8>)> {
    let raw = base58::decode(address)?;
    let (prefix, prefix_len) = AddressPrefix::from_encoded(&raw)?;

    let minimum_len = prefix_len + PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH;
    if raw.len() < minimum_len {
        tracing::debug!(address, length = raw.len(), "truncated ss58 address");
        return Err(Error::TruncatedAddress {
            expected: minimum_len,
            actual: raw.len(),
        });
    }

    let (body, received) = raw.split_at(raw.len() - CHECKSUM_LENGTH);
    let expected = ss58_checksum(body);
    if expected != received {
        tracing::debug!(address, "ss58 checksum mismatch");
        return Err(Error::ChecksumMismatch {
            expected,
            received: [received[0], received[1]],
        });
    }

    Ok((prefix, body[prefix_len..].to_vec()))
}

/// Like [`decode`], but rejects addresses that belong to another network.
pub fn decode_with_prefix(address: &str, expected: AddressPrefix) -> Result<Vec<u8>> {
    let (actual, payload) = decode(address)?;
    if actual != expected {
        return Err(Error::PrefixMismatch { expected, actual });
    }
    Ok(payload)
}

/// A string that is known to be a valid SS58 address carrying a 32 byte key.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ss58Address {
    address: String,
    prefix: AddressPrefix,
    public_key: PublicKey,
}

impl Ss58Address {
    /// Encodes `public_key` for the network `prefix`.
    pub fn new(public_key: PublicKey, prefix: AddressPrefix) -> Self {
        Self {
            address: encode(prefix, public_key.as_bytes()),
            prefix,
            public_key,
        }
    }

    /// Validates an SS58 string holding exactly a 32 byte payload.
    pub fn parse(address: &str) -> Result<Self> {
        let (prefix, payload) = decode(address)?;
        let public_key = PublicKey::try_from(payload.as_slice())?;
        Ok(Self {
            address: address.to_string(),
            prefix,
            public_key,
        })
    }

    pub fn prefix(&self) -> AddressPrefix {
        self.prefix
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Re-encodes the same key for another network.
    pub fn with_prefix(&self, prefix: AddressPrefix) -> Self {
        Self::new(self.public_key, prefix)
    }
}

impl FromStr for Ss58Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Ss58Address {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

impl From<Ss58Address> for String {
    fn from(value: Ss58Address) -> Self {
        value.address
    }
}

impl fmt::Debug for Ss58Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ss58Address").field(&self.address).finish()
    }
}

impl fmt::Display for Ss58Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Ss58Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.address)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ss58Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(|e| {
            serde::de::Error::custom(format!(
                "failed to parse SS58 address, check that the input is a valid address: {e}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::{decode, decode_with_prefix, encode, Ss58Address};
    use crate::{base58, AddressPrefix, Error, PublicKey};

    const ALICE: [u8; 32] =
        hex!("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");

    const ZERO_42: &str = "5C4hrfjw9DjXZTzV3MwzrrAr9P1MJhSrvWGWqi1eSuyUpnhM";
    const ALICE_42: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

    fn prefix(value: u16) -> AddressPrefix {
        AddressPrefix::new(value).unwrap()
    }

    #[rstest]
    #[case(42, [0; 32], ZERO_42)]
    #[case(0, [0; 32], "111111111111111111111111111111111HC1")]
    #[case(2, [0; 32], "CaKWz5omakTK7ovp4m3koXrHyHb7NG3Nt7GENHbviByZpKp")]
    #[case(42, ALICE, ALICE_42)]
    #[case(0, ALICE, "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5")]
    #[case(2, ALICE, "HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F")]
    #[case(255, ALICE, "yGHXkYLYqxijLKKfd9Q2CB9shRVu8rPNBS53wvwGTutYg4zTg")]
    #[case(1284, ALICE, "VdvKmYJfD4VXA9fzz1SbmCo2eYHSzUFbaDCZSuaNKJAe8YNg6")]
    #[case(16383, ALICE, "yNa8JpqfFB3q8A29rCwSgxvdU94ufJw2yKKxDgznS5m1PoFvn")]
    fn known_addresses(#[case] network: u16, #[case] key: [u8; 32], #[case] address: &str) {
        assert_eq!(encode(prefix(network), &key), address);
        assert_eq!(decode(address).unwrap(), (prefix(network), key.to_vec()));
    }

    #[test]
    fn invalid_character() {
        let address = ALICE_42.replacen('G', "0", 1);
        assert_eq!(
            decode(&address),
            Err(Error::MalformedEncoding {
                character: '0',
                index: 1
            })
        );
    }

    #[test]
    fn tampered_last_byte() {
        let mut raw = base58::decode(ALICE_42).unwrap();
        *raw.last_mut().unwrap() ^= 0x01;
        let tampered = base58::encode(&raw);
        assert_eq!(
            decode(&tampered),
            Err(Error::ChecksumMismatch {
                expected: hex!("1d21"),
                received: hex!("1d20"),
            })
        );
    }

    #[test]
    fn every_single_bit_flip_is_detected() {
        let raw = base58::decode(ALICE_42).unwrap();
        // skip the prefix byte, flipping it changes the network instead
        for byte in 1..raw.len() {
            for bit in 0..8 {
                let mut corrupted = raw.clone();
                corrupted[byte] ^= 1 << bit;
                let result = decode(&base58::encode(&corrupted));
                assert!(
                    matches!(result, Err(Error::ChecksumMismatch { .. })),
                    "byte {byte} bit {bit}: {result:?}"
                );
            }
        }
    }

    #[test]
    fn truncated_address() {
        let raw = base58::decode(ALICE_42).unwrap();
        let truncated = base58::encode(&raw[..raw.len() - 1]);
        assert_eq!(
            decode(&truncated),
            Err(Error::TruncatedAddress {
                expected: 35,
                actual: 34
            })
        );
        assert_eq!(
            decode(""),
            Err(Error::TruncatedAddress {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn untagged_checksum_is_rejected() {
        let mut raw = vec![42];
        raw.extend_from_slice(&ALICE);
        let untagged = blake2b_simd::blake2b(&raw);
        raw.extend_from_slice(&untagged.as_bytes()[..2]);
        assert!(matches!(
            decode(&base58::encode(&raw)),
            Err(Error::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn prefix_must_match_when_requested() {
        assert_eq!(
            decode_with_prefix(ALICE_42, prefix(42)).unwrap(),
            ALICE.to_vec()
        );
        assert_eq!(
            decode_with_prefix(ALICE_42, prefix(0)),
            Err(Error::PrefixMismatch {
                expected: prefix(0),
                actual: prefix(42)
            })
        );
    }

    #[test]
    fn longer_payloads_are_returned_whole() {
        let payload = [7u8; 33];
        let address = encode(prefix(42), &payload);
        assert_eq!(decode(&address).unwrap().1, payload.to_vec());
        assert_eq!(
            Ss58Address::parse(&address),
            Err(Error::InvalidPayloadLength {
                expected: 32,
                actual: 33
            })
        );
    }

    #[test]
    fn typed_address() {
        let address: Ss58Address = ALICE_42.parse().unwrap();
        assert_eq!(address.prefix(), AddressPrefix::default());
        assert_eq!(address.public_key(), &PublicKey(ALICE));
        assert_eq!(address.to_string(), ALICE_42);
        assert_eq!(
            address.with_prefix(prefix(0)).as_str(),
            "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"
        );
        assert_eq!(Ss58Address::new(PublicKey(ALICE), prefix(42)), address);
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(key in any::<[u8; 32]>(), network in 0u16..=16383) {
            let network = prefix(network);
            let address = encode(network, &key);
            prop_assert_eq!(decode(&address).unwrap(), (network, key.to_vec()));
        }
    }
}
