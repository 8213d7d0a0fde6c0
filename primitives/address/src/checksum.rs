//! SS58 checksum, BLAKE2b-512 over a context tag and the prefixed payload.

/// Context tag mixed into every SS58 checksum.
pub const SS58_CONTEXT: &[u8; 7] = b"SS58PRE";

/// Checksum length for 32 byte payloads.
pub const CHECKSUM_LENGTH: usize = 2;

/// Output length of the checksum hash, in bytes.
const CHECKSUM_HASH_LENGTH: usize = 64;

/// Returns the first `length` bytes of `BLAKE2b-512(SS58PRE ++ prefixed_payload)`.
///
/// # Panics
///
/// Panics if `length` is larger than the 64 byte digest.
pub fn checksum(prefixed_payload: &[u8], length: usize) -> Vec<u8> {
    assert!(
        length <= CHECKSUM_HASH_LENGTH,
        "checksum length {length} exceeds the digest length"
    );
    let hash = blake2b_simd::Params::new()
        .hash_length(CHECKSUM_HASH_LENGTH)
        .to_state()
        .update(SS58_CONTEXT)
        .update(prefixed_payload)
        .finalize();
    hash.as_bytes()[..length].to_vec()
}

/// The [`CHECKSUM_LENGTH`] checksum used by SS58 addresses.
pub fn ss58_checksum(prefixed_payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut result = [0; CHECKSUM_LENGTH];
    result.copy_from_slice(&checksum(prefixed_payload, CHECKSUM_LENGTH));
    result
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::{checksum, ss58_checksum, CHECKSUM_LENGTH};

    const ZERO_KEY_PREFIX_42: [u8; 33] = {
        let mut bytes = [0; 33];
        bytes[0] = 42;
        bytes
    };

    const ALICE_PREFIX_42: [u8; 33] =
        hex!("2ad43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");

    #[test]
    fn pinned_checksums() {
        assert_eq!(ss58_checksum(&ZERO_KEY_PREFIX_42), hex!("a600"));
        assert_eq!(ss58_checksum(&ALICE_PREFIX_42), hex!("1d21"));
    }

    #[test]
    fn checksum_is_a_digest_prefix() {
        let long = checksum(&ALICE_PREFIX_42, 64);
        assert_eq!(long.len(), 64);
        assert_eq!(&long[..CHECKSUM_LENGTH], &ss58_checksum(&ALICE_PREFIX_42));
        assert!(checksum(&ALICE_PREFIX_42, 0).is_empty());
    }

    // Hashing the payload without the context tag yields addresses that look
    // fine but are rejected by every other SS58 implementation.
    #[test]
    fn context_tag_is_part_of_the_checksum() {
        for payload in [&ZERO_KEY_PREFIX_42, &ALICE_PREFIX_42] {
            let untagged = blake2b_simd::blake2b(payload);
            assert_ne!(&untagged.as_bytes()[..2], &ss58_checksum(payload));
        }
        assert_eq!(
            &blake2b_simd::blake2b(&ZERO_KEY_PREFIX_42).as_bytes()[..2],
            &hex!("bd28")
        );
    }

    #[test]
    #[should_panic(expected = "exceeds the digest length")]
    fn oversized_checksum_panics() {
        checksum(&ALICE_PREFIX_42, 65);
    }
}
