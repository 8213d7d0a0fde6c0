//! Conversions between public keys, SS58 addresses and H160 addresses.
//!
//! Only [`public_key_to_ss58`] and [`ss58_to_public_key`] are inverses of each
//! other. [`h160_to_ss58`] is a one-way mapping and [`ss58_to_h160_lossy`]
//! discards information, neither undoes the other.

use crate::{
    account::{PublicKey, PUBLIC_KEY_LENGTH},
    h160::{H160, H160_LENGTH},
    ss58::{self, Ss58Address},
    AddressPrefix, Result,
};

/// Tag prepended to an H160 address before hashing it into an account ID.
pub const EVM_ACCOUNT_TAG: &[u8; 4] = b"evm:";

/// Encodes a public key as an SS58 address.
pub fn public_key_to_ss58(public_key: &PublicKey, prefix: AddressPrefix) -> Ss58Address {
    Ss58Address::new(*public_key, prefix)
}

/// Decodes the public key held by an SS58 address, the payload must be exactly 32 bytes.
pub fn ss58_to_public_key(address: &str) -> Result<PublicKey> {
    let (_, payload) = ss58::decode(address)?;
    PublicKey::try_from(payload.as_slice())
}

/// Same as [`ss58_to_public_key`] but the address must belong to the `expected` network.
pub fn ss58_to_public_key_with_prefix(
    address: &str,
    expected: AddressPrefix,
) -> Result<PublicKey> {
    let payload = ss58::decode_with_prefix(address, expected)?;
    PublicKey::try_from(payload.as_slice())
}

/// Returns the last 20 bytes of the public key behind `address`.
///
/// This is a display convenience, not a derivation: the first 12 bytes of the
/// key are dropped, so many addresses map to the same H160 and the H160 cannot
/// be mapped back. It is NOT the account [`h160_to_ss58`] produces for the
/// returned H160.
pub fn ss58_to_h160_lossy(address: &str) -> Result<H160> {
    let public_key = ss58_to_public_key(address)?;
    Ok(truncate_to_h160(&public_key))
}

/// Last 20 bytes of a public key.
pub fn truncate_to_h160(public_key: &PublicKey) -> H160 {
    let mut h160 = [0; H160_LENGTH];
    h160.copy_from_slice(&public_key.as_bytes()[PUBLIC_KEY_LENGTH - H160_LENGTH..]);
    tracing::trace!(
        discarded = PUBLIC_KEY_LENGTH - H160_LENGTH,
        "truncating public key to an H160 address"
    );
    H160(h160)
}

/// Account ID the runtime assigns to an EVM address, `BLAKE2b-256("evm:" ++ h160)`.
///
/// The result is not a public key, nobody holds a secret key for it.
pub fn evm_account_id(h160: &H160) -> PublicKey {
    let hash = blake2b_simd::Params::new()
        .hash_length(PUBLIC_KEY_LENGTH)
        .to_state()
        .update(EVM_ACCOUNT_TAG)
        .update(h160.as_bytes())
        .finalize();
    let mut account = [0; PUBLIC_KEY_LENGTH];
    account.copy_from_slice(hash.as_bytes());
    PublicKey(account)
}

/// SS58 address of the account mapped to an EVM address.
pub fn h160_to_ss58(h160: &H160, prefix: AddressPrefix) -> Ss58Address {
    Ss58Address::new(evm_account_id(h160), prefix)
}
