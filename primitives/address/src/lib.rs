//! Address codec for accounts shared between a Substrate chain and its EVM.
//!
//! Converts between raw 32 byte public keys, SS58 addresses and 20 byte H160
//! addresses. Every function is pure, nothing is cached between calls.
//!
//! ```
//! use primitives_address::{h160_to_ss58, ss58_to_public_key, AddressPrefix, H160};
//!
//! let h160: H160 = "0x0000000000000000000000000000000000000000".parse().unwrap();
//! let address = h160_to_ss58(&h160, AddressPrefix::default());
//! assert_eq!(address.as_str(), "5GU8HU4cLcmjpoXLNxWAHYViwbTQggdqd7ykp99CSWGbsZHG");
//! assert!(ss58_to_public_key(address.as_str()).is_ok());
//! ```

mod account;
pub mod base58;
pub mod checksum;
mod derive;
mod error;
mod h160;
mod prefix;
mod result;
pub mod ss58;

pub use account::{PublicKey, PUBLIC_KEY_LENGTH};
pub use derive::{
    evm_account_id, h160_to_ss58, public_key_to_ss58, ss58_to_h160_lossy, ss58_to_public_key,
    ss58_to_public_key_with_prefix, truncate_to_h160, EVM_ACCOUNT_TAG,
};
pub use error::Error;
pub use h160::{H160, H160_LENGTH};
pub use prefix::{AddressPrefix, DEFAULT_SS58_PREFIX, MAX_SS58_PREFIX};
pub use result::Result;
pub use ss58::Ss58Address;
