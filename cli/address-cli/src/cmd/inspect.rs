use primitives_address::{
    evm_account_id, h160_to_ss58, truncate_to_h160, AddressPrefix, Error, PublicKey, Ss58Address,
    H160, H160_LENGTH,
};
use serde::Serialize;

use crate::{error::CliError, output::Render};

/// Everything that can be derived from a single address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum Inspection {
    Ss58 {
        address: Ss58Address,
        prefix: AddressPrefix,
        public_key: PublicKey,
        /// Same key, encoded for the selected network.
        network_address: Ss58Address,
        /// Last 20 bytes of the key, cannot be mapped back.
        h160_lossy: String,
    },
    H160 {
        address: String,
        account_id: PublicKey,
        mapped_ss58: Ss58Address,
    },
}

impl Inspection {
    /// Classifies `input` as an H160 or SS58 address.
    ///
    /// Input shaped like hex is parsed as an H160 address, anything else as SS58.
    /// SS58 input with characters outside of the base58 alphabet is reported as
    /// [`CliError::UnrecognizedAddress`].
    pub(crate) fn new(input: &str, prefix: AddressPrefix) -> Result<Self, CliError> {
        if looks_like_h160(input) {
            let h160 = H160::from_hex(input).map_err(CliError::address(input))?;
            tracing::debug!(input, "inspecting H160 address");
            return Ok(Self::from_h160(&h160, prefix));
        }

        match Ss58Address::parse(input) {
            Ok(address) => {
                tracing::debug!(input, prefix = address.prefix().get(), "inspecting SS58 address");
                Ok(Self::from_ss58(address, prefix))
            }
            Err(Error::MalformedEncoding { .. }) => {
                Err(CliError::UnrecognizedAddress(input.to_string()))
            }
            Err(source) => Err(CliError::Address {
                input: input.to_string(),
                source,
            }),
        }
    }

    fn from_ss58(address: Ss58Address, network: AddressPrefix) -> Self {
        Inspection::Ss58 {
            prefix: address.prefix(),
            public_key: *address.public_key(),
            network_address: address.with_prefix(network),
            h160_lossy: truncate_to_h160(address.public_key()).to_checksum_string(),
            address,
        }
    }

    fn from_h160(h160: &H160, network: AddressPrefix) -> Self {
        Inspection::H160 {
            address: h160.to_checksum_string(),
            account_id: evm_account_id(h160),
            mapped_ss58: h160_to_ss58(h160, network),
        }
    }
}

impl Render for Inspection {
    fn plain(&self) -> String {
        match self {
            Inspection::Ss58 {
                address,
                prefix,
                public_key,
                network_address,
                h160_lossy,
            } => format!(
                "SS58 address:    {address}\n\
                 Prefix:          {prefix}\n\
                 Public key:      {public_key}\n\
                 Network address: {network_address}\n\
                 H160 (lossy):    {h160_lossy}"
            ),
            Inspection::H160 {
                address,
                account_id,
                mapped_ss58,
            } => format!(
                "H160 address:    {address}\n\
                 Account ID:      {account_id}\n\
                 Mapped SS58:     {mapped_ss58}"
            ),
        }
    }
}

fn looks_like_h160(input: &str) -> bool {
    input.starts_with("0x")
        || input.starts_with("0X")
        || (input.len() == 2 * H160_LENGTH && input.bytes().all(|b| b.is_ascii_hexdigit()))
}
