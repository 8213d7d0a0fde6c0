mod inspect;

use clap::Subcommand;
use primitives_address::{
    evm_account_id, h160_to_ss58, public_key_to_ss58, truncate_to_h160, AddressPrefix, Error,
    PublicKey, Ss58Address, H160,
};
use serde::Serialize;

pub(crate) use self::inspect::Inspection;
use crate::{error::CliError, output::Render, parse_prefix};

#[derive(Debug, Subcommand)]
pub(crate) enum AddressCommand {
    /// Encode public keys as SS58 addresses.
    PubkeyToSs58 {
        /// Public keys, hex encoded with an optional `0x` prefix.
        #[arg(required = true)]
        public_keys: Vec<PublicKey>,
    },
    /// Decode the public keys held by SS58 addresses.
    Ss58ToPubkey {
        /// SS58 addresses.
        #[arg(required = true)]
        addresses: Vec<Ss58Address>,
        /// Reject addresses that were not encoded for this network.
        #[arg(long, value_parser = parse_prefix)]
        expect_prefix: Option<AddressPrefix>,
    },
    /// Truncate SS58 addresses to H160 addresses (keeps the last 20 bytes, not reversible).
    Ss58ToH160 {
        /// SS58 addresses.
        #[arg(required = true)]
        addresses: Vec<Ss58Address>,
        /// Reject addresses that were not encoded for this network.
        #[arg(long, value_parser = parse_prefix)]
        expect_prefix: Option<AddressPrefix>,
        /// Print the EIP-55 mixed-case form.
        #[arg(long)]
        checksum: bool,
    },
    /// Get the SS58 address of the account mapped to EVM addresses.
    H160ToSs58 {
        /// H160 addresses, with an optional `0x` prefix.
        #[arg(required = true)]
        addresses: Vec<H160>,
    },
    /// Describe SS58 or H160 addresses.
    Inspect {
        /// SS58 or H160 addresses.
        #[arg(required = true)]
        addresses: Vec<String>,
    },
}

/// A single conversion result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum Record {
    Ss58 {
        public_key: PublicKey,
        prefix: AddressPrefix,
        ss58: Ss58Address,
    },
    PublicKey {
        ss58: Ss58Address,
        prefix: AddressPrefix,
        public_key: PublicKey,
    },
    LossyH160 {
        ss58: Ss58Address,
        h160: String,
    },
    MappedAccount {
        h160: H160,
        account_id: PublicKey,
        ss58: Ss58Address,
    },
    Inspection(Inspection),
}

impl Render for Record {
    fn plain(&self) -> String {
        match self {
            Record::Ss58 { ss58, .. } | Record::MappedAccount { ss58, .. } => ss58.to_string(),
            Record::PublicKey { public_key, .. } => public_key.to_string(),
            Record::LossyH160 { h160, .. } => h160.clone(),
            Record::Inspection(inspection) => inspection.plain(),
        }
    }
}

impl AddressCommand {
    /// Run an address command for the network `prefix`.
    #[tracing::instrument(level = "debug", skip_all, fields(prefix = prefix.get()))]
    pub(crate) fn run(self, prefix: AddressPrefix) -> Result<Vec<Record>, CliError> {
        match self {
            AddressCommand::PubkeyToSs58 { public_keys } => Ok(public_keys
                .into_iter()
                .map(|public_key| Record::Ss58 {
                    ss58: public_key_to_ss58(&public_key, prefix),
                    public_key,
                    prefix,
                })
                .collect()),
            AddressCommand::Ss58ToPubkey {
                addresses,
                expect_prefix,
            } => addresses
                .into_iter()
                .map(|ss58| {
                    check_prefix(&ss58, expect_prefix)?;
                    Ok(Record::PublicKey {
                        prefix: ss58.prefix(),
                        public_key: *ss58.public_key(),
                        ss58,
                    })
                })
                .collect(),
            AddressCommand::Ss58ToH160 {
                addresses,
                expect_prefix,
                checksum,
            } => {
                tracing::warn!(
                    "H160 addresses are truncated public keys and cannot be converted back"
                );
                addresses
                    .into_iter()
                    .map(|ss58| {
                        check_prefix(&ss58, expect_prefix)?;
                        let h160 = truncate_to_h160(ss58.public_key());
                        let h160 = if checksum {
                            h160.to_checksum_string()
                        } else {
                            h160.to_hex()
                        };
                        Ok(Record::LossyH160 { ss58, h160 })
                    })
                    .collect()
            }
            AddressCommand::H160ToSs58 { addresses } => Ok(addresses
                .into_iter()
                .map(|h160| Record::MappedAccount {
                    account_id: evm_account_id(&h160),
                    ss58: h160_to_ss58(&h160, prefix),
                    h160,
                })
                .collect()),
            AddressCommand::Inspect { addresses } => addresses
                .iter()
                .map(|address| Inspection::new(address, prefix).map(Record::Inspection))
                .collect(),
        }
    }
}

fn check_prefix(ss58: &Ss58Address, expected: Option<AddressPrefix>) -> Result<(), CliError> {
    match expected {
        Some(expected) if ss58.prefix() != expected => Err(CliError::Address {
            input: ss58.to_string(),
            source: Error::PrefixMismatch {
                expected,
                actual: ss58.prefix(),
            },
        }),
        _ => Ok(()),
    }
}
