#![deny(clippy::unwrap_used)]

mod cmd;
mod error;
mod output;

use std::io::Write;

use clap::Parser;
use cmd::AddressCommand;
use error::CliError;
use output::OutputFormat;
use primitives_address::AddressPrefix;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Convert between public keys, SS58 addresses and H160 addresses.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    pub subcommand: AddressCommand,

    /// Network identifier used when encoding SS58 addresses.
    #[arg(
        long,
        global = true,
        env = "SS58_PREFIX",
        default_value = "42",
        value_parser = parse_prefix
    )]
    pub ss58_prefix: AddressPrefix,

    /// Output format.
    #[arg(long, global = true, env = "OUTPUT_FORMAT", value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Parses a network identifier in the range the SS58 format can represent.
pub(crate) fn parse_prefix(src: &str) -> Result<AddressPrefix, String> {
    let prefix = src
        .parse::<u16>()
        .map_err(|err| format!("{src} is not a network identifier: {err}"))?;
    AddressPrefix::new(prefix).map_err(|err| err.to_string())
}

fn init_tracing() -> Result<(), CliError> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::builder()
                        .with_default_directive(LevelFilter::INFO.into())
                        .from_env()?,
                )
                .with_filter(filter::filter_fn(|metadata| {
                    if let Some(module_path) = metadata.module_path() {
                        module_path.starts_with("address_cli")
                            || module_path.starts_with("primitives_address")
                    } else {
                        true
                    }
                })),
        )
        .init();
    Ok(())
}

impl Cli {
    fn run(self) -> Result<(), CliError> {
        let records = self.subcommand.run(self.ss58_prefix)?;

        let mut stdout = std::io::stdout().lock();
        for record in &records {
            writeln!(stdout, "{}", self.format.format(record)?)?;
        }

        Ok(())
    }
}

fn main() -> Result<(), anyhow::Error> {
    init_tracing()?;

    let cli_arguments = Cli::parse();
    cli_arguments.run()?;

    Ok(())
}
