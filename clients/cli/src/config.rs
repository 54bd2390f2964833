use {
    crate::{cli::Cli, common::parse_hash160, Error},
    anyhow::anyhow,
    neofs_test_contracts::{interop::Hash160, offchain::DEFAULT_USERMGT_HASH},
    solana_cli_output::OutputFormat,
};

pub struct Config {
    pub network: u32,
    pub contract: Hash160,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn new(cli: &Cli) -> Result<Self, Error> {
        let contract = match &cli.contract {
            Some(hash) => {
                parse_hash160(hash).map_err(|e| anyhow!("Invalid contract hash: {}", e))?
            }
            None => DEFAULT_USERMGT_HASH,
        };

        let output_format = match (cli.output_format, cli.verbose) {
            (Some(format), _) => format,
            (None, true) => OutputFormat::DisplayVerbose,
            (None, false) => OutputFormat::Display,
        };

        Ok(Self {
            network: cli.network,
            contract,
            output_format,
        })
    }
}
