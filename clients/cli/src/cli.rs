use {
    crate::{
        config::Config,
        invocation_script::{command_invocation_script, InvocationScriptArgs},
        output::parse_output_format,
        payload::{command_payload, PayloadArgs},
        verification_script::{command_verification_script, VerificationScriptArgs},
        CommandResult,
    },
    clap::{
        builder::{PossibleValuesParser, TypedValueParser},
        Parser, Subcommand,
    },
    neofs_test_contracts::offchain::DEFAULT_NETWORK_MAGIC,
    solana_cli_output::OutputFormat,
};

#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about = "A command line tool for building witnesses of the NeoFS test contracts"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Network magic mixed into signed payloads
    #[clap(
        global(true),
        short = 'n',
        long,
        env = "NEOFS_TEST_NETWORK",
        default_value_t = DEFAULT_NETWORK_MAGIC
    )]
    pub network: u32,

    /// Script hash of the deployed `usermgt` contract, big-endian hex.
    /// Defaults to the hash used by the test environment.
    #[clap(global(true), long = "contract", env = "NEOFS_TEST_CONTRACT", id = "HASH")]
    pub contract: Option<String>,

    /// Show additional information
    #[clap(global(true), short, long)]
    pub verbose: bool,

    /// Return information in specified output format
    #[clap(
        global(true),
        long = "output",
        id = "FORMAT",
        conflicts_with = "verbose",
        value_parser = PossibleValuesParser::new([
            "display",
            "json",
            "json-compact",
            "quiet",
            "verbose"
        ]).map(|o| parse_output_format(&o)),
    )]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Build the payload a `usermgt` user signs for a container
    Payload(PayloadArgs),
    /// Sign a container and build the witness invocation script
    InvocationScript(InvocationScriptArgs),
    /// Build the witness verification script calling the `usermgt` contract
    VerificationScript(VerificationScriptArgs),
}

impl Command {
    pub fn execute(self, config: &Config) -> CommandResult {
        match self {
            Command::Payload(args) => command_payload(config, args),
            Command::InvocationScript(args) => command_invocation_script(config, args),
            Command::VerificationScript(args) => command_verification_script(config, args),
        }
    }
}
