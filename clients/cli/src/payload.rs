use {
    crate::{
        common::read_container,
        config::Config,
        output::format_output,
        CommandResult,
    },
    clap::Args,
    neofs_test_contracts::offchain::{container_hash, signed_payload},
    serde_derive::{Deserialize, Serialize},
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    std::{
        fmt::{Display, Formatter},
        path::PathBuf,
    },
};

#[derive(Clone, Debug, Args)]
pub struct PayloadArgs {
    /// File holding the marshalled container, `-` for standard input
    #[clap(long = "container", id = "CONTAINER_PATH")]
    pub container: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadOutput {
    pub network: u32,
    pub container_hash: String,
    pub payload: String,
}

impl Display for PayloadOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Payload:", &self.payload)
    }
}

impl QuietDisplay for PayloadOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        writeln!(w, "{}", self.payload)
    }
}

impl VerboseDisplay for PayloadOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        writeln_name_value(w, "Network:", &self.network.to_string())?;
        writeln_name_value(w, "Container hash:", &self.container_hash)?;
        writeln_name_value(w, "Payload:", &self.payload)
    }
}

pub fn command_payload(config: &Config, args: PayloadArgs) -> CommandResult {
    let container = read_container(&args.container)?;
    let hash = container_hash(&container);
    let payload = signed_payload(config.network, &hash);
    log::debug!(
        "Built {} byte payload for network {}",
        payload.len(),
        config.network
    );

    Ok(format_output(
        config,
        PayloadOutput {
            network: config.network,
            container_hash: hex::encode(hash.0),
            payload: hex::encode(payload),
        },
    ))
}
