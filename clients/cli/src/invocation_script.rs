use {
    crate::{
        common::{parse_signing_key, read_container},
        config::Config,
        output::format_output,
        CommandResult,
    },
    base64::{engine::general_purpose::STANDARD, Engine},
    clap::Args,
    neofs_test_contracts::offchain::{
        container_hash, invocation_script, sign_payload, signed_payload,
    },
    p256::ecdsa::SigningKey,
    serde_derive::{Deserialize, Serialize},
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    std::{
        fmt::{Display, Formatter},
        path::PathBuf,
    },
};

#[derive(Clone, Debug, Args)]
pub struct InvocationScriptArgs {
    /// File holding the marshalled container, `-` for standard input
    #[clap(long = "container", id = "CONTAINER_PATH")]
    pub container: PathBuf,

    /// Hex encoded secp256r1 private key of the user. The key must already
    /// be decrypted: NEP-2 encrypted keys and wallet files are not accepted.
    #[clap(long = "key", id = "PRIVATE_KEY", value_parser = parse_signing_key)]
    pub key: SigningKey,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationScriptOutput {
    pub public_key: String,
    pub signature: String,
    pub invocation_script: String,
}

impl Display for InvocationScriptOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Invocation script:", &self.invocation_script)
    }
}

impl QuietDisplay for InvocationScriptOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        writeln!(w, "{}", self.invocation_script)
    }
}

impl VerboseDisplay for InvocationScriptOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        writeln_name_value(w, "Public key:", &self.public_key)?;
        writeln_name_value(w, "Signature:", &self.signature)?;
        writeln_name_value(w, "Invocation script:", &self.invocation_script)
    }
}

pub fn command_invocation_script(config: &Config, args: InvocationScriptArgs) -> CommandResult {
    let container = read_container(&args.container)?;
    let payload = signed_payload(config.network, &container_hash(&container));
    let signature = sign_payload(&args.key, &payload);
    let public_key = args.key.verifying_key().to_encoded_point(true);
    log::info!("Signed container payload with {}", hex::encode(public_key.as_bytes()));

    Ok(format_output(
        config,
        InvocationScriptOutput {
            public_key: hex::encode(public_key.as_bytes()),
            signature: hex::encode(signature),
            invocation_script: STANDARD.encode(invocation_script(&signature)),
        },
    ))
}
