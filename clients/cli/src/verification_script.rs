use {
    crate::{
        config::Config,
        output::format_output,
        CommandResult,
    },
    anyhow::anyhow,
    base64::{engine::general_purpose::STANDARD, Engine},
    clap::Args,
    neofs_test_contracts::{
        offchain::verification_script, usermgt::processor::EXPECTED_USER, TestContract,
    },
    serde_derive::{Deserialize, Serialize},
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    std::fmt::{Display, Formatter},
};

#[derive(Clone, Debug, Args)]
pub struct VerificationScriptArgs {
    /// User name passed to the contract
    #[clap(long, default_value = EXPECTED_USER)]
    pub user: String,

    /// Contract method to call
    #[clap(long, default_value = "verifySignature")]
    pub method: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationScriptOutput {
    pub contract: String,
    pub method: String,
    pub verification_script: String,
}

impl Display for VerificationScriptOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Verification script:", &self.verification_script)
    }
}

impl QuietDisplay for VerificationScriptOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        writeln!(w, "{}", self.verification_script)
    }
}

impl VerboseDisplay for VerificationScriptOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        writeln_name_value(w, "Contract:", &self.contract)?;
        writeln_name_value(w, "Method:", &self.method)?;
        writeln_name_value(w, "Verification script:", &self.verification_script)
    }
}

pub fn command_verification_script(
    config: &Config,
    args: VerificationScriptArgs,
) -> CommandResult {
    if !TestContract::UserMgt.methods().contains(&args.method.as_str()) {
        log::warn!(
            "Method {} is not exported by usermgt, the witness will not verify",
            args.method
        );
    }

    let script = verification_script(&args.user, &args.method, &config.contract)
        .map_err(|e| anyhow!("Could not build verification script: {}", e))?;

    Ok(format_output(
        config,
        VerificationScriptOutput {
            contract: hex::encode(config.contract.to_be_bytes()),
            method: args.method,
            verification_script: STANDARD.encode(script),
        },
    ))
}
