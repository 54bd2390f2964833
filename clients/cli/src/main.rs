mod cli;
mod common;
mod config;
mod invocation_script;
mod output;
mod payload;
mod verification_script;

use {
    crate::{cli::Cli, config::Config},
    clap::Parser,
};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type CommandResult = Result<String, Error>;

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let config = Config::new(&cli)?;

    solana_logger::setup_with_default("neofs_test_contracts=info");

    let result = cli.command.execute(&config)?;
    println!("{}", result);

    Ok(())
}
