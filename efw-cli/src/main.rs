//! EFW CLI - preview forecast widget output from a state roster.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "efw-cli",
    version,
    about = "Election forecast widget toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: efw_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    efw_cmd::run(cli.command)
}
