//! CCR CLI - preview the card recommender's form rows and chart data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ccr-cli",
    version,
    about = "Credit card recommender form and chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ccr_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ccr_cmd::run(cli.command)
}
