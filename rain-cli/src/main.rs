//! Rain CLI - inspect cumulative rainfall chart datasets from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rain-cli",
    version,
    about = "Cumulative rainfall chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: rain_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting rain-cli");
    rain_cmd::run(cli.command).await
}
