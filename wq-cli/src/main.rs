//! WQ CLI - Command line tool for filtering and summarising river water quality data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wq-cli",
    version,
    about = "River water quality dashboard toolkit"
)]
struct Cli {
    #[command(flatten)]
    filter: wq_cmd::FilterArgs,

    #[command(subcommand)]
    command: wq_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("filter: {:?}, command: {:?}", cli.filter, cli.command);
    wq_cmd::run(cli.filter, cli.command)
}
