use std::process;

use anyhow::Result;
use clap::Parser;

use crate::args::Cli;
use crate::formatting::Format;

mod args;
mod cf;
mod commands;
mod dependencies;
mod formatting;
mod interaction;
mod logging;
mod models;
mod table;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::setup_logging(cli.global_args.debug);

    // Errors are reported here, at the outermost layer: print the message
    // verbatim and exit non-zero. Nothing below this point terminates the
    // process itself.
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.global_args.format.unwrap_or(Format::Text);

    let mut command = commands::command_from_args(cli.command.into(), format)?;

    command.execute().await
}
