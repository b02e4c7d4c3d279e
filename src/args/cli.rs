//! Root command for the CLI.
//!
//! This module contains the root command structure that handles executing the
//! CLI both as a plugin (when invoked via `cf drain`) and as a standalone CLI
//! (when invoked directly as `cf-drain`).
//!
//! The commands are defined in the [`DrainArgs`](super::DrainArgs) enum.
use std::env::args;

use clap::{Args, Subcommand};

use crate::formatting::Format;

use super::DrainArgs;

/// Manage syslog drains
#[derive(Args)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global_args: GlobalArgs,

    #[command(subcommand)]
    pub command: PluginSubCommands,
}

/// Implement the Parser trait to allow us to use the Cli struct as a root command.
///
/// This allows us to invoke `Cli::parse()` to parse the CLI arguments.
impl clap::Parser for Cli {}

impl Cli {
    /// Create a new command with the correct binary name based on whether
    /// we're executing as a plugin or directly.
    ///
    /// Setting the binary name changes the usage string in the help text,
    /// e.g. "Usage: cf drain <COMMAND>" instead of "Usage: cf-drain <COMMAND>".
    fn new_command() -> clap::Command {
        // If the first argument is "drain" the executable is running as a
        // cf plugin, so the binary name shown in help should be "cf".
        let command = if args().nth(1).as_deref().unwrap_or_default() == "drain" {
            "cf"
        } else {
            "cf-drain"
        };

        clap::Command::new(command).bin_name(command)
    }
}

/// Manually implement the CommandFactory trait to change the help text format
/// based on execution mode.
///
/// - If executed as a plugin (`cf drain`), the binary name is "cf" and the
///   usage string is "Usage: cf drain <COMMAND>".
/// - If executed directly (`cf-drain`), the binary name is "cf-drain" and the
///   usage string is "Usage: cf-drain <COMMAND>".
impl clap::CommandFactory for Cli {
    fn command() -> clap::Command {
        // This is based on what the Parser derive macro generates.
        // The call to `Cli::new_command()` is what's changed.
        let __clap_app = Cli::new_command();
        <Self as clap::Args>::augment_args(__clap_app)
    }

    fn command_for_update() -> clap::Command {
        // This is based on what the Parser derive macro generates.
        // The call to `Cli::new_command()` is what's changed.
        let __clap_app = Cli::new_command();
        <Self as clap::Args>::augment_args_for_update(__clap_app)
    }
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Enable debug logging.
    ///
    /// Setting this flag sets the log level to debug for this crate.
    /// The log level can also be overridden by setting the `CF_DRAIN_LOG`
    /// environment variable; `CF_DRAIN_LOG_ALL` widens the filter to all
    /// crates.
    #[arg(global = true, hide = true, long, short = 'D', default_value = "false")]
    pub debug: bool,

    /// Output format.
    #[arg(global = true, long = "output", short = 'o')]
    pub format: Option<Format>,
}

/// Enum representing the different ways the CLI can be invoked.
///
/// This enum handles the dual nature of the CLI: it can be run as a plugin
/// (`cf drain`) or as a standalone command (`cf-drain`).
#[derive(Subcommand)]
pub enum PluginSubCommands {
    /// Manage syslog drains.
    #[command(hide = true)]
    Drain {
        #[command(subcommand)]
        command: DrainArgs,
    },
    /// The drain subcommands when executing the executable directly.
    #[command(flatten)]
    Flat(DrainArgs),
}

/// Convert CLI arguments to drain command arguments.
///
/// This allows us to transparently execute the command as a plugin or
/// directly. The conversion extracts the actual command from the plugin
/// wrapper if needed.
impl From<PluginSubCommands> for DrainArgs {
    fn from(command: PluginSubCommands) -> Self {
        match command {
            PluginSubCommands::Drain { command } => command,
            PluginSubCommands::Flat(command) => command,
        }
    }
}
