//! CLI argument parsing layer.
//!
//! This module provides the CLI interface using clap derive macros.
//! It handles parsing command-line arguments and converting them into
//! structured data types.
//!
//! The business logic layer is [`crate::commands`], which receives these
//! parsed arguments.

use clap::{Parser, Subcommand};

mod cli;

pub use cli::Cli;

/// Root command enum for drain management.
#[derive(Subcommand)]
#[command(about = "Manage syslog drains")]
pub enum DrainArgs {
    Delete(Delete),
    #[command(alias = "list")]
    Drains(Drains),
}

/// List the drains in the targeted space.
#[derive(Parser)]
pub struct Drains;

/// Unbind a drain from every bound application and delete it.
///
/// The command prompts for confirmation before touching anything.
#[derive(Parser)]
pub struct Delete {
    /// The drain to delete, optionally followed by -f/--force.
    //
    // The command parses these tokens itself (positional count, recognized
    // flags, exact diagnostics); clap only collects them.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "DRAIN_NAME [-f]"
    )]
    pub args: Vec<String>,
}
