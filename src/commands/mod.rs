//! This module contains the business logic for the commands of the
//! application.
//!
//! The main entry point is the [`command_from_args`] function which converts
//! CLI arguments into a command.
use anyhow::Result;

use crate::{
    args::DrainArgs,
    commands::{delete_drain::DeleteDrain, drains::Drains},
    formatting::Format,
};
pub use core::{Command, CommandWithOutput, CommandWithOutputExt};

mod core;
pub mod delete_drain;
pub mod drains;

/// Convert CLI arguments into a command.
///
/// The output of the command will be formatted using the provided format and
/// printed to stdout.
pub fn command_from_args(args: DrainArgs, format: Format) -> Result<Box<dyn Command>> {
    match args {
        DrainArgs::Delete(delete_args) => {
            DeleteDrain::try_from(delete_args)?.with_print_to_stdout(format)
        }
        DrainArgs::Drains(drains_args) => {
            Drains::try_from(drains_args)?.with_print_to_stdout(format)
        }
    }
}
