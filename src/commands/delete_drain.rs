//! The `delete` command: confirm with the user, unbind the drain from every
//! bound application, then delete the service instance.
//!
//! The workflow is a straight line with no retries and no rollback: parse
//! arguments, resolve the drain, ask once, unbind in directory order, delete.
//! The first failure stops everything; unbinds that already happened are left
//! in place.

use std::fmt::Display;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    args,
    cf::{CfClient, CfError},
    commands::CommandWithOutput,
    dependencies::{DrainLister, ServiceDeleter, ServiceUnbinder},
    interaction::{
        ConfirmationPrompt, ConfirmationPromptOptions, ConfirmationPromptResult, Interaction,
        SpinnerInteraction,
    },
};

// Interaction dependencies for the delete command
pub trait DeleteInteraction: ConfirmationPrompt + SpinnerInteraction + Send {}
impl<T: ConfirmationPrompt + SpinnerInteraction + Send> DeleteInteraction for T {}

// Service-directory dependencies for the delete command
pub trait DeleteServiceDirectory: DrainLister + ServiceUnbinder + ServiceDeleter + Send {}
impl<T: DrainLister + ServiceUnbinder + ServiceDeleter + Send> DeleteServiceDirectory for T {}

/// Ways the delete workflow can fail. All of them are terminal.
///
/// Directory errors are transparent so the cf CLI's own message reaches the
/// user character for character.
#[derive(Debug, Error)]
pub enum DeleteDrainError {
    #[error("Invalid arguments, expected 1, got {0}.")]
    InvalidArguments(usize),

    #[error("unknown flag `{0}'")]
    UnknownFlag(String),

    #[error("Unable to find service {0}.")]
    ServiceNotFound(String),

    #[error(transparent)]
    ServiceLookup(CfError),

    #[error(transparent)]
    Unbind(CfError),

    #[error(transparent)]
    Delete(CfError),
}

/// Options recognized on the delete command line.
///
/// `force` is accepted for compatibility with the other drain tooling but
/// does not bypass the confirmation prompt; the delete-service call is forced
/// either way once the user has confirmed.
#[derive(Debug, PartialEq, Eq)]
struct DeleteOpts {
    drain_name: String,
    force: bool,
}

impl DeleteOpts {
    /// Parse the raw tokens: exactly one positional argument (the drain
    /// name) plus the optional -f/--force flag. Any other flag is rejected
    /// before anything else happens.
    fn parse(args: &[String]) -> Result<Self, DeleteDrainError> {
        let mut force = false;
        let mut positionals = Vec::new();

        for token in args {
            if token.starts_with('-') && token != "-" {
                match token.as_str() {
                    "-f" | "--force" => force = true,
                    _ => {
                        return Err(DeleteDrainError::UnknownFlag(
                            token.trim_start_matches('-').to_string(),
                        ));
                    }
                }
            } else {
                positionals.push(token.clone());
            }
        }

        match <[String; 1]>::try_from(positionals) {
            Ok([drain_name]) => Ok(Self { drain_name, force }),
            Err(positionals) => Err(DeleteDrainError::InvalidArguments(positionals.len())),
        }
    }
}

pub struct DeleteDrain {
    args: Vec<String>,

    interaction: Box<dyn DeleteInteraction>,
    services: Box<dyn DeleteServiceDirectory>,
}

impl TryFrom<args::Delete> for DeleteDrain {
    type Error = anyhow::Error;

    fn try_from(args: args::Delete) -> Result<Self> {
        Ok(Self {
            args: args.args,

            interaction: Box::new(Interaction::new()),
            services: Box::new(CfClient::new().context("locating the cf CLI")?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteDrainResult {
    Deleted { drain_name: String },
    Cancelled { drain_name: String },
}

impl Display for DeleteDrainResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deleted { drain_name } => write!(f, "Drain {} deleted", drain_name),
            Self::Cancelled { .. } => write!(f, "Delete cancelled"),
        }
    }
}

#[async_trait]
impl CommandWithOutput for DeleteDrain {
    type Output = DeleteDrainResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let opts = DeleteOpts::parse(&self.args)?;

        debug!(drain_name = %opts.drain_name, force = opts.force, "resolving drain");

        let drains = self
            .services
            .list_drains()
            .await
            .map_err(DeleteDrainError::ServiceLookup)?;

        let drain = drains
            .into_iter()
            .find(|drain| drain.name == opts.drain_name)
            .ok_or_else(|| DeleteDrainError::ServiceNotFound(opts.drain_name.clone()))?;

        let confirmation = self
            .interaction
            .confirm(
                ConfirmationPromptOptions::builder()
                    .message(format!(
                        "Are you sure you want to unbind {} from {} and delete {}?",
                        drain.name,
                        drain.apps.join(", "),
                        drain.name
                    ))
                    .default(false)
                    .build(),
            )
            .context("confirming deletion")?;

        if confirmation == ConfirmationPromptResult::No {
            return Ok(DeleteDrainResult::Cancelled {
                drain_name: drain.name,
            });
        }

        // The spinner stops when the handle goes out of scope
        let _spinner = self
            .interaction
            .start_spinner("Deleting drain...".to_string())?;

        for app in &drain.apps {
            debug!(app = %app, drain_name = %drain.name, "unbinding");

            self.services
                .unbind(app, &drain.name)
                .await
                .map_err(DeleteDrainError::Unbind)?;
        }

        // delete-service always gets -f: the user already confirmed above,
        // so the cf CLI must not prompt a second time.
        self.services
            .delete(&drain.name, &["-f".to_string()])
            .await
            .map_err(DeleteDrainError::Delete)?;

        Ok(DeleteDrainResult::Deleted {
            drain_name: drain.name,
        })
    }
}
