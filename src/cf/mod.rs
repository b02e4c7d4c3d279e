//! Client for the Cloud Foundry CLI.
//!
//! Every operation in this crate goes through the `cf` binary: service
//! discovery uses `cf curl` against the v3 API, while unbinding and deleting
//! reuse the stock `unbind-service` and `delete-service` commands. The client
//! only shells out; it holds no connection state of its own.

use std::path::PathBuf;
use std::process::Output;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

pub mod api;

/// Errors produced while talking to the cf CLI.
#[derive(Debug, Error)]
pub enum CfError {
    #[error("cf CLI not found on PATH")]
    CliNotFound(#[source] which::Error),

    #[error("failed to run cf {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The cf CLI exited non-zero. The message is whatever the CLI printed,
    /// so it reaches the user unchanged.
    #[error("{message}")]
    CommandFailed { command: String, message: String },

    #[error("unexpected response from cf curl {path}: {source}")]
    Response {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the locally installed cf CLI.
#[derive(Debug, Clone)]
pub struct CfClient {
    cf_path: PathBuf,
}

impl CfClient {
    /// Locate the cf binary on the PATH.
    pub fn new() -> Result<Self, CfError> {
        let cf_path = which::which("cf").map_err(CfError::CliNotFound)?;

        Ok(Self { cf_path })
    }

    /// Run a cf command and return its stdout.
    pub async fn run(&self, args: &[&str]) -> Result<String, CfError> {
        let command = args.first().copied().unwrap_or_default().to_string();

        debug!(?args, "running cf");

        let output = Command::new(&self.cf_path)
            .args(args)
            .output()
            .await
            .map_err(|source| CfError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CfError::CommandFailed {
                command,
                message: failure_message(&output),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Fetch a v3 API resource through `cf curl` and deserialize it.
    pub async fn curl<T: DeserializeOwned>(&self, path: &str) -> Result<T, CfError> {
        let body = self.run(&["curl", path]).await?;

        serde_json::from_str(&body).map_err(|source| CfError::Response {
            path: path.to_string(),
            source,
        })
    }
}

/// The cf CLI reports most failures on stdout ("FAILED" plus a reason), so
/// prefer stderr only when it actually has content.
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();

    if !stderr.is_empty() {
        return stderr.to_string();
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    fn output(status: i32, stdout: &str, stderr: &str) -> Output {
        Output {
            status: ExitStatus::from_raw(status),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_failure_message_prefers_stderr() {
        let out = output(256, "FAILED\n", "Service instance my-drain not found\n");
        assert_eq!(failure_message(&out), "Service instance my-drain not found");
    }

    #[test]
    fn test_failure_message_falls_back_to_stdout() {
        let out = output(256, "FAILED\nno get services\n", "");
        assert_eq!(failure_message(&out), "FAILED\nno get services");
    }
}
