//! The `drains` command: list the drains in the targeted space together with
//! their type, destination and bound applications.

use std::fmt::Display;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    args,
    cf::CfClient,
    commands::CommandWithOutput,
    dependencies::DrainLister,
    models::Drain,
    table::Table,
};

pub struct Drains {
    drain_lister: Box<dyn DrainLister + Send>,
}

impl TryFrom<args::Drains> for Drains {
    type Error = anyhow::Error;

    fn try_from(_: args::Drains) -> Result<Self> {
        Ok(Self {
            drain_lister: Box::new(CfClient::new().context("locating the cf CLI")?),
        })
    }
}

/// Result of the drains command.
///
/// Newtype over the drain list so table conversion and [`Display`] can be
/// implemented on the result itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrainsResult(Vec<Drain>);

impl From<&DrainsResult> for Table {
    fn from(value: &DrainsResult) -> Self {
        Table::from_iter(
            &value.0,
            &[
                ("NAME", |drain: &Drain| drain.name.clone()),
                ("TYPE", |drain: &Drain| drain.drain_type.to_string()),
                ("DRAIN URL", |drain: &Drain| drain.drain_url.clone()),
                ("BOUND APPS", |drain: &Drain| drain.apps.join(", ")),
            ],
        )
    }
}

impl Display for DrainsResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Table::from(self).fmt(f)
    }
}

#[async_trait]
impl CommandWithOutput for Drains {
    type Output = DrainsResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        Ok(DrainsResult(self.drain_lister.list_drains().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::MockCfCli;
    use crate::models::DrainType;

    fn drain() -> Drain {
        Drain {
            name: "my-drain".to_string(),
            guid: "my-drain-guid".to_string(),
            apps: vec!["app-1".to_string(), "app-2".to_string()],
            app_guids: vec!["app-1-guid".to_string(), "app-2-guid".to_string()],
            drain_type: DrainType::Logs,
            drain_url: "syslog://drain.url.com?drain-type=logs".to_string(),
        }
    }

    #[tokio::test]
    async fn test_drains_command() {
        let mut drain_lister = MockCfCli::new();
        drain_lister
            .expect_list_drains()
            .return_once(|| Ok(vec![drain()]));

        let mut command = Drains {
            drain_lister: Box::new(drain_lister),
        };

        let result = command.execute().await.expect("execute should succeed");

        assert_eq!(result, DrainsResult(vec![drain()]));
    }

    #[test]
    fn test_drains_result_renders_bound_apps_column() {
        let rendered = DrainsResult(vec![drain()]).to_string();

        let mut lines = rendered.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();

        assert!(header.starts_with("NAME"));
        assert!(header.contains("BOUND APPS"));
        assert!(row.starts_with("my-drain"));
        assert!(row.contains("logs"));
        assert!(row.contains("app-1, app-2"));
    }
}
