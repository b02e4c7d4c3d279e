//! This module defines traits for the external collaborators (the Cloud
//! Foundry service directory) to make them easy to mock and substitute in
//! tests. By abstracting the cf CLI behind capability traits, commands can be
//! dependency-injected and verified without a running Cloud Foundry.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::cf::api::{ServiceBindingsResponse, ServiceInstancesResponse};
use crate::cf::{CfClient, CfError};
use crate::models::{Drain, DrainType};

#[cfg(test)]
pub use mocks::*;

// Dependency to list drain-type service instances and their bound apps
#[async_trait]
pub trait DrainLister {
    /// Returns every drain in the targeted space, each with its bound apps
    /// in directory order.
    async fn list_drains(&self) -> Result<Vec<Drain>, CfError>;
}

// Dependency to unbind a service from an app
#[async_trait]
pub trait ServiceUnbinder {
    async fn unbind(&self, app_name: &str, service_name: &str) -> Result<(), CfError>;
}

// Dependency to delete a service instance
#[async_trait]
pub trait ServiceDeleter {
    /// Deletes the service, forwarding `extra_flags` verbatim to the
    /// underlying `delete-service` call.
    async fn delete(&self, service_name: &str, extra_flags: &[String]) -> Result<(), CfError>;
}

#[async_trait]
impl DrainLister for CfClient {
    async fn list_drains(&self) -> Result<Vec<Drain>, CfError> {
        let instances: ServiceInstancesResponse = self
            .curl("/v3/service_instances?type=user-provided&per_page=5000")
            .await?;

        let mut drains = Vec::new();

        for instance in instances.resources {
            let Some(drain_url) = instance.syslog_drain_url.filter(|url| !url.is_empty()) else {
                continue;
            };

            let bindings: ServiceBindingsResponse = self
                .curl(&format!(
                    "/v3/service_credential_bindings?service_instance_guids={}&include=app&per_page=5000",
                    instance.guid
                ))
                .await?;

            let (apps, app_guids) = bound_apps(&bindings);

            drains.push(Drain {
                name: instance.name,
                guid: instance.guid,
                apps,
                app_guids,
                drain_type: DrainType::from_drain_url(&drain_url),
                drain_url,
            });
        }

        Ok(drains)
    }
}

#[async_trait]
impl ServiceUnbinder for CfClient {
    async fn unbind(&self, app_name: &str, service_name: &str) -> Result<(), CfError> {
        self.run(&["unbind-service", app_name, service_name])
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl ServiceDeleter for CfClient {
    async fn delete(&self, service_name: &str, extra_flags: &[String]) -> Result<(), CfError> {
        let mut args = vec!["delete-service", service_name];
        args.extend(extra_flags.iter().map(String::as_str));

        self.run(&args).await.map(|_| ())
    }
}

/// Extract the bound app names and guids from a bindings listing, keeping the
/// binding order the directory returned.
fn bound_apps(bindings: &ServiceBindingsResponse) -> (Vec<String>, Vec<String>) {
    let names_by_guid: HashMap<&str, &str> = bindings
        .included
        .apps
        .iter()
        .map(|app| (app.guid.as_str(), app.name.as_str()))
        .collect();

    let mut apps = Vec::new();
    let mut app_guids = Vec::new();

    for binding in &bindings.resources {
        let Some(app) = &binding.relationships.app else {
            continue;
        };

        if let Some(name) = names_by_guid.get(app.data.guid.as_str()) {
            apps.push((*name).to_string());
            app_guids.push(app.data.guid.clone());
        }
    }

    (apps, app_guids)
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use mockall::mock;

    mock! {
        pub CfCli {}

        #[async_trait]
        impl DrainLister for CfCli {
            async fn list_drains(&self) -> Result<Vec<Drain>, CfError>;
        }

        #[async_trait]
        impl ServiceUnbinder for CfCli {
            async fn unbind(&self, app_name: &str, service_name: &str) -> Result<(), CfError>;
        }

        #[async_trait]
        impl ServiceDeleter for CfCli {
            async fn delete(&self, service_name: &str, extra_flags: &[String]) -> Result<(), CfError>;
        }
    }
}
