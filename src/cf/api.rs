//! Response models for the slice of the Cloud Foundry v3 API this crate
//! reads through `cf curl`. Only the fields we consume are modelled.

use serde::Deserialize;

/// Paginated listing of service instances.
#[derive(Debug, Deserialize)]
pub struct ServiceInstancesResponse {
    pub resources: Vec<ServiceInstance>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceInstance {
    pub guid: String,
    pub name: String,
    /// Present and non-empty only for user-provided instances that forward
    /// logs somewhere, which is exactly what makes an instance a drain.
    #[serde(default)]
    pub syslog_drain_url: Option<String>,
}

/// Paginated listing of service credential bindings, requested with
/// `include=app` so the bound app names ride along.
#[derive(Debug, Deserialize)]
pub struct ServiceBindingsResponse {
    pub resources: Vec<ServiceBinding>,
    #[serde(default)]
    pub included: IncludedResources,
}

#[derive(Debug, Deserialize)]
pub struct ServiceBinding {
    pub relationships: BindingRelationships,
}

#[derive(Debug, Deserialize)]
pub struct BindingRelationships {
    #[serde(default)]
    pub app: Option<Relationship>,
}

#[derive(Debug, Deserialize)]
pub struct Relationship {
    pub data: RelationshipData,
}

#[derive(Debug, Deserialize)]
pub struct RelationshipData {
    pub guid: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct IncludedResources {
    #[serde(default)]
    pub apps: Vec<App>,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub guid: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_instances() {
        let body = r#"{
            "pagination": {"total_results": 2},
            "resources": [
                {
                    "guid": "drain-guid",
                    "name": "my-drain",
                    "syslog_drain_url": "syslog://drain.url.com"
                },
                {
                    "guid": "plain-guid",
                    "name": "my-config-service"
                }
            ]
        }"#;

        let response: ServiceInstancesResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.resources.len(), 2);
        assert_eq!(response.resources[0].name, "my-drain");
        assert_eq!(
            response.resources[0].syslog_drain_url.as_deref(),
            Some("syslog://drain.url.com")
        );
        assert_eq!(response.resources[1].syslog_drain_url, None);
    }

    #[test]
    fn test_deserialize_bindings_with_included_apps() {
        let body = r#"{
            "resources": [
                {"relationships": {"app": {"data": {"guid": "app-1-guid"}}}},
                {"relationships": {}}
            ],
            "included": {
                "apps": [{"guid": "app-1-guid", "name": "app-1"}]
            }
        }"#;

        let response: ServiceBindingsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.resources.len(), 2);
        assert!(response.resources[1].relationships.app.is_none());
        assert_eq!(response.included.apps[0].name, "app-1");
    }
}
