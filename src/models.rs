use std::fmt::Display;

use serde::Serialize;
use url::Url;

/// A drain service instance together with the applications currently bound
/// to it.
///
/// This is a read-only snapshot taken once per invocation; the ordering of
/// `apps` matches the order returned by the service directory and determines
/// the unbind order. `apps` and `app_guids` are parallel lists.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Drain {
    pub name: String,
    pub guid: String,
    pub apps: Vec<String>,
    pub app_guids: Vec<String>,
    pub drain_type: DrainType,
    pub drain_url: String,
}

/// Which kind of envelopes a drain forwards.
///
/// The type is encoded in the drain URL as a `drain-type` query parameter
/// when the drain is created, e.g. `syslog://drain.example.com?drain-type=metrics`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrainType {
    #[default]
    All,
    Logs,
    Metrics,
}

impl DrainType {
    /// Parse the drain type from a drain URL.
    ///
    /// A missing or unrecognized `drain-type` parameter means the drain
    /// forwards everything.
    pub fn from_drain_url(drain_url: &str) -> Self {
        let Ok(url) = Url::parse(drain_url) else {
            return Self::All;
        };

        url.query_pairs()
            .find(|(key, _)| key == "drain-type")
            .map(|(_, value)| match value.as_ref() {
                "logs" => Self::Logs,
                "metrics" => Self::Metrics,
                _ => Self::All,
            })
            .unwrap_or_default()
    }
}

impl Display for DrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Logs => write!(f, "logs"),
            Self::Metrics => write!(f, "metrics"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_type_from_url_without_parameter() {
        assert_eq!(
            DrainType::from_drain_url("syslog://drain.url.com"),
            DrainType::All
        );
    }

    #[test]
    fn test_drain_type_from_url_with_parameter() {
        assert_eq!(
            DrainType::from_drain_url("syslog://drain.url.com?drain-type=logs"),
            DrainType::Logs
        );
        assert_eq!(
            DrainType::from_drain_url("https://drain.url.com/drain?drain-type=metrics"),
            DrainType::Metrics
        );
        assert_eq!(
            DrainType::from_drain_url("syslog://drain.url.com?drain-type=all"),
            DrainType::All
        );
    }

    #[test]
    fn test_drain_type_from_url_with_unknown_parameter_value() {
        assert_eq!(
            DrainType::from_drain_url("syslog://drain.url.com?drain-type=bogus"),
            DrainType::All
        );
    }

    #[test]
    fn test_drain_type_from_unparseable_url() {
        assert_eq!(DrainType::from_drain_url("not a url"), DrainType::All);
    }

    #[test]
    fn test_drain_type_display() {
        assert_eq!(DrainType::All.to_string(), "all");
        assert_eq!(DrainType::Logs.to_string(), "logs");
        assert_eq!(DrainType::Metrics.to_string(), "metrics");
    }
}
