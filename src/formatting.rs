//! Output formatting for command results.
//!
//! Every command output implements [`Formattable`] so the `-o/--output` flag
//! can switch between the human-readable text rendering and JSON.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Format of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Trait for types that can be formatted as text or JSON.
pub trait Formattable {
    fn format(&self, format: Format) -> Result<String>;
}

/// Any type that is both [`Display`] and [`Serialize`] is formattable: text
/// output uses the display rendering, JSON output the serde serialization.
impl<T> Formattable for T
where
    T: Display + Serialize,
{
    fn format(&self, format: Format) -> Result<String> {
        Ok(match format {
            Format::Text => self.to_string(),
            Format::Json => serde_json::to_string(self).context("serializing to json")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct DrainSummary {
        name: String,
        bound_apps: usize,
    }

    impl Display for DrainSummary {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} ({} bound apps)", self.name, self.bound_apps)
        }
    }

    fn summary() -> DrainSummary {
        DrainSummary {
            name: "my-drain".to_string(),
            bound_apps: 2,
        }
    }

    #[test]
    fn test_format_text_uses_display() {
        assert_eq!(
            summary().format(Format::Text).unwrap(),
            "my-drain (2 bound apps)"
        );
    }

    #[test]
    fn test_format_json_uses_serde() {
        assert_eq!(
            summary().format(Format::Json).unwrap(),
            r#"{"name":"my-drain","bound_apps":2}"#
        );
    }
}
