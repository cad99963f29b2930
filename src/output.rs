//! Rendering parsed records for the command line.

use crate::repository::Repository;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How records are printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field, records separated by a blank line.
    #[default]
    Text,
    /// A JSON array of records.
    Json,
}

/// Render a single record as `key: value` lines.
#[must_use]
pub fn render_text(repository: &Repository) -> String {
    let fields = [
        ("protocol", repository.protocol().to_string()),
        ("protocols", repository.protocols().join(",")),
        ("resource", repository.resource().to_string()),
        ("href", repository.href().to_string()),
        ("owner", repository.owner().to_string()),
        ("repo", repository.repo().to_string()),
        ("path", repository.path().to_string()),
        ("branch", repository.branch().to_string()),
        ("provider", repository.provider_name().to_string()),
    ];

    fields
        .iter()
        .map(|(key, value)| format!("{key}: {value}\n"))
        .collect::<String>()
}

/// Render every record in the requested format.
pub fn render(repositories: &[Repository], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(repositories
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(repositories).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
