//! The normalized record produced by a successful parse.

use crate::provider::Provider;
use serde::Serialize;
use std::collections::HashMap;

/// A git remote URL broken into its repository coordinates.
///
/// Built in full by a single provider match and immutable afterwards.
/// `branch` and `path` are empty strings when the URL does not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    protocol: String,
    protocols: Vec<String>,
    host: String,
    resource: String,
    owner: String,
    repo: String,
    branch: String,
    path: String,
    href: String,
    provider: Provider,
}

impl Repository {
    /// Build a record from the named groups of a provider pattern match.
    ///
    /// Returns `None` when a required coordinate is empty, which only happens
    /// if a pattern lets one of those groups match zero-width.
    pub(crate) fn from_captures(
        provider: Provider,
        href: &str,
        captures: &HashMap<String, String>,
    ) -> Option<Self> {
        let field = |name: &str| captures.get(name).cloned().unwrap_or_default();

        let protocol = field("scheme");
        let resource = field("resource");
        let owner = field("owner");
        let repo = field("repo");
        if [&protocol, &resource, &owner, &repo].iter().any(|v| v.is_empty()) {
            return None;
        }

        Some(Self {
            protocols: split_protocols(&protocol),
            protocol,
            host: resource.clone(),
            resource,
            owner,
            repo,
            branch: field("branch"),
            path: field("path"),
            href: href.to_string(),
            provider,
        })
    }

    /// The raw scheme token, e.g. `https`, `git` or `git+ssh`.
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The scheme split on `+`; `git+ssh` yields `["git", "ssh"]`.
    #[must_use]
    pub fn protocols(&self) -> &[String] {
        &self.protocols
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Same value as [`Repository::host`].
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name without any `.git` suffix.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The input URL, unmodified.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    #[must_use]
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Provider literal: `github`, `gitlab` or `bitbucket`.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

fn split_protocols(protocol: &str) -> Vec<String> {
    protocol
        .split('+')
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
