//! Git hosting providers and their URL rule sets.
//!
//! Each [`Provider`] owns a host predicate and an ordered [`PatternTable`].
//! Tables are ordered most-specific-first and the first matching pattern wins.

mod bitbucket;
mod github;
mod gitlab;
mod patterns;

pub use patterns::PatternTable;

use crate::error::ParseError;
use crate::repository::Repository;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A supported git hosting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Bitbucket,
    GitHub,
    GitLab,
}

impl Provider {
    /// Every provider, in the order hosts are checked against them.
    pub const ALL: [Self; 3] = [Self::Bitbucket, Self::GitHub, Self::GitLab];

    /// The literal stored in [`Repository::provider_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bitbucket => "bitbucket",
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }

    /// Whether `host` belongs to this provider.
    #[must_use]
    pub fn should_parse(self, host: &str) -> bool {
        let matched = match self {
            Self::Bitbucket => bitbucket::should_parse(host),
            Self::GitHub => github::should_parse(host),
            Self::GitLab => gitlab::should_parse(host),
        };
        debug!(host, provider = self.name(), matched, "checking provider host");
        matched
    }

    /// The first provider in [`Provider::ALL`] that accepts `host`.
    #[must_use]
    pub fn detect(host: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.should_parse(host))
    }

    /// This provider's compiled pattern table.
    #[must_use]
    pub fn patterns(self) -> &'static PatternTable {
        match self {
            Self::Bitbucket => &bitbucket::PATTERNS,
            Self::GitHub => &github::PATTERNS,
            Self::GitLab => &gitlab::PATTERNS,
        }
    }

    /// Parse `url` with this provider's rules.
    ///
    /// The host is not checked here; callers that start from an arbitrary URL
    /// go through [`RepositoryParser`](crate::RepositoryParser) instead.
    pub fn parse(self, url: &str) -> Result<Repository, ParseError> {
        self.patterns().parse(url)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
