//! Provider selection and delegation.

use crate::error::ParseError;
use crate::host::extract_host;
use crate::provider::Provider;
use crate::repository::Repository;
use tracing::{debug, info};

/// A URL paired with the provider selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Registration {
    provider: Provider,
    url: String,
}

/// Selects a provider for a URL, then parses the URL with it.
///
/// ```
/// use git_remote_url::{Provider, RepositoryParser};
///
/// let mut parser = RepositoryParser::new();
/// parser.register_parser("git@github.com:owner/repository.git")?;
/// assert_eq!(parser.provider(), Some(Provider::GitHub));
///
/// let repo = parser.parse()?;
/// assert_eq!(repo.owner(), "owner");
/// assert_eq!(repo.repo(), "repository");
/// # Ok::<(), git_remote_url::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RepositoryParser {
    registration: Option<Registration>,
}

impl RepositoryParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the provider for `url` and remember both for [`RepositoryParser::parse`].
    ///
    /// Providers are tried in [`Provider::ALL`] order. A failed registration
    /// clears any earlier one.
    pub fn register_parser(&mut self, url: &str) -> Result<(), ParseError> {
        self.registration = None;

        let host = extract_host(url)?;
        let provider = Provider::detect(&host).ok_or_else(|| ParseError::UnknownProvider {
            host: host.clone(),
        })?;

        debug!(url, host = %host, provider = provider.name(), "registered parser");
        self.registration = Some(Registration {
            provider,
            url: url.to_string(),
        });
        Ok(())
    }

    /// Parse the registered URL with the registered provider.
    pub fn parse(&self) -> Result<Repository, ParseError> {
        let registration = self.registration.as_ref().ok_or(ParseError::NotRegistered)?;
        registration.provider.parse(&registration.url)
    }

    /// The provider chosen by the last successful registration.
    #[must_use]
    pub fn provider(&self) -> Option<Provider> {
        self.registration.as_ref().map(|r| r.provider)
    }

    /// The URL stored by the last successful registration.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.registration.as_ref().map(|r| r.url.as_str())
    }
}

/// Register and parse `url` in one step.
pub fn parse_url(url: &str) -> Result<Repository, ParseError> {
    let mut parser = RepositoryParser::new();
    parser.register_parser(url)?;
    let repository = parser.parse()?;
    info!(
        url,
        provider = repository.provider_name(),
        owner = repository.owner(),
        repo = repository.repo(),
        "parsed remote url"
    );
    Ok(repository)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
