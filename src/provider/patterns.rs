use super::Provider;
use crate::capture::capture_map;
use crate::error::ParseError;
use crate::repository::Repository;
use regex::Regex;
use tracing::debug;

/// An ordered list of anchored URL patterns for one provider.
///
/// Compiled once into a static and shared read-only afterwards.
#[derive(Debug)]
pub struct PatternTable {
    provider: Provider,
    patterns: Vec<Regex>,
}

impl PatternTable {
    pub(super) fn compile(provider: Provider, sources: &[&str]) -> Result<Self, regex::Error> {
        let patterns = sources
            .iter()
            .copied()
            .map(Regex::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { provider, patterns })
    }

    #[must_use]
    pub fn provider(&self) -> Provider {
        self.provider
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern sources in match order.
    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.patterns.iter().map(Regex::as_str)
    }

    /// Indices of every pattern that matches the whole of `url`.
    ///
    /// Parsing only uses the first; this exists to check that a table stays
    /// unambiguous for the URLs it is meant to handle.
    #[must_use]
    pub fn matching_indices(&self, url: &str) -> Vec<usize> {
        self.patterns
            .iter()
            .enumerate()
            .filter(|(_, re)| re.is_match(url))
            .map(|(i, _)| i)
            .collect()
    }

    /// Run the table in order and build a record from the first match.
    pub fn parse(&self, url: &str) -> Result<Repository, ParseError> {
        for re in &self.patterns {
            let matched = re.is_match(url);
            debug!(
                url,
                pattern = re.as_str(),
                provider = self.provider.name(),
                matched,
                "matching url"
            );
            if !matched {
                continue;
            }
            let captures = capture_map(re, url);
            if let Some(repository) = Repository::from_captures(self.provider, url, &captures) {
                return Ok(repository);
            }
        }

        Err(ParseError::NoMatch {
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
