//! Host extraction, delegated to the `git-url-parse` crate.
//!
//! Handles both URL forms (`https://host/...`, `ssh://user@host:port/...`) and
//! scp-style addresses (`user@host:owner/repo.git`). Inputs `git-url-parse`
//! rejects but that still carry a `scheme://authority` prefix, such as a bare
//! `https://github.com/`, fall back to reading the authority directly so the
//! provider still gets to decide.

use crate::error::ParseError;
use git_url_parse::GitUrl;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

#[expect(
    clippy::expect_used,
    reason = "Authority pattern is a compile-time constant covered by tests"
)]
static AUTHORITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://(?:[^@/]+@)?(?P<host>[^/:@?#]+)(?::\d+)?(?:[/?#].*)?$")
        .expect("authority pattern is a valid regex literal")
});

/// Return the host of `url`, without any port or credentials.
pub fn extract_host(url: &str) -> Result<String, ParseError> {
    let host = match GitUrl::parse(url) {
        Ok(parsed) => parsed
            .host()
            .map(|h| h.to_string())
            .filter(|h| !h.is_empty()),
        Err(e) => {
            debug!(url, error = %e, "git url parse failed");
            None
        }
    }
    .or_else(|| authority_host(url))
    .ok_or_else(|| ParseError::HostExtraction {
        url: url.to_string(),
    })?;

    debug!(url, host = %host, "extracted host");
    Ok(host)
}

fn authority_host(url: &str) -> Option<String> {
    AUTHORITY
        .captures(url)
        .and_then(|caps| caps.name("host"))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
