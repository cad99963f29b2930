//! Common test utilities

use git_remote_url::Repository;

/// Field values a parsed URL is expected to produce.
#[derive(Debug)]
pub struct Expected {
    pub protocol: &'static str,
    pub protocols: &'static [&'static str],
    pub resource: &'static str,
    pub owner: &'static str,
    pub repo: &'static str,
    pub path: &'static str,
    pub branch: &'static str,
    pub provider: &'static str,
}

/// Assert every field of `got`, plus that `href` is the untouched input.
pub fn assert_repository(url: &str, got: &Repository, want: &Expected) {
    assert_eq!(got.protocol(), want.protocol, "protocol of {url}");
    assert_eq!(got.protocols(), want.protocols, "protocols of {url}");
    assert_eq!(got.resource(), want.resource, "resource of {url}");
    assert_eq!(got.host(), want.resource, "host of {url}");
    assert_eq!(got.href(), url, "href of {url}");
    assert_eq!(got.owner(), want.owner, "owner of {url}");
    assert_eq!(got.repo(), want.repo, "repo of {url}");
    assert_eq!(got.path(), want.path, "path of {url}");
    assert_eq!(got.branch(), want.branch, "branch of {url}");
    assert_eq!(got.provider_name(), want.provider, "provider of {url}");
}
