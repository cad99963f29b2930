mod common;

use common::{assert_repository, Expected};
use git_remote_url::{parse_url, ParseError, Provider, RepositoryParser};

const URLS: &[&str] = &[
    "https://github.com/owner/repository",
    "https://raw.githubusercontent.com/owner/repository/main/files/file0.json",
    "git@github.com:owner/repository.git",
    "https://gitlab.com/owner/repository/-/tree/dev",
    "https://gitlab.example.com/owner/repository",
    "git@gitlab.com:owner/repository.git",
    "https://bitbucket.org/owner/repository/src/dev/README.md",
    "git@bitbucket.org:owner/repository.git",
];

#[test]
fn test_href_is_the_input() {
    for url in URLS {
        assert_eq!(parse_url(url).unwrap().href(), *url);
    }
}

#[test]
fn test_parsing_is_idempotent() {
    for url in URLS {
        assert_eq!(parse_url(url).unwrap(), parse_url(url).unwrap(), "{url}");
    }
}

#[test]
fn test_required_fields_are_non_empty() {
    for url in URLS {
        let repo = parse_url(url).unwrap();
        assert!(!repo.protocol().is_empty(), "{url}");
        assert!(!repo.protocols().is_empty(), "{url}");
        assert!(!repo.host().is_empty(), "{url}");
        assert!(!repo.owner().is_empty(), "{url}");
        assert!(!repo.repo().is_empty(), "{url}");
        assert!(!repo.provider_name().is_empty(), "{url}");
    }
}

#[test]
fn test_provider_follows_host() {
    let cases = [
        ("https://bitbucket.org/owner/repository", Provider::Bitbucket),
        ("https://github.com/owner/repository", Provider::GitHub),
        ("https://www.github.com/owner/repository", Provider::GitHub),
        (
            "https://raw.githubusercontent.com/owner/repository/main/README.md",
            Provider::GitHub,
        ),
        ("https://gitlab.com/owner/repository", Provider::GitLab),
        ("https://gitlab.example.com/owner/repository", Provider::GitLab),
    ];
    for (url, want) in cases {
        assert_eq!(parse_url(url).unwrap().provider(), want, "{url}");
    }
}

#[test]
fn test_bitbucket_scp_scenario() {
    let url = "git@bitbucket.org:owner/repository.git";
    let mut parser = RepositoryParser::new();
    parser.register_parser(url).unwrap();
    let got = parser.parse().unwrap();
    assert_repository(
        url,
        &got,
        &Expected {
            protocol: "git",
            protocols: &["git"],
            resource: "bitbucket.org",
            owner: "owner",
            repo: "repository",
            path: "",
            branch: "",
            provider: "bitbucket",
        },
    );
}

#[test]
fn test_unknown_provider_reports_host() {
    let err = parse_url("https://example.com/retr0h/foo").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownProvider {
            host: "example.com".to_string()
        }
    );
}

#[test]
fn test_malformed_scp_is_no_match() {
    let url = "git@github.com:foobar/owner/repository.git";
    let err = parse_url(url).unwrap_err();
    assert!(err.to_string().contains(url));
    assert!(matches!(err, ParseError::NoMatch { .. }));
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let handles: Vec<_> = URLS
        .iter()
        .map(|url| std::thread::spawn(move || parse_url(url)))
        .collect();
    for (handle, url) in handles.into_iter().zip(URLS) {
        let repo = handle.join().unwrap().unwrap();
        assert_eq!(repo.href(), *url);
    }
}
