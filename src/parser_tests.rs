use super::*;

#[test]
fn test_register_parser_selects_provider() {
    let cases = [
        ("https://bitbucket.org/retr0h/foo", Provider::Bitbucket),
        ("https://github.com/retr0h/foo", Provider::GitHub),
        ("https://gitlab.com/retr0h/foo", Provider::GitLab),
        ("git@gitlab.example.com:retr0h/foo.git", Provider::GitLab),
    ];

    for (url, want) in cases {
        let mut parser = RepositoryParser::new();
        parser.register_parser(url).unwrap();
        assert_eq!(parser.provider(), Some(want), "{url}");
        assert_eq!(parser.url(), Some(url));
    }
}

#[test]
fn test_register_parser_unknown_host() {
    let mut parser = RepositoryParser::new();
    let err = parser
        .register_parser("https://example.com/retr0h/foo")
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownProvider {
            host: "example.com".to_string()
        }
    );
    assert_eq!(err.to_string(), "could not find parser for host: example.com");
}

#[test]
fn test_register_parser_without_host() {
    let mut parser = RepositoryParser::new();
    let err = parser.register_parser("invalid giturls host").unwrap_err();
    assert!(matches!(err, ParseError::HostExtraction { .. }));
    assert_eq!(parser.provider(), None);
}

#[test]
fn test_failed_registration_clears_previous() {
    let mut parser = RepositoryParser::new();
    parser.register_parser("https://github.com/retr0h/foo").unwrap();
    assert!(parser.register_parser("https://example.com/retr0h/foo").is_err());
    assert_eq!(parser.provider(), None);
    assert_eq!(parser.parse().unwrap_err(), ParseError::NotRegistered);
}

#[test]
fn test_parse_before_register() {
    let parser = RepositoryParser::new();
    assert_eq!(parser.parse().unwrap_err(), ParseError::NotRegistered);
}

#[test]
fn test_parse_delegates_to_registered_provider() {
    let mut parser = RepositoryParser::new();
    parser.register_parser("https://github.com/retr0h/foo").unwrap();
    let repo = parser.parse().unwrap();
    assert_eq!(repo.provider_name(), "github");
    assert_eq!(repo.owner(), "retr0h");
    assert_eq!(repo.repo(), "foo");
}

#[test]
fn test_parse_url_without_owner_is_no_match() {
    for url in [
        "https://github.com/",
        "https://bitbucket.org/",
        "https://gitlab.com/",
    ] {
        assert_eq!(
            parse_url(url).unwrap_err(),
            ParseError::NoMatch {
                url: url.to_string()
            },
            "{url}"
        );
    }
}

#[test]
fn test_register_parser_without_owner_selects_provider() {
    let mut parser = RepositoryParser::new();
    parser.register_parser("https://github.com/").unwrap();
    assert_eq!(parser.provider(), Some(Provider::GitHub));
}

#[test]
fn test_parse_url_unknown_scheme_fails() {
    assert!(parse_url("bogus://url/").is_err());
}

#[test]
fn test_parse_url_self_hosted_gitlab_with_port() {
    let repo = parse_url("https://gitlab.example.com:8443/owner/repository").unwrap();
    assert_eq!(repo.provider(), Provider::GitLab);
    assert_eq!(repo.resource(), "gitlab.example.com:8443");
    assert_eq!(repo.owner(), "owner");
    assert_eq!(repo.repo(), "repository");
}

#[test]
fn test_parse_url_malformed_scp() {
    assert_eq!(
        parse_url("git@github.com:foobar/owner/repository.git").unwrap_err(),
        ParseError::NoMatch {
            url: "git@github.com:foobar/owner/repository.git".to_string()
        }
    );
}

#[test]
fn test_parse_url_one_shot() {
    let repo = parse_url("git@bitbucket.org:owner/repository.git").unwrap();
    assert_eq!(repo.protocol(), "git");
    assert_eq!(repo.provider(), Provider::Bitbucket);
}
